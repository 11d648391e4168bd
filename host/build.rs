use std::fs;
use std::path::Path;

use fs_extra::dir::CopyOptions;

const PLACEHOLDER_INDEX: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Users</title></head>
<body><p>The frontend bundle is missing. Run <code>trunk build --release</code> in <code>frontend/</code> and rebuild the host.</p></body>
</html>
"#;

fn main() {
    let out_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &CopyOptions::new().overwrite(true).content_only(true),
        )
        .unwrap();
    } else if !out_dir.join("index.html").exists() {
        fs::create_dir_all(out_dir).unwrap();
        fs::write(out_dir.join("index.html"), PLACEHOLDER_INDEX).unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
