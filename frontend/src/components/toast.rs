use common::notice::{Notice, NoticeKind};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_MILLIS: u32 = 3000;

/// Shows `notice` at the bottom of the screen for a few seconds.
///
/// The element is appended straight to `<body>` so that a toast raised by a
/// component that unmounts right after (a closing dialog) stays visible.
pub fn show_toast(notice: &Notice) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    let title = document.create_element("strong");
    let description = document.create_element("div");
    if let (Ok(title), Ok(description)) = (title, description) {
        title.set_text_content(Some(notice.title));
        description.set_text_content(Some(notice.description));
        toast.append_child(&title).ok();
        toast.append_child(&description).ok();
    }

    let background = match notice.kind {
        NoticeKind::Success => "rgba(0, 0, 0, 0.8)",
        NoticeKind::Failure => "rgba(211, 47, 47, 0.95)",
    };

    let html_toast: HtmlElement = toast.unchecked_into();
    html_toast.set_class_name("toast");
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("right", "20px").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
