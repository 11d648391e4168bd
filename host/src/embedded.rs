use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// Serves a bundled file, falling back to `index.html` for client-side paths.
///
/// `/api/...` is never answered with the page: those requests belong to the
/// users backend and get a 404 here.
pub async fn serve(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    if path == "api" || path.starts_with("api/") {
        return HttpResponse::NotFound().body("Not Found");
    }
    let file_path = if path.is_empty() { INDEX } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file(INDEX) {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn root_serves_index() {
        let app = test::init_service(App::new().default_service(web::route().to(serve))).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert!(resp.status().is_success());
        let content_type = resp.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let app = test::init_service(App::new().default_service(web::route().to(serve))).await;
        let index =
            test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        let deep =
            test::call_and_read_body(&app, test::TestRequest::get().uri("/users/42").to_request())
                .await;

        assert_eq!(index, deep);
    }

    #[actix_web::test]
    async fn api_paths_are_not_served() {
        let app = test::init_service(App::new().default_service(web::route().to(serve))).await;
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/users/").to_request())
                .await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
