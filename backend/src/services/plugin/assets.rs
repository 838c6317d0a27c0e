use actix_web::{web, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

const CLIENT_FILE: &str = "plugin-client.js";

pub async fn client() -> HttpResponse {
    serve_embedded(CLIENT_FILE)
}

pub async fn process(file: web::Path<String>) -> HttpResponse {
    serve_embedded(file.trim_start_matches('/'))
}

fn serve_embedded(file_path: &str) -> HttpResponse {
    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => HttpResponse::NotFound().body("Not Found"),
    }
}
