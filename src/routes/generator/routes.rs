use crate::routes;
use actix_web::web;

pub fn generator_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // The page itself; a POST is one click of `generate`
        .route("/", web::get().to(routes::show_page))
        .route("/", web::post().to(routes::click_generate))
        // JSON API, never touches the clipboard
        .service(web::scope("/v1").route("/api_url", web::post().to(routes::generate_api_url)));
}
