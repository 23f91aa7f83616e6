//! # mg-api
//!
//! The web routing and orchestration layer for Menagerie.

pub mod handlers;
pub mod middleware;

use actix_web::web;
use middleware::SessionGate;

/// Configures the routes for the gallery.
///
/// # Developer Note
/// Login and logout stay outside the gated scope; everything else passes
/// through [`SessionGate`] before it can touch the store. Fixed paths are
/// registered ahead of the `/{animal}` catch-all so `favorites`, `board`
/// and `static` never resolve as category names.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/login")
            .route(web::get().to(handlers::login_form))
            .route(web::post().to(handlers::login_submit)),
    )
    .service(web::resource("/logout").route(web::get().to(handlers::logout)))
    .service(
        web::scope("")
            .wrap(SessionGate)
            .route("/", web::get().to(handlers::animal_index))
            .route("/favorites", web::get().to(handlers::show_favorites))
            .route("/favorite", web::post().to(handlers::favorite))
            .route("/delete", web::post().to(handlers::delete_image))
            .route("/board/{board:.*}", web::get().to(handlers::board))
            .route("/static/{file:.*}", web::get().to(handlers::static_file))
            .route("/{animal}", web::get().to(handlers::animal_gallery)),
    );
}
