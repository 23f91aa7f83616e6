//! # Menagerie Binary
//!
//! The entry point that assembles the application based on compile-time
//! features.

mod config;

use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::{web, App, HttpServer};
use mg_api::handlers::AppState;
use mg_api::{configure_routes, middleware};

use config::AppConfig;

// Feature-gated imports: the binary is compiled to order
#[cfg(feature = "store-fs")]
use mg_store_fs::{LocalCurationStore, LocalGalleryStore};

#[cfg(feature = "auth-simple")]
use mg_auth_simple::SharedSecretProvider;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();

    // 1. Initialize the gallery and curation stores
    #[cfg(feature = "store-fs")]
    let gallery = LocalGalleryStore::new(config.store_root.clone());
    #[cfg(feature = "store-fs")]
    let curation =
        LocalCurationStore::new(config.store_root.clone(), config.quarantine_dir.clone());

    // 2. Initialize the auth provider
    #[cfg(feature = "auth-simple")]
    let auth = SharedSecretProvider::new(&config.shared_secret);

    // 3. Wrap in AppState (dynamic dispatch keeps the plugins swappable)
    let state = web::Data::new(AppState {
        gallery: Box::new(gallery),
        curation: Box::new(curation),
        auth: Box::new(auth),
    });

    let session_key = Key::derive_from(config.session_key.as_bytes());

    log::info!(
        "menagerie serving {} on http://{}:{}",
        config.store_root.display(),
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::standard_middleware())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                session_key.clone(),
            ))
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
