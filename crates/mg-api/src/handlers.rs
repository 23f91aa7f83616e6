//! # mg-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the core
//! ports. Handlers stay thin: resolve form/path input, call a port, map
//! the result onto a template render or a redirect.

use actix_files::NamedFile;
use actix_session::Session;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use askama::Template;
use mg_core::error::AppError;
use mg_core::traits::{AuthProvider, CurationStore, GalleryRepo};
use mg_ui::{AnimalIndexTemplate, BoardTemplate, CollectionIndexTemplate, LoginTemplate};
use serde::Deserialize;

use crate::middleware::SESSION_AUTH_KEY;

/// State shared across all Actix-web workers.
pub struct AppState {
    pub gallery: Box<dyn GalleryRepo>,
    pub curation: Box<dyn CurationStore>,
    pub auth: Box<dyn AuthProvider>,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
    pub next: Option<String>,
}

/// Form body shared by the favorite and delete endpoints.
#[derive(Deserialize)]
pub struct CurationForm {
    pub image_path: String,
}

/// Renders the login form.
pub async fn login_form(query: web::Query<LoginQuery>) -> impl Responder {
    render_login(None, query.next.as_deref())
}

/// Attempts a login against the shared secret.
pub async fn login_submit(
    data: web::Data<AppState>,
    session: Session,
    form: web::Form<LoginForm>,
) -> actix_web::Result<HttpResponse> {
    if !data.auth.verify(&form.password) {
        return Ok(render_login(Some("Incorrect password."), form.next.as_deref()));
    }

    session.insert(SESSION_AUTH_KEY, true)?;

    // Resume the originally requested page, but never leave the site.
    let target = form
        .next
        .as_deref()
        .filter(|n| n.starts_with('/'))
        .unwrap_or("/");
    Ok(see_other(target))
}

pub async fn logout(session: Session) -> impl Responder {
    session.purge();
    see_other("/login")
}

/// Renders the category index at the gallery root.
pub async fn animal_index(data: web::Data<AppState>) -> impl Responder {
    match data.gallery.list_categories().await {
        Ok(animals) => {
            let html = AnimalIndexTemplate { animals: &animals }
                .render()
                .expect("template rendering failed");
            HttpResponse::Ok().content_type("text/html").body(html)
        }
        Err(err) => internal_error(err),
    }
}

/// Renders the collection index for one animal; 404 when the category
/// directory does not exist.
pub async fn animal_gallery(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let animal = path.into_inner();
    match data.gallery.list_collections(&animal).await {
        Ok(folders) => {
            let html = CollectionIndexTemplate {
                animal: &animal,
                folders: &folders,
            }
            .render()
            .expect("template rendering failed");
            HttpResponse::Ok().content_type("text/html").body(html)
        }
        Err(AppError::NotFound(..)) => HttpResponse::NotFound().finish(),
        Err(err) => internal_error(err),
    }
}

/// Renders a board addressed by an arbitrary nested path (e.g.
/// /board/cats/orange).
pub async fn board(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let board_name = path.into_inner();
    match data.gallery.list_images(&board_name).await {
        Ok(listing) => {
            let html = BoardTemplate {
                name: &listing.name,
                animal: listing.category.as_deref(),
                images: &listing.images,
            }
            .render()
            .expect("template rendering failed");
            HttpResponse::Ok().content_type("text/html").body(html)
        }
        Err(AppError::NotFound(..)) => HttpResponse::NotFound().finish(),
        Err(err) => internal_error(err),
    }
}

/// Renders the favorites collection through the shared tile template.
pub async fn show_favorites(data: web::Data<AppState>) -> impl Responder {
    match data.gallery.list_favorites().await {
        Ok(folders) => {
            let html = CollectionIndexTemplate {
                animal: "favorites",
                folders: &folders,
            }
            .render()
            .expect("template rendering failed");
            HttpResponse::Ok().content_type("text/html").body(html)
        }
        Err(err) => internal_error(err),
    }
}

/// Copies an image into the favorites collection, then sends the user
/// back where they came from.
pub async fn favorite(
    data: web::Data<AppState>,
    form: web::Form<CurationForm>,
    req: HttpRequest,
) -> impl Responder {
    match data.curation.add_favorite(&form.image_path).await {
        Ok(()) => back_to_referer(&req),
        Err(AppError::BadRequest(_)) => HttpResponse::BadRequest().finish(),
        Err(AppError::NotFound(..)) => HttpResponse::NotFound().finish(),
        Err(err) => internal_error(err),
    }
}

/// Moves an image into quarantine, then sends the user back.
pub async fn delete_image(
    data: web::Data<AppState>,
    form: web::Form<CurationForm>,
    req: HttpRequest,
) -> impl Responder {
    match data.curation.archive(&form.image_path).await {
        Ok(()) => back_to_referer(&req),
        Err(AppError::BadRequest(_)) => HttpResponse::BadRequest().finish(),
        Err(AppError::NotFound(..)) => HttpResponse::NotFound().finish(),
        Err(err) => internal_error(err),
    }
}

/// Streams raw file bytes from the store root.
pub async fn static_file(
    data: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> actix_web::Result<HttpResponse> {
    match data.gallery.resolve_file(&path.into_inner()).await {
        Ok(file_path) => {
            let file = NamedFile::open_async(file_path).await?;
            Ok(file.into_response(&req))
        }
        Err(AppError::NotFound(..)) => Ok(HttpResponse::NotFound().finish()),
        Err(err) => Ok(internal_error(err)),
    }
}

fn render_login(error: Option<&str>, next: Option<&str>) -> HttpResponse {
    let html = LoginTemplate { error, next }
        .render()
        .expect("template rendering failed");
    HttpResponse::Ok().content_type("text/html").body(html)
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// Redirect back to the referring page, or the gallery root when the
/// browser sent no usable Referer.
fn back_to_referer(req: &HttpRequest) -> HttpResponse {
    let target = req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/");
    see_other(target)
}

fn internal_error(err: AppError) -> HttpResponse {
    log::error!("request failed: {err}");
    HttpResponse::InternalServerError().finish()
}
