//! menagerie/crates/mg-api/src/middleware.rs Middleware
//!
//! The session gate fronting every route except login/logout, plus the
//! standard request logger.

use std::future::{ready, Ready};

use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;

/// Session key marking a browser session as authenticated.
pub const SESSION_AUTH_KEY: &str = "logged_in";

// Returns a standard set of middleware for the Menagerie app.
pub fn standard_middleware() -> Logger {
    // We use the 'default' logger which outputs:
    // remote-ip "request-line" status-code response-size "referrer" "user-agent"
    Logger::default()
}

/// Redirects unauthenticated requests to the login form, carrying the
/// originally requested URL so the user lands back where they started
/// after a successful login.
pub struct SessionGate;

impl<S, B> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionGateMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGateMiddleware { service }))
    }
}

pub struct SessionGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SessionGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let logged_in = req
            .get_session()
            .get::<bool>(SESSION_AUTH_KEY)
            .ok()
            .flatten()
            .unwrap_or(false);

        if !logged_in {
            let next = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str().to_owned())
                .unwrap_or_else(|| "/".to_owned());
            let query =
                serde_urlencoded::to_string([("next", next.as_str())]).unwrap_or_default();

            let (request, _payload) = req.into_parts();
            let response = HttpResponse::SeeOther()
                .insert_header((header::LOCATION, format!("/login?{query}")))
                .finish()
                .map_into_right_body();
            return Box::pin(async move { Ok(ServiceResponse::new(request, response)) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}
