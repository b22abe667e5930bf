use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_car::create_car;
use super::handlers::get_user::get_user;
use super::handlers::list_cars::list_cars;
use super::handlers::login::login;
use super::handlers::register::register;
use super::middleware::authorize;
use super::middleware::AccessGuard;
use crate::domain::car::ports::CarServicePort;
use crate::domain::user::models::RoleName;
use crate::domain::user::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub car_service: Arc<dyn CarServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    car_service: Arc<dyn CarServicePort>,
) -> Router {
    let state = AppState {
        auth_service: Arc::clone(&auth_service),
        car_service,
    };

    let public_routes = Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/v1/cars", get(list_cars));

    let authenticated_routes = Router::new()
        .route("/user", get(get_user))
        .route_layer(middleware::from_fn_with_state(
            AccessGuard::any_role(Arc::clone(&auth_service)),
            authorize,
        ));

    let admin_routes = Router::new()
        .route("/v1/cars", post(create_car))
        .route_layer(middleware::from_fn_with_state(
            AccessGuard::require(auth_service, RoleName::Admin),
            authorize,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
