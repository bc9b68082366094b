use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_station::create_station;
use super::handlers::delete_station::delete_station;
use super::handlers::list_stations::list_stations;
use super::handlers::login::login;
use super::handlers::sign_up::sign_up;
use super::handlers::update_station::update_station;
use super::middleware::authenticate as auth_middleware;
use crate::domain::station::service::StationService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::station::PostgresStationRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub station_service: Arc<StationService<PostgresStationRepository>>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    station_service: Arc<StationService<PostgresStationRepository>>,
    authenticator: Arc<Authenticator>,
    jwt_expiration_hours: i64,
) -> Router {
    let state = AppState {
        user_service,
        station_service,
        authenticator,
        jwt_expiration_hours,
    };

    let public_routes = Router::new()
        .route("/api/auth/sign-up", post(sign_up))
        .route("/api/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/api/charging-stations", post(create_station))
        .route("/api/charging-stations", get(list_stations))
        .route("/api/charging-stations/:station_id", patch(update_station))
        .route("/api/charging-stations/:station_id", delete(delete_station))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
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
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
