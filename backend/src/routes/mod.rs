//! Route definitions for the Mitra farming assistant

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Localization (public)
        .nest("/i18n", i18n_routes())
        // Weather (public)
        .nest("/weather", weather_routes())
        // Crop advisory (public)
        .nest("/advisory", advisory_routes())
        // Market prices (prices are protected)
        .nest("/market", market_routes(state.clone()))
        // Auth routes
        .nest("/auth", auth_routes(state))
}

/// Localization routes
fn i18n_routes() -> Router<AppState> {
    Router::new()
        .route("/languages", get(handlers::list_languages))
        .route("/translate", get(handlers::translate_key))
        .route("/translate-text", post(handlers::translate_free_text))
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_weather))
        .route("/cities", get(handlers::list_cities))
        .route(
            "/selection",
            get(handlers::current_selection).post(handlers::select_city),
        )
}

/// Advisory routes
fn advisory_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::get_advice))
        .route("/options", get(handlers::advisory_options))
}

/// Market routes
fn market_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/prices", get(handlers::market_prices))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/states", get(handlers::market_states))
        .merge(protected)
}

/// Authentication routes
fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/login", post(handlers::login))
        .route("/register", post(handlers::register))
        .route("/verify-phone", post(handlers::verify_phone))
        .route("/confirm-otp", post(handlers::confirm_otp))
        .route("/logout", post(handlers::logout))
        .merge(protected)
}
