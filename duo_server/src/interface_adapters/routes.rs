use crate::interface_adapters::handlers::{create_ad, list_ads, list_games, ping, reveal_discord};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/games", get(list_games))
        .route("/games/{game_id}/ads", get(list_ads).post(create_ad))
        .route("/ads/{ad_id}/discord", get(reveal_discord))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
