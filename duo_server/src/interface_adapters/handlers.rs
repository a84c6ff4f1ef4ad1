use crate::domain::errors::AdError;
use crate::interface_adapters::protocol::{
    AdListingResponse, CreateAdRequest, CreateAdResponse, DiscordResponse, ErrorResponse,
    GameSummaryResponse, PingResponse,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::create_ad::CreateAdUseCase;
use crate::use_cases::list_ads::ListAdsUseCase;
use crate::use_cases::list_games::ListGamesUseCase;
use crate::use_cases::reveal_discord::RevealDiscordUseCase;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{debug, error};

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { pong: true })
}

// Handler for the game catalog with per-game ad counts.
pub async fn list_games(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameSummaryResponse>>, ApiError> {
    let use_case = ListGamesUseCase {
        games: state.games.clone(),
    };

    let games = use_case.execute().await.map_err(map_ad_error)?;

    Ok(Json(games.into_iter().map(Into::into).collect()))
}

// Handler for publishing a new ad under a game.
pub async fn create_ad(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Json(payload): Json<CreateAdRequest>,
) -> Result<(StatusCode, Json<CreateAdResponse>), ApiError> {
    let use_case = CreateAdUseCase {
        clock: SystemClock,
        games: state.games.clone(),
        ads: state.ads.clone(),
    };

    let ad = use_case
        .execute(&game_id, payload)
        .await
        .map_err(map_ad_error)?;

    Ok((StatusCode::CREATED, Json(ad.into())))
}

// Handler for the ads of one game, newest first.
pub async fn list_ads(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<AdListingResponse>>, ApiError> {
    let use_case = ListAdsUseCase {
        games: state.games.clone(),
        ads: state.ads.clone(),
    };

    let ads = use_case.execute(&game_id).await.map_err(map_ad_error)?;

    Ok(Json(ads.into_iter().map(Into::into).collect()))
}

// Handler revealing the contact handle for a single ad.
pub async fn reveal_discord(
    State(state): State<AppState>,
    Path(ad_id): Path<String>,
) -> Result<Json<DiscordResponse>, ApiError> {
    let use_case = RevealDiscordUseCase {
        ads: state.ads.clone(),
    };

    let result = use_case.execute(&ad_id).await.map_err(map_ad_error)?;

    Ok(Json(DiscordResponse {
        discord: result.discord,
    }))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

// Maps domain errors to HTTP responses.
fn map_ad_error(err: AdError) -> ApiError {
    match err {
        AdError::InvalidName
        | AdError::InvalidDiscord
        | AdError::InvalidYearsPlaying
        | AdError::InvalidWeekDays
        | AdError::InvalidHourStart(_)
        | AdError::InvalidHourEnd(_) => {
            debug!(error = %err, "rejected ad payload");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
        AdError::GameNotFound | AdError::AdNotFound => {
            error_response(StatusCode::NOT_FOUND, &err.to_string())
        }
        AdError::StorageFailure(ref reason) => {
            error!(error = %reason, "storage failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "storage error")
        }
    }
}
