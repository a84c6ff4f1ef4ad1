use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Game, GameSummary};
use crate::use_cases::create_ad::CreateAdResponse as CreatedAd;
use crate::use_cases::list_ads::AdListing;

// Liveness check payload.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub pong: bool,
}

// Game record as embedded in responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: Uuid,
    pub title: String,
    pub banner_url: String,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            title: game.title,
            banner_url: game.banner_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdCount {
    pub ads: i64,
}

// Catalog entry annotated with its ad count under `_count`.
#[derive(Debug, Serialize)]
pub struct GameSummaryResponse {
    #[serde(flatten)]
    pub game: GameResponse,
    #[serde(rename = "_count")]
    pub count: AdCount,
}

impl From<GameSummary> for GameSummaryResponse {
    fn from(summary: GameSummary) -> Self {
        Self {
            game: summary.game.into(),
            count: AdCount {
                ads: summary.ad_count,
            },
        }
    }
}

// Request payload for publishing an ad.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub use_voice_channel: bool,
    pub week_days: Vec<String>,
    pub hour_start: String,
    pub hour_end: String,
}

// Response payload for a created ad, echoing the stored record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdResponse {
    pub id: Uuid,
    pub game_id: Uuid,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: String,
    pub hour_start: u32,
    pub hour_end: u32,
    pub use_voice_channel: bool,
    pub created_at: DateTime<Utc>,
}

impl From<CreatedAd> for CreateAdResponse {
    fn from(ad: CreatedAd) -> Self {
        Self {
            id: ad.id,
            game_id: ad.game_id,
            name: ad.name,
            years_playing: ad.years_playing,
            discord: ad.discord,
            week_days: ad.week_days,
            hour_start: ad.hour_start,
            hour_end: ad.hour_end,
            use_voice_channel: ad.use_voice_channel,
            created_at: ad.created_at,
        }
    }
}

// One entry of the ads-by-game listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdListingResponse {
    pub id: Uuid,
    pub name: String,
    pub week_days: Vec<String>,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: String,
    pub hour_end: String,
    pub game: GameResponse,
}

impl From<AdListing> for AdListingResponse {
    fn from(ad: AdListing) -> Self {
        Self {
            id: ad.id,
            name: ad.name,
            week_days: ad.week_days,
            use_voice_channel: ad.use_voice_channel,
            years_playing: ad.years_playing,
            hour_start: ad.hour_start,
            hour_end: ad.hour_end,
            game: ad.game.into(),
        }
    }
}

// Response payload for the discord reveal.
#[derive(Debug, Serialize)]
pub struct DiscordResponse {
    pub discord: String,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
