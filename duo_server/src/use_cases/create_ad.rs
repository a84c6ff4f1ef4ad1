use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::Ad;
use crate::domain::errors::AdError;
use crate::domain::ports::{AdStore, Clock, GameStore};
use crate::domain::time_of_day::TimeOfDay;
use crate::domain::week_days::{join_week_days, validate_week_days};
use crate::interface_adapters::protocol::CreateAdRequest;
use crate::use_cases::parse_id;

// Created ad in its persisted shape: minute offsets and joined weekday tokens.
#[derive(Debug)]
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

// Ad creation use case with injected dependencies.
pub struct CreateAdUseCase<C, G, A> {
    pub clock: C,
    pub games: G,
    pub ads: A,
}

impl<C, G, A> CreateAdUseCase<C, G, A>
where
    C: Clock,
    G: GameStore,
    A: AdStore,
{
    pub async fn execute(
        &self,
        game_id: &str,
        payload: CreateAdRequest,
    ) -> Result<CreateAdResponse, AdError> {
        let name = required_text(&payload.name).ok_or(AdError::InvalidName)?;
        let discord = required_text(&payload.discord).ok_or(AdError::InvalidDiscord)?;
        if payload.years_playing < 0 {
            return Err(AdError::InvalidYearsPlaying);
        }
        let week_days = validate_week_days(payload.week_days)?;
        let hour_start = TimeOfDay::parse(&payload.hour_start).map_err(AdError::InvalidHourStart)?;
        let hour_end = TimeOfDay::parse(&payload.hour_end).map_err(AdError::InvalidHourEnd)?;

        let game_id = parse_id(game_id).ok_or(AdError::GameNotFound)?;
        let game = self
            .games
            .find(game_id)
            .await
            .map_err(AdError::StorageFailure)?
            .ok_or(AdError::GameNotFound)?;

        // Windows that cross midnight (hourEnd before hourStart) are kept as given.
        let ad = Ad {
            id: Uuid::new_v4(),
            game_id: game.id,
            name,
            years_playing: payload.years_playing,
            discord,
            week_days: join_week_days(&week_days),
            hour_start: hour_start.minutes(),
            hour_end: hour_end.minutes(),
            use_voice_channel: payload.use_voice_channel,
            created_at: self.clock.now(),
        };

        self.ads
            .insert(ad.clone())
            .await
            .map_err(AdError::StorageFailure)?;

        info!(ad_id = %ad.id, game_id = %ad.game_id, "ad created");

        Ok(CreateAdResponse {
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
        })
    }
}

fn required_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
