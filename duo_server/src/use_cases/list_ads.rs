use uuid::Uuid;

use crate::domain::entities::Game;
use crate::domain::errors::AdError;
use crate::domain::ports::{AdStore, GameStore};
use crate::domain::time_of_day::minutes_to_hour_string;
use crate::domain::week_days::split_week_days;
use crate::use_cases::parse_id;

// Public view of an ad; the discord handle is revealed separately.
#[derive(Debug)]
pub struct AdListing {
    pub id: Uuid,
    pub name: String,
    pub week_days: Vec<String>,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: String,
    pub hour_end: String,
    pub game: Game,
}

// Ads-by-game listing use case with injected dependencies.
pub struct ListAdsUseCase<G, A> {
    pub games: G,
    pub ads: A,
}

impl<G, A> ListAdsUseCase<G, A>
where
    G: GameStore,
    A: AdStore,
{
    pub async fn execute(&self, game_id: &str) -> Result<Vec<AdListing>, AdError> {
        // Unknown games simply have no ads.
        let Some(game_id) = parse_id(game_id) else {
            return Ok(Vec::new());
        };
        let Some(game) = self
            .games
            .find(game_id)
            .await
            .map_err(AdError::StorageFailure)?
        else {
            return Ok(Vec::new());
        };

        let ads = self
            .ads
            .list_by_game(game.id)
            .await
            .map_err(AdError::StorageFailure)?;

        Ok(ads
            .into_iter()
            .map(|ad| AdListing {
                id: ad.id,
                name: ad.name,
                week_days: split_week_days(&ad.week_days),
                use_voice_channel: ad.use_voice_channel,
                years_playing: ad.years_playing,
                hour_start: minutes_to_hour_string(ad.hour_start),
                hour_end: minutes_to_hour_string(ad.hour_end),
                game: game.clone(),
            })
            .collect())
    }
}
