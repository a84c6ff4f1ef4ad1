use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::entities::{Ad, Game, GameSummary};
use crate::domain::ports::{AdStore, Clock, GameStore};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at(epoch_seconds: i64) -> Self {
        Self(
            Utc.timestamp_opt(epoch_seconds, 0)
                .single()
                .expect("valid timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub games: bool,
    pub insert: bool,
    pub list: bool,
    pub find_discord: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    games: Arc<Mutex<Vec<Game>>>,
    ads: Arc<Mutex<Vec<Ad>>>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            games: Arc::new(Mutex::new(Vec::new())),
            ads: Arc::new(Mutex::new(Vec::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_game(&self, title: &str) -> Game {
        let game = Game {
            id: Uuid::new_v4(),
            title: title.to_string(),
            banner_url: format!("https://cdn.example.test/{title}.jpg"),
        };
        let mut guard = self.games.lock().expect("games mutex poisoned");
        guard.push(game.clone());
        game
    }

    pub(crate) fn insert_test_ad(&self, ad: Ad) {
        let mut guard = self.ads.lock().expect("ads mutex poisoned");
        guard.push(ad);
    }

    pub(crate) fn stored_ads(&self) -> Vec<Ad> {
        let guard = self.ads.lock().expect("ads mutex poisoned");
        guard.clone()
    }
}

// Minimal stored ad with a configurable game and creation time.
pub(crate) fn test_ad(game_id: Uuid, name: &str, created_at: DateTime<Utc>) -> Ad {
    Ad {
        id: Uuid::new_v4(),
        game_id,
        name: name.to_string(),
        years_playing: 2,
        discord: format!("{name}#0001"),
        week_days: "1,3".to_string(),
        hour_start: 18 * 60,
        hour_end: 22 * 60,
        use_voice_channel: true,
        created_at,
    }
}

#[async_trait]
impl GameStore for RecordingStore {
    async fn list_with_ad_counts(&self) -> Result<Vec<GameSummary>, String> {
        if self.failures.games {
            return Err("list games failed".to_string());
        }

        let games = self.games.lock().expect("games mutex poisoned");
        let ads = self.ads.lock().expect("ads mutex poisoned");
        games
            .iter()
            .map(|game| -> Result<GameSummary, String> {
                let count = ads.iter().filter(|ad| ad.game_id == game.id).count();
                Ok(GameSummary {
                    game: game.clone(),
                    ad_count: i64::try_from(count).map_err(|err| err.to_string())?,
                })
            })
            .collect()
    }

    async fn find(&self, game_id: Uuid) -> Result<Option<Game>, String> {
        if self.failures.games {
            return Err("find game failed".to_string());
        }

        let guard = self.games.lock().expect("games mutex poisoned");
        Ok(guard.iter().find(|game| game.id == game_id).cloned())
    }
}

#[async_trait]
impl AdStore for RecordingStore {
    async fn insert(&self, ad: Ad) -> Result<(), String> {
        if self.failures.insert {
            return Err("insert failed".to_string());
        }

        let mut guard = self.ads.lock().expect("ads mutex poisoned");
        guard.push(ad);
        Ok(())
    }

    async fn list_by_game(&self, game_id: Uuid) -> Result<Vec<Ad>, String> {
        if self.failures.list {
            return Err("list ads failed".to_string());
        }

        let guard = self.ads.lock().expect("ads mutex poisoned");
        let mut ads: Vec<Ad> = guard
            .iter()
            .filter(|ad| ad.game_id == game_id)
            .cloned()
            .collect();
        ads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(ads)
    }

    async fn find_discord(&self, ad_id: Uuid) -> Result<Option<String>, String> {
        if self.failures.find_discord {
            return Err("find discord failed".to_string());
        }

        let guard = self.ads.lock().expect("ads mutex poisoned");
        Ok(guard
            .iter()
            .find(|ad| ad.id == ad_id)
            .map(|ad| ad.discord.clone()))
    }
}
