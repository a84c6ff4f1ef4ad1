use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{Ad, Game, GameSummary};

// Port for reading the game catalog.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn list_with_ad_counts(&self) -> Result<Vec<GameSummary>, String>;
    async fn find(&self, game_id: Uuid) -> Result<Option<Game>, String>;
}

// Port for ad persistence used by the ad use cases.
#[async_trait]
pub trait AdStore: Send + Sync {
    async fn insert(&self, ad: Ad) -> Result<(), String>;
    // Newest first.
    async fn list_by_game(&self, game_id: Uuid) -> Result<Vec<Ad>, String>;
    async fn find_discord(&self, ad_id: Uuid) -> Result<Option<String>, String>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// Shared handles in `AppState` are passed straight into use cases.
#[async_trait]
impl<T: GameStore + ?Sized> GameStore for Arc<T> {
    async fn list_with_ad_counts(&self) -> Result<Vec<GameSummary>, String> {
        (**self).list_with_ad_counts().await
    }

    async fn find(&self, game_id: Uuid) -> Result<Option<Game>, String> {
        (**self).find(game_id).await
    }
}

#[async_trait]
impl<T: AdStore + ?Sized> AdStore for Arc<T> {
    async fn insert(&self, ad: Ad) -> Result<(), String> {
        (**self).insert(ad).await
    }

    async fn list_by_game(&self, game_id: Uuid) -> Result<Vec<Ad>, String> {
        (**self).list_by_game(game_id).await
    }

    async fn find_discord(&self, ad_id: Uuid) -> Result<Option<String>, String> {
        (**self).find_discord(ad_id).await
    }
}
