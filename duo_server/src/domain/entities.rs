use chrono::{DateTime, Utc};
use uuid::Uuid;

// Game catalog entry that ads are posted against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub id: Uuid,
    pub title: String,
    pub banner_url: String,
}

// Game plus the number of ads referencing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub game: Game,
    pub ad_count: i64,
}

// Ad record in its persisted shape: weekdays joined, hours as minute offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ad {
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
