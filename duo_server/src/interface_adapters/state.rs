use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::{Ad, Game, GameSummary};
use crate::domain::ports::{AdStore, Clock, GameStore};

// Application state holding the injected persistence handles.
#[derive(Clone)]
pub struct AppState {
    pub games: Arc<dyn GameStore>,
    pub ads: Arc<dyn AdStore>,
}

impl AppState {
    // Use one adapter for both ports.
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: GameStore + AdStore + 'static,
    {
        Self {
            games: store.clone(),
            ads: store,
        }
    }
}

// PostgreSQL-backed store for games and ads.
#[derive(Clone)]
pub struct PostgresStore {
    pub db: PgPool,
}

#[derive(sqlx::FromRow)]
struct GameRow {
    id: Uuid,
    title: String,
    banner_url: String,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            banner_url: row.banner_url,
        }
    }
}

#[derive(sqlx::FromRow)]
struct GameSummaryRow {
    id: Uuid,
    title: String,
    banner_url: String,
    ad_count: i64,
}

#[derive(sqlx::FromRow)]
struct AdRow {
    id: Uuid,
    game_id: Uuid,
    name: String,
    years_playing: i32,
    discord: String,
    week_days: String,
    hour_start: i32,
    hour_end: i32,
    use_voice_channel: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdRow> for Ad {
    type Error = String;

    fn try_from(row: AdRow) -> Result<Self, Self::Error> {
        let minutes = |value: i32| {
            u32::try_from(value).map_err(|_| format!("ad {} has negative minute offset {value}", row.id))
        };

        Ok(Self {
            id: row.id,
            game_id: row.game_id,
            hour_start: minutes(row.hour_start)?,
            hour_end: minutes(row.hour_end)?,
            name: row.name,
            years_playing: row.years_playing,
            discord: row.discord,
            week_days: row.week_days,
            use_voice_channel: row.use_voice_channel,
            created_at: row.created_at,
        })
    }
}

fn offset_column(value: u32) -> Result<i32, String> {
    i32::try_from(value).map_err(|_| format!("minute offset {value} does not fit the column"))
}

#[async_trait]
impl GameStore for PostgresStore {
    async fn list_with_ad_counts(&self) -> Result<Vec<GameSummary>, String> {
        let rows = sqlx::query_as::<_, GameSummaryRow>(
            r#"
            SELECT g.id, g.title, g.banner_url, COUNT(a.id) AS ad_count
            FROM games g
            LEFT JOIN ads a ON a.game_id = g.id
            GROUP BY g.id, g.title, g.banner_url
            ORDER BY g.title
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        Ok(rows
            .into_iter()
            .map(|row| GameSummary {
                game: Game {
                    id: row.id,
                    title: row.title,
                    banner_url: row.banner_url,
                },
                ad_count: row.ad_count,
            })
            .collect())
    }

    async fn find(&self, game_id: Uuid) -> Result<Option<Game>, String> {
        let row = sqlx::query_as::<_, GameRow>(
            "SELECT id, title, banner_url FROM games WHERE id = $1",
        )
        .bind(game_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        Ok(row.map(Game::from))
    }
}

#[async_trait]
impl AdStore for PostgresStore {
    async fn insert(&self, ad: Ad) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO ads (
                id, game_id, name, years_playing, discord, week_days,
                hour_start, hour_end, use_voice_channel, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(ad.id)
        .bind(ad.game_id)
        .bind(&ad.name)
        .bind(ad.years_playing)
        .bind(&ad.discord)
        .bind(&ad.week_days)
        .bind(offset_column(ad.hour_start)?)
        .bind(offset_column(ad.hour_end)?)
        .bind(ad.use_voice_channel)
        .bind(ad.created_at)
        .execute(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        Ok(())
    }

    async fn list_by_game(&self, game_id: Uuid) -> Result<Vec<Ad>, String> {
        let rows = sqlx::query_as::<_, AdRow>(
            r#"
            SELECT id, game_id, name, years_playing, discord, week_days,
                   hour_start, hour_end, use_voice_channel, created_at
            FROM ads
            WHERE game_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(game_id)
        .fetch_all(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        rows.into_iter().map(Ad::try_from).collect()
    }

    async fn find_discord(&self, ad_id: Uuid) -> Result<Option<String>, String> {
        sqlx::query_scalar::<_, String>("SELECT discord FROM ads WHERE id = $1")
            .bind(ad_id)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| err.to_string())
    }
}

#[derive(Default)]
struct Tables {
    games: Vec<Game>,
    ads: Vec<Ad>,
}

// In-memory store adapter, used when no database is configured and in tests.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn with_games(games: Vec<Game>) -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables {
                games,
                ads: Vec::new(),
            })),
        }
    }
}

#[async_trait]
impl GameStore for InMemoryStore {
    async fn list_with_ad_counts(&self) -> Result<Vec<GameSummary>, String> {
        let tables = self.tables.lock().await;
        let mut summaries = tables
            .games
            .iter()
            .map(|game| -> Result<GameSummary, String> {
                let count = tables.ads.iter().filter(|ad| ad.game_id == game.id).count();
                Ok(GameSummary {
                    game: game.clone(),
                    ad_count: i64::try_from(count)
                        .map_err(|_| format!("ad count {count} overflows i64"))?,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;
        summaries.sort_by(|a, b| a.game.title.cmp(&b.game.title));
        Ok(summaries)
    }

    async fn find(&self, game_id: Uuid) -> Result<Option<Game>, String> {
        let tables = self.tables.lock().await;
        Ok(tables.games.iter().find(|game| game.id == game_id).cloned())
    }
}

#[async_trait]
impl AdStore for InMemoryStore {
    async fn insert(&self, ad: Ad) -> Result<(), String> {
        let mut tables = self.tables.lock().await;
        if !tables.games.iter().any(|game| game.id == ad.game_id) {
            return Err(format!("game {} does not exist", ad.game_id));
        }
        tables.ads.push(ad);
        Ok(())
    }

    async fn list_by_game(&self, game_id: Uuid) -> Result<Vec<Ad>, String> {
        let tables = self.tables.lock().await;
        // Walk newest insertions first so equal timestamps keep that order after the stable sort.
        let mut ads: Vec<Ad> = tables
            .ads
            .iter()
            .rev()
            .filter(|ad| ad.game_id == game_id)
            .cloned()
            .collect();
        ads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(ads)
    }

    async fn find_discord(&self, ad_id: Uuid) -> Result<Option<String>, String> {
        let tables = self.tables.lock().await;
        Ok(tables
            .ads
            .iter()
            .find(|ad| ad.id == ad_id)
            .map(|ad| ad.discord.clone()))
    }
}

// System clock adapter used by the ad use cases.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
