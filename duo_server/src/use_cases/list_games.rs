use crate::domain::entities::GameSummary;
use crate::domain::errors::AdError;
use crate::domain::ports::GameStore;

// Game catalog use case with injected dependencies.
pub struct ListGamesUseCase<G> {
    pub games: G,
}

impl<G> ListGamesUseCase<G>
where
    G: GameStore,
{
    pub async fn execute(&self) -> Result<Vec<GameSummary>, AdError> {
        self.games
            .list_with_ad_counts()
            .await
            .map_err(AdError::StorageFailure)
    }
}
