use crate::domain::errors::AdError;
use crate::domain::ports::AdStore;
use crate::use_cases::parse_id;

// Response returned by the discord reveal use case.
pub struct RevealDiscordResponse {
    pub discord: String,
}

// Discord reveal use case with injected dependencies.
pub struct RevealDiscordUseCase<A> {
    pub ads: A,
}

impl<A> RevealDiscordUseCase<A>
where
    A: AdStore,
{
    pub async fn execute(&self, ad_id: &str) -> Result<RevealDiscordResponse, AdError> {
        let ad_id = parse_id(ad_id).ok_or(AdError::AdNotFound)?;

        let discord = self
            .ads
            .find_discord(ad_id)
            .await
            .map_err(AdError::StorageFailure)?
            .ok_or(AdError::AdNotFound)?;

        Ok(RevealDiscordResponse { discord })
    }
}
