use uuid::Uuid;

pub mod create_ad;
pub mod list_ads;
pub mod list_games;
pub mod reveal_discord;

#[cfg(test)]
pub(crate) mod test_support;

// Identifiers arrive as raw path segments; a malformed one can never match a record.
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
