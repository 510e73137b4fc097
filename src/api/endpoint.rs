use std::fmt::Display;

use serenity::model::id::{ApplicationId, GuildId};

pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v8";

/// Guild-scoped command registration URL for one application.
///
/// Built once per run and shared by every request of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
}

impl Endpoint {
    /// `api_base` is everything up to and including the version segment,
    /// e.g. `https://discord.com/api/v8`. A trailing slash is tolerated.
    pub fn new(api_base: &str, application_id: ApplicationId, guild_id: GuildId) -> Self {
        let base = api_base.trim_end_matches('/');
        Self {
            url: format!("{base}/applications/{application_id}/guilds/{guild_id}/commands"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_template_with_both_ids() {
        let endpoint = Endpoint::new(
            DEFAULT_API_BASE,
            ApplicationId::new(900_000_000_000_000_001),
            GuildId::new(800_000_000_000_000_001),
        );

        assert_eq!(
            endpoint.as_str(),
            "https://discord.com/api/v8/applications/900000000000000001/guilds/800000000000000001/commands"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let endpoint = Endpoint::new("https://host/api/v8/", ApplicationId::new(1), GuildId::new(2));

        assert_eq!(endpoint.to_string(), "https://host/api/v8/applications/1/guilds/2/commands");
    }
}
