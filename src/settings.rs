use std::fs::File;
use std::num::NonZeroU64;
use std::path::Path;
use std::time::Duration;

use color_eyre::Result;
use eyre::{eyre, WrapErr};
use reqwest::header::HeaderValue;
use serde_derive::Deserialize;
use serenity::model::id::{ApplicationId, GuildId};
use tracing::debug;

use crate::api::endpoint::{Endpoint, DEFAULT_API_BASE};

/// Stand-in values written into freshly generated config files.
const PLACEHOLDERS: [&str; 4] = [
    "<insert app ID here>",
    "<insert token here>",
    "<empty>",
    "empty",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub app_id: Option<String>,
    pub guild_id: Option<String>,
    pub bot_token: Option<Credential>,
    pub api_base: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_id: None,
            guild_id: None,
            bot_token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Bot token. Only ever leaves this type as the `Authorization` header value.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Surrounding whitespace (a pasted trailing newline) is not part of the token.
    pub fn authorization(&self) -> String {
        format!("Bot {}", self.0.trim())
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl Settings {
    /// Read `path` if it exists, then let the environment override it.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = if path.exists() {
            let json_file = File::open(path)
                .wrap_err_with(|| format!("Failed to open {}", path.display()))?;
            serde_json::from_reader(json_file)
                .wrap_err_with(|| format!("Failed to parse {}", path.display()))?
        } else {
            debug!("No settings file at {}, using environment only", path.display());
            Self::default()
        };

        Ok(settings.with_env(|key| std::env::var(key).ok()))
    }

    #[must_use]
    pub fn with_env(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(app_id) = var("APP_ID") {
            self.app_id = Some(app_id);
        }
        if let Some(guild_id) = var("GUILD_ID") {
            self.guild_id = Some(guild_id);
        }
        if let Some(token) = var("BOT_TOKEN") {
            self.bot_token = Some(Credential::new(token));
        }
        if let Some(api_base) = var("API_BASE") {
            self.api_base = api_base;
        }
        self
    }

    pub fn application_id(&self) -> Result<ApplicationId> {
        let id = snowflake("appId", self.app_id.as_deref())?;
        Ok(ApplicationId::new(id.get()))
    }

    pub fn guild(&self) -> Result<GuildId> {
        let id = snowflake("guildId", self.guild_id.as_deref())?;
        Ok(GuildId::new(id.get()))
    }

    pub fn credential(&self) -> Result<&Credential> {
        let token = self
            .bot_token
            .as_ref()
            .filter(|token| is_configured(&token.0))
            .ok_or_else(|| eyre!("botToken is not configured (set BOT_TOKEN or botToken)"))?;
        HeaderValue::from_str(&token.authorization())
            .map_err(|_| eyre!("botToken contains characters not allowed in a header"))?;
        Ok(token)
    }

    pub fn endpoint(&self) -> Result<Endpoint> {
        Ok(Endpoint::new(
            &self.api_base,
            self.application_id()?,
            self.guild()?,
        ))
    }

    pub fn request_timeout(&self) -> Result<Duration> {
        if self.request_timeout_secs == 0 {
            return Err(eyre!("requestTimeoutSecs must be at least 1"));
        }
        Ok(Duration::from_secs(self.request_timeout_secs))
    }
}

fn is_configured(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !PLACEHOLDERS.contains(&value)
}

fn snowflake(key: &str, value: Option<&str>) -> Result<NonZeroU64> {
    let value = value
        .filter(|v| is_configured(v))
        .ok_or_else(|| eyre!("{key} is not configured"))?;
    let id = value
        .trim()
        .parse::<u64>()
        .wrap_err_with(|| format!("{key} must be a numeric id, got {value:?}"))?;

    NonZeroU64::new(id).ok_or_else(|| eyre!("{key} must not be zero"))
}
