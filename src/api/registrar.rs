use std::time::Duration;

use async_trait::async_trait;
use color_eyre::Result;
use eyre::WrapErr;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use tracing::{debug, info, instrument, warn};

use crate::api::endpoint::Endpoint;
use crate::api::schema::command::CommandDefinition;
use crate::api::schema::response::{RegisteredCommand, Submission, SubmissionError};
use crate::settings::Credential;

/// Raw status and body of one reply, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

/// Sends one JSON POST. Any `Err` means no status line was received.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(
        &self,
        endpoint: &Endpoint,
        authorization: &str,
        body: &CommandDefinition,
    ) -> Result<Reply>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                "DiscordBot (command_registrar, ",
                env!("CARGO_PKG_VERSION"),
                ")"
            ))
            .build()
            .wrap_err("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        endpoint: &Endpoint,
        authorization: &str,
        body: &CommandDefinition,
    ) -> Result<Reply> {
        let mut auth = HeaderValue::from_str(authorization)
            .wrap_err("Credential cannot be sent as a header value")?;
        auth.set_sensitive(true);

        let res = self
            .client
            .post(endpoint.as_str())
            .header(AUTHORIZATION, auth)
            .json(body)
            .send()
            .await
            .wrap_err("Failed to reach the registration endpoint")?;

        let status = res.status().as_u16();
        let body = res.text().await.wrap_err("Failed to read reply body")?;
        Ok(Reply { status, body })
    }
}

/// Posts every definition of a batch to one guild-scoped endpoint.
pub struct CommandRegistrar<T> {
    endpoint: Endpoint,
    authorization: String,
    transport: T,
}

impl<T: Transport> CommandRegistrar<T> {
    pub fn new(endpoint: Endpoint, credential: &Credential, transport: T) -> Self {
        Self {
            endpoint,
            authorization: credential.authorization(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Submit each definition once, in order. A failed submission never stops
    /// the rest of the batch; the result has one entry per definition.
    #[instrument(skip_all, fields(endpoint = %self.endpoint, count = definitions.len()))]
    pub async fn register(&self, definitions: &[CommandDefinition]) -> Vec<Submission> {
        if definitions.is_empty() {
            warn!("No commands to register");
        }

        let mut submissions = Vec::with_capacity(definitions.len());
        for definition in definitions {
            submissions.push(self.submit(definition).await);
        }
        submissions
    }

    async fn submit(&self, definition: &CommandDefinition) -> Submission {
        debug!("Posting command: {}", definition.name);
        let result = match self
            .transport
            .post(&self.endpoint, &self.authorization, definition)
            .await
        {
            Ok(reply) => interpret(reply),
            Err(why) => Err(SubmissionError::Transport(format!("{why:#}"))),
        };

        match &result {
            Ok(registered) => info!("Registered command: {:?} ({})", registered.name, registered.id),
            Err(why) => warn!("Cannot register command {:?}: {}", definition.name, why),
        }

        Submission {
            name: definition.name.clone(),
            result,
        }
    }
}

fn interpret(reply: Reply) -> Result<RegisteredCommand, SubmissionError> {
    if !(200..300).contains(&reply.status) {
        return Err(SubmissionError::Rejected {
            status: reply.status,
            body: reply.body,
        });
    }

    serde_json::from_str(&reply.body).map_err(|why| SubmissionError::Decode {
        status: reply.status,
        reason: why.to_string(),
    })
}
