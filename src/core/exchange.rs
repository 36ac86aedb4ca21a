//! The single outbound call: POST the user's text to the webhook and pull the
//! bot's reply out of the JSON body.
//!
//! Calls run on their own tokio task and report back through an unbounded
//! channel tagged with the exchange id, so the event loop never blocks on the
//! network.

use reqwest::header::CONTENT_TYPE;
use tokio::sync::mpsc;
use tracing::debug;

use crate::api::{WebhookReply, WebhookRequest};

#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// The request could not be sent or its body could not be read.
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The reply body is not JSON.
    #[error("webhook reply is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The reply is JSON but carries no string `response` field.
    #[error("webhook reply has no string `response` field")]
    MalformedResponse,
}

pub type ExchangeOutcome = Result<String, ExchangeError>;

/// Sends one message and waits for the reply. No status check, retry or
/// deadline is applied.
pub async fn post_message(
    client: &reqwest::Client,
    webhook_url: &str,
    message: &str,
) -> ExchangeOutcome {
    let response = client
        .post(webhook_url)
        .header(CONTENT_TYPE, "application/json")
        .json(&WebhookRequest { message })
        .send()
        .await?;

    debug!(status = %response.status(), "webhook responded");

    let body = response.bytes().await?;
    parse_reply(&body)
}

pub fn parse_reply(body: &[u8]) -> ExchangeOutcome {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(ExchangeError::InvalidJson)?;
    if !value.is_object() {
        return Err(ExchangeError::MalformedResponse);
    }
    let reply: WebhookReply =
        serde_json::from_value(value).map_err(|_| ExchangeError::MalformedResponse)?;
    Ok(reply.response)
}

pub struct ExchangeParams {
    pub client: reqwest::Client,
    pub webhook_url: String,
    pub message: String,
    pub exchange_id: u64,
}

#[derive(Clone)]
pub struct ExchangeService {
    tx: mpsc::UnboundedSender<(ExchangeOutcome, u64)>,
}

impl ExchangeService {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(ExchangeOutcome, u64)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn spawn_exchange(&self, params: ExchangeParams) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let ExchangeParams {
                client,
                webhook_url,
                message,
                exchange_id,
            } = params;

            debug!(exchange_id, url = %webhook_url, "posting message to webhook");
            let outcome = post_message(&client, &webhook_url, &message).await;
            // The receiver is gone only when the UI is shutting down.
            let _ = tx.send((outcome, exchange_id));
        });
    }
}
