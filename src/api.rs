use serde::{Deserialize, Serialize};

/// Body POSTed to the webhook for every submitted message.
#[derive(Debug, Serialize)]
pub struct WebhookRequest<'a> {
    pub message: &'a str,
}

/// Successful webhook reply. Only `response` is consumed; other fields are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct WebhookReply {
    pub response: String,
}
