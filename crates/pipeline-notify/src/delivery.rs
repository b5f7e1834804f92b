//! One-shot webhook delivery.

use std::io::Read;

use http::{Request, StatusCode};
use thiserror::Error;
use ureq::Agent;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("failed to build webhook request: {0}")]
    Request(#[from] http::Error),
    #[error("error sending to Teams: {0}")]
    Transport(#[from] ureq::Error),
    #[error("error response from Teams: {0}")]
    Rejected(String),
}

/// POST the serialized card to the webhook endpoint, once.
///
/// Success is HTTP 200 exactly. Any other status is a rejection whose
/// readable response body becomes the diagnostic text; no retries.
pub fn deliver(webhook_url: &str, card_bytes: &[u8]) -> Result<(), DeliveryError> {
    // Rejection statuses must come back as responses so the body can be
    // surfaced, not as transport errors.
    let agent: Agent = Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .into();

    let request = Request::builder()
        .method("POST")
        .uri(webhook_url)
        .header("Content-Type", "application/json")
        .body(card_bytes.to_vec())?;

    let response = agent.run(request)?;
    if response.status() != StatusCode::OK {
        let mut body = Vec::new();
        let _ = response.into_body().into_reader().read_to_end(&mut body);
        return Err(DeliveryError::Rejected(
            String::from_utf8_lossy(&body).into_owned(),
        ));
    }
    Ok(())
}
