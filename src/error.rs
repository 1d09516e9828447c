use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("missing required notification field: {0}")]
    MissingField(&'static str),

    #[error("Request to Rocket.Chat returned an error {status}, the response is:\n{body}")]
    Webhook {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to encode payload: {0}")]
    Json(#[from] serde_json::Error),
}
