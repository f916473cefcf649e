use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid form action: {0}")]
    InvalidAction(#[from] url::ParseError),

    #[error("form action `{0}` is relative and no page url is configured")]
    RelativeAction(String),

    #[error("refusing cross-origin submission to {action} from {origin}")]
    CrossOrigin { action: String, origin: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
