use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoapboxError {
    #[error("company name starting with '#' not found in feedback text")]
    MissingCompanyTag,

    #[error("request failed with status code {0}")]
    Status(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SoapboxError>;

impl SoapboxError {
    /// Message recorded into the store's error flag when a sync operation
    /// fails. Status failures embed the status code; transport failures carry
    /// the underlying message, with a generic fallback when there is none.
    pub fn sync_message(&self) -> String {
        match self {
            SoapboxError::Status(code) => {
                format!("An error occurred while syncing feedback items. Code: {code}")
            }
            other => {
                let message = other.to_string();
                if message.is_empty() {
                    "Something went wrong.".to_string()
                } else {
                    message
                }
            }
        }
    }
}
