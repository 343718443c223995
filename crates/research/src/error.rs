use research_core::research::ResearchError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Research(#[from] ResearchError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Model API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Missing configuration: {0} is not set")]
    MissingConfig(&'static str),
}

impl Error {
    /// Whether the failure was caused by the caller's input rather than the upstream API.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Research(ResearchError::UnsupportedOperation(_)))
    }
}

impl From<reqwest::Error> for Error {
    // Strip the URL so the API key appended to it never reaches logs or clients.
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.without_url().to_string())
    }
}
