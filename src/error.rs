use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The search term was blank, nothing was sent
    #[error("Please enter a search term")]
    EmptyQuery,

    /// The endpoint answered with a non-2xx status
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// The body was neither JSON nor newline-delimited JSON
    #[error("Malformed response line {line:?}: {source}")]
    MalformedResponse {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    /// Transport level failure (DNS, connection refused, TLS, timeout...)
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    // A newer search replaced this one before it finished.
    #[error("Search was superseded by a newer search")]
    Cancelled,

    #[error("Invalid page request: page {page} with page size {page_size}")]
    InvalidPage { page: usize, page_size: usize },
}
