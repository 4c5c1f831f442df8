use thiserror::Error;

/// Failures raised while decoding a single page of fragments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed forecast fragment: {fragment:?}")]
    MalformedForecast { fragment: String },

    #[error("Malformed wind fragment: {fragment:?}")]
    MalformedWind { fragment: String },
}

impl ParseError {
    pub fn malformed_forecast(fragment: impl Into<String>) -> Self {
        Self::MalformedForecast {
            fragment: fragment.into(),
        }
    }

    pub fn malformed_wind(fragment: impl Into<String>) -> Self {
        Self::MalformedWind {
            fragment: fragment.into(),
        }
    }

    /// The offending fragment text
    pub fn fragment(&self) -> &str {
        match self {
            Self::MalformedForecast { fragment } | Self::MalformedWind { fragment } => fragment,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch page: {0}")]
    PageFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("Page not found (404): {url}")]
    PageNotFound { url: String },

    #[error("Server error ({status}): {message} (URL: {url})")]
    ServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Client error ({status}): {message} (URL: {url})")]
    ClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Response is not HTML (content type: {content_type}) (URL: {url})")]
    NotHtml { content_type: String, url: String },

    // Network-specific errors
    #[error("Network timeout while fetching page: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Failed to parse page for {year} week {week}: {source}")]
    PageParse {
        year: i32,
        week: u32,
        #[source]
        source: ParseError,
    },

    #[error("Empty {name} range: {start}..{end}")]
    EmptyRange {
        name: &'static str,
        start: i64,
        end: i64,
    },

    #[error("Roster contains no team names: {path}")]
    EmptyRoster { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a page not found error
    pub fn page_not_found(url: impl Into<String>) -> Self {
        Self::PageNotFound { url: url.into() }
    }

    /// Create a server error (5xx status codes)
    pub fn server_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a client error (4xx status codes except 404)
    pub fn client_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an error for a response whose content type is not HTML
    pub fn not_html(content_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self::NotHtml {
            content_type: content_type.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Wrap a page parse failure with the page it came from
    pub fn page_parse(year: i32, week: u32, source: ParseError) -> Self {
        Self::PageParse { year, week, source }
    }

    /// Create an empty range error for the sweep parameters
    pub fn empty_range(name: &'static str, start: impl Into<i64>, end: impl Into<i64>) -> Self {
        Self::EmptyRange {
            name,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Create an empty roster error
    pub fn empty_roster(path: impl Into<String>) -> Self {
        Self::EmptyRoster { path: path.into() }
    }

    /// Whether the error came from fetching a page rather than from local processing.
    /// The sweep logs these and moves on to the next page.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AppError::PageFetch(_)
                | AppError::PageNotFound { .. }
                | AppError::ServerError { .. }
                | AppError::ClientError { .. }
                | AppError::NotHtml { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
        )
    }
}
