use std::fmt;

use serde::Deserialize;

pub type DispatchId = u64;

/// One character as published by the catalog. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterRecord {
    pub id: u64,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
}

/// First page of a character search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: Option<PageInfo>,
    pub results: Vec<CharacterRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
    pub count: u64,
    pub pages: u64,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Error body the catalog sends alongside non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        dispatch: DispatchId,
        result: Result<Vec<CharacterRecord>, SearchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SearchError {
    pub kind: FailureKind,
    pub message: String,
}

impl SearchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
    EngineUnavailable,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed payload"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::EngineUnavailable => write!(f, "engine unavailable"),
        }
    }
}
