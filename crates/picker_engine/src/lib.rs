//! Picker engine: character catalog search and background request execution.
mod engine;
mod search;
mod types;

pub use engine::EngineHandle;
pub use search::{ReqwestSearcher, SearchSettings, Searcher, DEFAULT_BASE_URL};
pub use types::{
    CharacterPage, CharacterRecord, DispatchId, EngineEvent, FailureKind, PageInfo, SearchError,
};
