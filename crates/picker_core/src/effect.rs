use std::time::Duration;

use crate::{DispatchId, SelectedCharacter, TimerToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartTimer { token: TimerToken, delay: Duration },
    CancelTimer { token: TimerToken },
    Search {
        dispatch: DispatchId,
        name: Option<String>,
    },
    Notify { title: String, message: String },
    Finish { outcome: FinishOutcome },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishOutcome {
    Confirmed(Vec<SelectedCharacter>),
    Cancelled,
}
