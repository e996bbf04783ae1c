use std::time::{Duration, Instant};

use engine_logging::{engine_info, engine_trace, engine_warn};
use picker_core::{Character, Effect, FinishOutcome, Msg};
use picker_engine::{CharacterRecord, EngineEvent, EngineHandle, SearchError};

/// Executes effects returned by `update` and turns engine/timer activity
/// back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    timers: super::timers::TimerQueue,
    finish: Option<FinishOutcome>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            timers: super::timers::TimerQueue::new(),
            finish: None,
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::StartTimer { token, delay } => {
                    engine_trace!("timer {} armed for {:?}", token, delay);
                    self.timers.schedule(token, now, delay);
                }
                Effect::CancelTimer { token } => {
                    self.timers.cancel(token);
                }
                Effect::Search { dispatch, name } => {
                    engine_info!("Search dispatch={} name={:?}", dispatch, name);
                    self.engine.search(dispatch, name);
                }
                Effect::Notify { title, message } => {
                    engine_warn!("{}: {}", title, message);
                }
                Effect::Finish { outcome } => {
                    self.finish = Some(outcome);
                }
            }
        }
    }

    /// Messages for timers due at `now` and for finished searches.
    pub fn poll(&mut self, now: Instant) -> Vec<Msg> {
        let mut inbox: Vec<Msg> = self
            .timers
            .drain_due(now)
            .into_iter()
            .map(Msg::DebounceElapsed)
            .collect();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }

    pub fn next_timeout(&self, now: Instant) -> Option<Duration> {
        self.timers.next_timeout(now)
    }

    pub fn take_finish(&mut self) -> Option<FinishOutcome> {
        self.finish.take()
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { dispatch, result } => match result {
            Ok(records) => Msg::SearchSucceeded {
                dispatch,
                characters: map_characters(records),
            },
            Err(SearchError { message, .. }) => Msg::SearchFailed { dispatch, message },
        },
    }
}

pub fn map_characters(records: Vec<CharacterRecord>) -> Vec<Character> {
    records
        .into_iter()
        .map(|record| Character {
            id: record.id,
            name: record.name,
            image: record.image,
            episode: record.episode,
        })
        .collect()
}
