//! Deterministic port implementations shared by the unit tests.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::PreviewDraft;
use crate::ports::{
    Clipboard, Clock, Haptic, HapticFeedback, PortError, PortResult, PreviewGenerator, RandomSource,
    ShareDispatcher,
};
use crate::synthesizer::SynthesizingGenerator;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// Replays a fixed list of picks, cycling when exhausted.
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: Mutex<usize>,
}

impl ScriptedRandom {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        let script: Vec<usize> = script.into_iter().collect();
        assert!(!script.is_empty());
        Self {
            script,
            cursor: Mutex::new(0),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&self, len: usize) -> usize {
        let mut cursor = self.cursor.lock().unwrap();
        let value = self.script[*cursor % self.script.len()];
        *cursor += 1;
        value % len
    }
}

/// A clock that stands still unless advanced.
pub struct FixedClock(Mutex<DateTime<Utc>>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance_ms(&self, ms: i64) {
        let mut now = self.0.lock().unwrap();
        *now += chrono::Duration::milliseconds(ms);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

#[derive(Default)]
pub struct RecordingHaptics(Mutex<Vec<Haptic>>);

impl RecordingHaptics {
    pub fn events(&self) -> Vec<Haptic> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Haptic> {
        self.0.lock().unwrap().last().copied()
    }
}

impl HapticFeedback for RecordingHaptics {
    fn emit(&self, feedback: Haptic) {
        self.0.lock().unwrap().push(feedback);
    }
}

/// Pops queued outcomes; falls back to synthesizing once the queue is empty.
pub struct QueuedGenerator {
    outcomes: Mutex<VecDeque<PortResult<PreviewDraft>>>,
    fallback: SynthesizingGenerator,
}

impl QueuedGenerator {
    pub fn new(fallback: SynthesizingGenerator) -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            fallback,
        }
    }

    pub fn fail_next(&self, message: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(PortError::Unexpected(message.to_string())));
    }
}

#[async_trait]
impl PreviewGenerator for QueuedGenerator {
    async fn generate(&self, url: &str) -> PortResult<PreviewDraft> {
        let queued = self.outcomes.lock().unwrap().pop_front();
        match queued {
            Some(outcome) => outcome,
            None => self.fallback.generate(url).await,
        }
    }
}

#[derive(Default)]
pub struct StaticClipboard(pub String);

#[async_trait]
impl Clipboard for StaticClipboard {
    async fn read_text(&self) -> PortResult<String> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
pub struct RecordingShare(Mutex<Vec<String>>);

impl RecordingShare {
    pub fn shared(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShareDispatcher for RecordingShare {
    async fn share(&self, url: &str) -> PortResult<()> {
        self.0.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
