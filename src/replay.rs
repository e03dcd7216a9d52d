//! Deterministic playback of timed UI events against a virtual clock.

use crate::debounce::{Clock, ManualClock};
use crate::error::BrowserError;
use crate::events::{Dispatcher, Outcome};
use crate::storage::KeyValueStore;
use log::debug;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// One scripted event, `at` milliseconds after the start
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScriptEvent {
    Input { at: u64, input: String },
    Click { at: u64, click: String },
    Tick { at: u64, tick: bool },
}

impl ScriptEvent {
    pub fn at(&self) -> Duration {
        let ms = match self {
            ScriptEvent::Input { at, .. } => *at,
            ScriptEvent::Click { at, .. } => *at,
            ScriptEvent::Tick { at, .. } => *at,
        };
        Duration::from_millis(ms)
    }
}

/// What happened, and when
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayEntry {
    pub at: Duration,
    pub outcome: Outcome,
}

pub fn parse_script(json: &str) -> Result<Vec<ScriptEvent>, BrowserError> {
    let events: Vec<ScriptEvent> = serde_json::from_str(json)
        .map_err(|e| BrowserError::InvalidScript(e.to_string()))?;

    if let Some(pair) = events.windows(2).find(|pair| pair[1].at() < pair[0].at()) {
        return Err(BrowserError::InvalidScript(format!(
            "events out of order: {}ms after {}ms",
            pair[1].at().as_millis(),
            pair[0].at().as_millis()
        )));
    }

    Ok(events)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, BrowserError> {
    let json = std::fs::read_to_string(path)?;
    parse_script(&json)
}

/// Play `events` in order. A pending search commit fires before any event at
/// or after its deadline, and once more after the last event.
pub fn replay<S: KeyValueStore>(
    dispatcher: &mut Dispatcher<S, ManualClock>,
    events: &[ScriptEvent],
) -> Result<Vec<ReplayEntry>, BrowserError> {
    let clock = dispatcher.clock().clone();
    let mut entries = Vec::new();

    for event in events {
        fire_due(dispatcher, &clock, event.at(), &mut entries);
        clock.set(event.at());

        let outcome = match event {
            ScriptEvent::Input { input, .. } => dispatcher.input(input.as_str()),
            ScriptEvent::Click { click, .. } => dispatcher.click(click)?,
            ScriptEvent::Tick { .. } => dispatcher.tick(),
        };
        debug!("{:?} -> {:?}", event, outcome);
        record(&mut entries, clock.now(), outcome);
    }

    if let Some(deadline) = dispatcher.next_deadline() {
        fire_due(dispatcher, &clock, deadline, &mut entries);
    }

    Ok(entries)
}

fn fire_due<S: KeyValueStore>(
    dispatcher: &mut Dispatcher<S, ManualClock>,
    clock: &ManualClock,
    until: Duration,
    entries: &mut Vec<ReplayEntry>,
) {
    if let Some(deadline) = dispatcher.next_deadline().filter(|deadline| *deadline <= until) {
        clock.set(deadline);
        let outcome = dispatcher.tick();
        record(entries, deadline, outcome);
    }
}

fn record(entries: &mut Vec<ReplayEntry>, at: Duration, outcome: Outcome) {
    if outcome != Outcome::Ignored {
        entries.push(ReplayEntry { at, outcome });
    }
}
