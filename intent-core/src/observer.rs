//! Diagnostics side channel
//!
//! Classification reports which rule fired and what it produced through a
//! [`RuleObserver`] handed in at construction. Observers never influence the
//! result.

use std::sync::{Arc, Mutex};

use crate::tag::Tag;

/// Which half of the classification an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Intent,
    Context,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Intent => "intent",
            Stage::Context => "context",
        }
    }
}

/// A diagnostic emitted during classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleEvent {
    /// The sentence was tokenized and tagged
    Tagged {
        tokens: Vec<String>,
        tags: Vec<Option<Tag>>,
    },
    /// A rule decided the value of a stage (`None` for the fallback)
    Matched {
        stage: Stage,
        rule: &'static str,
        value: Option<String>,
    },
    /// Free-form trace line from a lookup
    Trace(String),
}

/// Receives classification diagnostics
pub trait RuleObserver: Send + Sync {
    fn observe(&self, event: RuleEvent);

    /// Whether events are wanted at all; lets callers skip building them
    fn enabled(&self) -> bool {
        true
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RuleObserver for NoopObserver {
    fn observe(&self, _event: RuleEvent) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// Forwards events to the `log` facade at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl RuleObserver for LogObserver {
    fn observe(&self, event: RuleEvent) {
        match event {
            RuleEvent::Tagged { tokens, tags } => {
                let pairs: Vec<String> = tokens
                    .iter()
                    .zip(&tags)
                    .map(|(token, tag)| match tag {
                        Some(tag) => format!("{token}/{tag}"),
                        None => format!("{token}/?"),
                    })
                    .collect();
                log::debug!("tagged: {}", pairs.join(" "));
            }
            RuleEvent::Matched { stage, rule, value } => {
                log::debug!(
                    "{}: ({rule}) {}",
                    stage.as_str(),
                    value.as_deref().unwrap_or("<none>")
                );
            }
            RuleEvent::Trace(line) => log::trace!("{line}"),
        }
    }

    fn enabled(&self) -> bool {
        log::log_enabled!(log::Level::Debug)
    }
}

/// Keeps every event in memory, mostly for tests
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<RuleEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far
    pub fn events(&self) -> Vec<RuleEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Names of the rules that matched, in order
    pub fn matched_rules(&self) -> Vec<(Stage, &'static str)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RuleEvent::Matched { stage, rule, .. } => Some((stage, rule)),
                _ => None,
            })
            .collect()
    }
}

impl RuleObserver for RecordingObserver {
    fn observe(&self, event: RuleEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl<T: RuleObserver + ?Sized> RuleObserver for Arc<T> {
    fn observe(&self, event: RuleEvent) {
        (**self).observe(event)
    }

    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}

/// Observer selected by a plain debug flag
pub fn observer_for(debug: bool) -> Arc<dyn RuleObserver> {
    if debug {
        Arc::new(LogObserver)
    } else {
        Arc::new(NoopObserver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer_keeps_order() {
        let observer = RecordingObserver::new();
        observer.observe(RuleEvent::Matched {
            stage: Stage::Intent,
            rule: "first_word_is_a_verb",
            value: Some("turn".into()),
        });
        observer.observe(RuleEvent::Trace("scan".into()));
        observer.observe(RuleEvent::Matched {
            stage: Stage::Context,
            rule: "noun_after_intent",
            value: Some("music".into()),
        });

        assert_eq!(observer.events().len(), 3);
        assert_eq!(
            observer.matched_rules(),
            vec![
                (Stage::Intent, "first_word_is_a_verb"),
                (Stage::Context, "noun_after_intent")
            ]
        );
    }

    #[test]
    fn test_noop_observer_is_disabled() {
        assert!(!NoopObserver.enabled());
        assert!(!observer_for(false).enabled());
    }
}
