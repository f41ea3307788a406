//! Bounded activity log for UI replay.
//!
//! Newest-first ring buffer: push to the front, evict from the back past
//! the cap. Entries carry localization keys and params, never resolved
//! strings, and nothing in the engine ever reads the log back.

use crate::core::constants::ACTIVITY_LOG_CAP;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How the UI should color/classify an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogSeverity {
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub tick: u64,
    pub severity: LogSeverity,
    /// Localization key, e.g. `log.deal_completed`.
    pub key: String,
    /// Positional params for the localized template.
    pub params: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
}

impl ActivityLog {
    pub fn push(&mut self, tick: u64, severity: LogSeverity, key: &str, params: Vec<String>) {
        if self.entries.len() >= ACTIVITY_LOG_CAP {
            self.entries.pop_back();
        }
        self.entries.push_front(LogEntry {
            tick,
            severity,
            key: key.to_string(),
            params,
        });
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn restore(entries: Vec<LogEntry>) -> Self {
        let mut entries: VecDeque<LogEntry> = entries.into();
        entries.truncate(ACTIVITY_LOG_CAP);
        ActivityLog { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = ActivityLog::default();
        log.push(1, LogSeverity::Info, "log.first", vec![]);
        log.push(2, LogSeverity::Success, "log.second", vec![]);
        let keys: Vec<&str> = log.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["log.second", "log.first"]);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = ActivityLog::default();
        for i in 0..(ACTIVITY_LOG_CAP + 5) {
            log.push(i as u64, LogSeverity::Info, &format!("log.{i}"), vec![]);
        }
        assert_eq!(log.len(), ACTIVITY_LOG_CAP);
        // The oldest five entries were evicted.
        assert!(log.iter().all(|e| e.key != "log.0" && e.key != "log.4"));
        assert_eq!(log.iter().next().unwrap().tick, (ACTIVITY_LOG_CAP + 4) as u64);
    }

    #[test]
    fn test_params_preserved() {
        let mut log = ActivityLog::default();
        log.push(
            9,
            LogSeverity::Danger,
            "log.caught",
            vec!["3".to_string(), "1500".to_string()],
        );
        let entry = log.iter().next().unwrap();
        assert_eq!(entry.params, vec!["3", "1500"]);
        assert_eq!(entry.severity, LogSeverity::Danger);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut log = ActivityLog::default();
        log.push(5, LogSeverity::Warning, "log.scammed", vec!["fence".into()]);
        let json = serde_json::to_string(&log).unwrap();
        let back: ActivityLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.iter().next().unwrap().key, "log.scammed");
    }
}
