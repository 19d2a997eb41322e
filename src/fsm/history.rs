//! In-memory record of completed transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::vec_deque::{self, VecDeque};
use std::time::Duration;

/// Record of a single completed transition.
///
/// # Example
///
/// ```rust
/// use tether::fsm::TransitionRecord;
///
/// let record = TransitionRecord::new("Red", "Green", true);
/// assert_eq!(record.from, "Red");
/// assert_eq!(record.to, "Green");
/// assert!(record.action_ran);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Name of the state being left
    pub from: String,
    /// Name of the state being entered
    pub to: String,
    /// Whether a registered transition action ran
    pub action_ran: bool,
    /// When the current-state pointer moved
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// Create a record stamped with the current time.
    pub fn new(from: impl Into<String>, to: impl Into<String>, action_ran: bool) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            action_ran,
            timestamp: Utc::now(),
        }
    }
}

/// Number of records a machine keeps unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Ordered history of transitions, bounded unless created with
/// [`unbounded`](Self::unbounded).
///
/// Once the capacity is reached, the oldest records are dropped first. The
/// history lives only as long as its machine; it is serializable so callers
/// can export it, but nothing in this crate writes it anywhere.
///
/// # Example
///
/// ```rust
/// use tether::fsm::{TransitionHistory, TransitionRecord};
///
/// let mut history = TransitionHistory::new();
/// history.record(TransitionRecord::new("Start", "Middle", false));
/// history.record(TransitionRecord::new("Middle", "End", true));
///
/// assert_eq!(history.path(), vec!["Start", "Middle", "End"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionHistory {
    records: VecDeque<TransitionRecord>,
    capacity: Option<usize>,
}

impl TransitionHistory {
    /// Create a history holding [`DEFAULT_HISTORY_CAPACITY`] records.
    pub fn new() -> Self {
        Self::bounded(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history that keeps at most `capacity` records.
    ///
    /// Storage grows with use; `capacity` is only the eviction threshold.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    /// Create a history that never evicts. Memory grows with every
    /// recorded transition.
    pub fn unbounded() -> Self {
        Self {
            records: VecDeque::new(),
            capacity: None,
        }
    }

    /// Append a record, evicting the oldest one if the history is full.
    pub fn record(&mut self, record: TransitionRecord) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while self.records.len() >= capacity {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    /// Records in order, oldest first.
    pub fn records(&self) -> vec_deque::Iter<'_, TransitionRecord> {
        self.records.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    /// Names of the states traversed: the `from` of the oldest retained
    /// record, then the `to` of each record.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from.as_str());
        }
        path.extend(self.records.iter().map(|r| r.to.as_str()));
        path
    }

    /// Time between the oldest and newest retained records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Eviction threshold, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for TransitionHistory {
    fn default() -> Self {
        Self::new()
    }
}
