//! Ring buffer for trace records.

use std::collections::VecDeque;

use super::record::{TraceEvent, TraceRecord};

/// A bounded buffer keeping the most recent trace records.
///
/// The oldest records are dropped once `max_size` is reached. Record IDs
/// keep increasing across drops and clears.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    records: VecDeque<TraceRecord>,
    max_size: usize,
    next_id: u64,
}

impl TraceBuffer {
    /// Creates a buffer holding at most `max_size` records.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
        }
    }

    /// The ID the next pushed record will get.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Appends an event and returns its record ID.
    pub fn push(&mut self, firing: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push_back(TraceRecord { id, firing, event });
        while self.records.len() > self.max_size {
            self.records.pop_front();
        }
        id
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Records, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// The most recent `count` records, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TraceRecord> {
        let start = self.records.len().saturating_sub(count);
        self.records.iter().skip(start).collect()
    }

    /// Records belonging to one firing.
    #[must_use]
    pub fn records_for_firing(&self, firing: u64) -> Vec<&TraceRecord> {
        self.records.iter().filter(|r| r.firing == firing).collect()
    }

    /// Records of one event type.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.records
            .iter()
            .filter(|r| r.event_type() == event_type)
            .collect()
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(10_000)
    }
}
