//! Particle value type and its bounded trail history

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::vec2::Vector2;

/// RGB color triple
pub type Rgb = [u8; 3];

/// Pre-update state of a particle, recorded once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub position: Vector2,
    pub velocity: Vector2,
}

/// Bounded sequence of snapshots, oldest first
///
/// Used for trail rendering and the force overlay only; physics never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct History {
    capacity: usize,
    entries: VecDeque<Snapshot>,
}

/// Serialized form of [`History`]; may hold more entries than its capacity
#[derive(Deserialize)]
struct StoredHistory {
    capacity: usize,
    entries: Vec<Snapshot>,
}

impl From<StoredHistory> for History {
    fn from(stored: StoredHistory) -> Self {
        let skip = stored.entries.len().saturating_sub(stored.capacity);
        Self {
            capacity: stored.capacity,
            entries: stored.entries.into_iter().skip(skip).collect(),
        }
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::new(),
        }
    }

    /// Return a copy with `snapshot` appended, dropping the oldest entries
    /// beyond capacity
    pub fn pushed(&self, snapshot: Snapshot) -> Self {
        let mut next = self.clone();
        if next.capacity == 0 {
            return next;
        }
        while next.entries.len() >= next.capacity {
            next.entries.pop_front();
        }
        next.entries.push_back(snapshot);
        next
    }

    /// Same entries under a different capacity (keeps the newest)
    pub fn resized(&self, capacity: usize) -> Self {
        let skip = self.entries.len().saturating_sub(capacity);
        Self {
            capacity,
            entries: self.entries.iter().skip(skip).copied().collect(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent snapshot
    pub fn last(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Snapshot> {
        self.entries.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(crate::consts::DEFAULT_HISTORY_LENGTH)
    }
}

/// A point mass
///
/// Mass must be strictly positive; acceleration divides by it and a zero or
/// negative mass is a caller error, not a handled condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub mass: f64,
    pub color: Rgb,
    #[serde(default)]
    pub history: History,
}

impl Particle {
    pub fn new(position: Vector2, velocity: Vector2, mass: f64, color: Rgb) -> Self {
        debug_assert!(mass > 0.0, "particle mass must be > 0, got {mass}");
        Self {
            position,
            velocity,
            mass,
            color,
            history: History::default(),
        }
    }

    /// Replace the history with an empty one of the given capacity
    pub fn with_history_length(mut self, capacity: usize) -> Self {
        self.history = History::new(capacity);
        self
    }

    /// Current state as a history entry
    #[inline]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.position,
            velocity: self.velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn snap(i: usize) -> Snapshot {
        Snapshot {
            position: DVec2::new(i as f64, 0.0),
            velocity: DVec2::ZERO,
        }
    }

    #[test]
    fn test_history_drops_oldest() {
        let mut h = History::new(3);
        for i in 0..5 {
            h = h.pushed(snap(i));
        }
        assert_eq!(h.len(), 3);
        let xs: Vec<f64> = h.iter().map(|s| s.position.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
        assert_eq!(h.last().map(|s| s.position.x), Some(4.0));
    }

    #[test]
    fn test_history_push_leaves_original_untouched() {
        let h = History::new(2);
        let h2 = h.pushed(snap(1));
        assert!(h.is_empty());
        assert_eq!(h2.len(), 1);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let h = History::new(0).pushed(snap(1));
        assert!(h.is_empty());
    }

    #[test]
    fn test_huge_capacity_does_not_allocate_up_front() {
        let h = History::new(usize::MAX).pushed(snap(1));
        assert_eq!(h.len(), 1);
        assert_eq!(h.capacity(), usize::MAX);
    }

    #[test]
    fn test_deserialize_clamps_to_capacity() {
        let json = r#"{
            "capacity": 2,
            "entries": [
                { "position": [0.0, 0.0], "velocity": [0.0, 0.0] },
                { "position": [1.0, 0.0], "velocity": [0.0, 0.0] },
                { "position": [2.0, 0.0], "velocity": [0.0, 0.0] }
            ]
        }"#;
        let h: History = serde_json::from_str(json).unwrap();
        assert_eq!(h.len(), 2);
        let xs: Vec<f64> = h.iter().map(|s| s.position.x).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
    }

    #[test]
    fn test_resized_keeps_newest() {
        let mut h = History::new(5);
        for i in 0..5 {
            h = h.pushed(snap(i));
        }
        let shrunk = h.resized(2);
        let xs: Vec<f64> = shrunk.iter().map(|s| s.position.x).collect();
        assert_eq!(xs, vec![3.0, 4.0]);
    }
}
