use std::collections::VecDeque;

use pinchvol_messages::VolumeLevel;

/// Fixed-capacity trend buffer of recent volume levels.
///
/// Oldest entries are evicted first once the buffer is full.
#[derive(Debug, Clone)]
pub struct VolumeHistory {
    levels: VecDeque<VolumeLevel>,
    capacity: usize,
}

impl VolumeHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            levels: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, level: VolumeLevel) {
        if self.capacity == 0 {
            return;
        }
        if self.levels.len() == self.capacity {
            self.levels.pop_front();
        }
        self.levels.push_back(level);
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<VolumeLevel> {
        self.levels.back().copied()
    }

    /// Owned copy, oldest first, for handing to another thread.
    pub fn snapshot(&self) -> Vec<VolumeLevel> {
        self.levels.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(percent: i64) -> VolumeLevel {
        VolumeLevel::saturating(percent)
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut history = VolumeHistory::new(50);
        for i in 0..200 {
            history.push(level(i % 101));
            assert!(history.len() <= 50);
        }
        assert_eq!(history.len(), 50);
    }

    #[test]
    fn keeps_last_entries_in_arrival_order() {
        let capacity = 5;
        let mut history = VolumeHistory::new(capacity);
        for i in 0..(capacity as i64 + 3) {
            history.push(level(i * 10));
        }
        let expected: Vec<_> = [30, 40, 50, 60, 70].into_iter().map(level).collect();
        assert_eq!(history.snapshot(), expected);
        assert_eq!(history.latest(), Some(level(70)));
    }

    #[test]
    fn empty_history() {
        let history = VolumeHistory::new(3);
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
        assert_eq!(history.capacity(), 3);
    }
}
