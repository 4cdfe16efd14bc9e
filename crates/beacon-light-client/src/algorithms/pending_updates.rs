//! # Pending Updates
//!
//! Bounded buffer of verified, uncommitted updates in arrival order.
//!
//! # Eviction
//!
//! When full, the entry with the fewest participants (earliest among
//! ties) is evicted if the incoming update has strictly more participants.
//! Otherwise the incoming update is not kept. Either way the best
//! candidate for a timeout commit is never lost, and among equally
//! supported updates the first-seen one survives.

use crate::domain::VerifiedUpdate;

/// Result of offering an update to the buffer.
#[derive(Debug)]
pub enum PushOutcome {
    /// Appended with room to spare.
    Appended,
    /// Appended after evicting a weaker entry.
    Replaced(VerifiedUpdate),
    /// Not kept; returned to the caller.
    Rejected(VerifiedUpdate),
}

/// Bounded, ordered set of pending updates.
#[derive(Debug)]
pub struct PendingUpdates {
    entries: Vec<VerifiedUpdate>,
    capacity: usize,
}

impl PendingUpdates {
    /// Empty buffer holding at most `capacity` updates (minimum one).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Buffered update count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum buffered updates.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Buffered updates in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &VerifiedUpdate> {
        self.entries.iter()
    }

    /// Most recently kept update.
    pub fn latest(&self) -> Option<&VerifiedUpdate> {
        self.entries.last()
    }

    /// Offer an update, applying the eviction policy when full.
    ///
    /// A kept update is always appended, so it is `latest()` afterwards.
    pub fn push(&mut self, update: VerifiedUpdate) -> PushOutcome {
        if self.entries.len() < self.capacity {
            self.entries.push(update);
            return PushOutcome::Appended;
        }

        let Some(weakest) = self.weakest_index() else {
            return PushOutcome::Rejected(update);
        };
        if update.participants() <= self.entries[weakest].participants() {
            return PushOutcome::Rejected(update);
        }

        let evicted = self.entries.remove(weakest);
        self.entries.push(update);
        PushOutcome::Replaced(evicted)
    }

    /// Drain the buffer, returning the update with the most participants.
    /// The first-seen update wins ties.
    pub fn take_best(&mut self) -> Option<VerifiedUpdate> {
        let mut best: Option<VerifiedUpdate> = None;
        for candidate in self.entries.drain(..) {
            match &best {
                Some(current) if candidate.participants() <= current.participants() => {}
                _ => best = Some(candidate),
            }
        }
        best
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn weakest_index(&self) -> Option<usize> {
        let mut weakest: Option<(usize, u64)> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            match weakest {
                Some((_, count)) if entry.participants() >= count => {}
                _ => weakest = Some((index, entry.participants())),
            }
        }
        weakest.map(|(index, _)| index)
    }
}
