//! Identifier generation

use std::sync::atomic::{AtomicU64, Ordering};

/// Marks a generator that has handed out `u64::MAX`; valid ids start at 1
const EXHAUSTED: u64 = 0;

/// Hands out strictly increasing entry identifiers, starting at 1
///
/// Once `u64::MAX` has been handed out the generator is exhausted and
/// `next()` returns `None` from then on.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Generator whose first id is `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first.max(1)),
        }
    }

    /// Generator continuing after the largest of `ids`
    ///
    /// Exhausted from the start when the largest id is `u64::MAX`.
    pub fn seeded_from<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let max = ids.into_iter().max().unwrap_or(0);
        match max.checked_add(1) {
            Some(first) => Self::starting_at(first),
            None => Self {
                next: AtomicU64::new(EXHAUSTED),
            },
        }
    }

    /// Take the next id, or `None` when the id space is used up
    pub fn next(&self) -> Option<u64> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                if current == EXHAUSTED {
                    None
                } else {
                    Some(current.checked_add(1).unwrap_or(EXHAUSTED))
                }
            })
            .ok()
    }

    /// Next id that `next()` would return
    pub fn peek(&self) -> Option<u64> {
        match self.next.load(Ordering::SeqCst) {
            EXHAUSTED => None,
            id => Some(id),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_starts_at_one() {
        let ids = IdGenerator::default();
        assert_eq!(ids.next(), Some(1));
        assert_eq!(ids.next(), Some(2));
        assert_eq!(ids.peek(), Some(3));
    }

    #[test]
    fn test_seeded_from_existing() {
        let ids = IdGenerator::seeded_from([4, 9, 2]);
        assert_eq!(ids.next(), Some(10));

        let empty = IdGenerator::seeded_from(std::iter::empty());
        assert_eq!(empty.next(), Some(1));
    }

    #[test]
    fn test_seeded_from_max_id_is_exhausted() {
        let ids = IdGenerator::seeded_from([3, u64::MAX]);
        assert_eq!(ids.peek(), None);
        assert_eq!(ids.next(), None);
        assert_eq!(ids.next(), None);
    }

    #[test]
    fn test_last_id_exhausts_generator() {
        let ids = IdGenerator::starting_at(u64::MAX - 1);
        assert_eq!(ids.next(), Some(u64::MAX - 1));
        assert_eq!(ids.next(), Some(u64::MAX));
        assert_eq!(ids.next(), None);
        assert_eq!(ids.peek(), None);
    }

    #[test]
    fn test_concurrent_ids_are_unique() {
        let ids = IdGenerator::default();

        let collected: Vec<u64> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| (0..100).filter_map(|_| ids.next()).collect::<Vec<_>>())
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<u64> = collected.iter().copied().collect();
        assert_eq!(unique.len(), 800);
        assert_eq!(ids.peek(), Some(801));
    }
}
