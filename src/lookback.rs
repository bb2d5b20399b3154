//! Bounded lookback buffer.
//!
//! A fixed-capacity circular buffer that, once full, hands back the item
//! inserted exactly `capacity` insertions ago. This is what lets the tail and
//! skip-bottom strategies talk about "the Nth line before the current one"
//! without knowing how long the input is.
//!
//! Memory: O(capacity). Every operation except [`LookbackBuffer::drain`] is O(1).

use crate::line::{LineError, Result};

/// Slots allocated up front; larger buffers grow as lines arrive so a huge
/// `--tail` on a short input stays cheap.
const INITIAL_SLOTS: usize = 4096;

/// Circular buffer returning the item from `capacity` insertions ago.
///
/// A capacity of zero is valid and behaves as a pass-through: every inserted
/// item comes straight back out.
#[derive(Debug, Clone)]
pub struct LookbackBuffer<T> {
    /// Slots; grows by push until `capacity` items are held, then rotates.
    items: Vec<T>,
    capacity: usize,
    /// Next slot to overwrite.
    cursor: usize,
    /// True once every slot has been filled at least once.
    wrapped: bool,
}

impl<T> LookbackBuffer<T> {
    /// Create a buffer holding the previous `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.min(INITIAL_SLOTS)),
            capacity,
            cursor: 0,
            wrapped: false,
        }
    }

    /// Create a buffer from a signed capacity, rejecting negative values.
    ///
    /// ```
    /// use lines::LookbackBuffer;
    ///
    /// assert!(LookbackBuffer::<String>::try_new(3).is_ok());
    /// assert!(LookbackBuffer::<String>::try_new(-1).is_err());
    /// ```
    pub fn try_new(capacity: i64) -> Result<Self> {
        let capacity =
            usize::try_from(capacity).map_err(|_| LineError::InvalidCapacity(capacity))?;
        Ok(Self::new(capacity))
    }

    /// Store `item` and return the item inserted `capacity` insertions ago.
    ///
    /// Returns `None` while fewer than `capacity` items have been inserted
    /// before this call. With a capacity of zero the new item is returned
    /// immediately.
    #[inline]
    pub fn insert_and_evict(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }

        let evicted = if self.wrapped {
            Some(std::mem::replace(&mut self.items[self.cursor], item))
        } else {
            self.items.push(item);
            None
        };

        self.cursor += 1;
        if self.cursor == self.capacity {
            self.cursor = 0;
            self.wrapped = true;
        }

        evicted
    }

    /// Consume the buffer and return the held items, oldest first.
    pub fn drain(mut self) -> std::vec::IntoIter<T> {
        if self.wrapped {
            // f g c d e with the cursor on c reads back as c d e f g
            self.items.rotate_left(self.cursor);
        }
        self.items.into_iter()
    }

    /// Configured number of items held back.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently held.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// True once the next insertion will evict a previously seen item.
    #[cfg(test)]
    pub(crate) fn is_full(&self) -> bool {
        self.wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_passes_through() {
        let mut buf = LookbackBuffer::new(0);
        assert_eq!(buf.insert_and_evict("a"), Some("a"));
        assert_eq!(buf.insert_and_evict(""), Some(""));
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.drain().count(), 0);
    }

    #[test]
    fn test_evicts_after_capacity_insertions() {
        let mut buf = LookbackBuffer::new(3);
        assert_eq!(buf.insert_and_evict(1), None);
        assert_eq!(buf.insert_and_evict(2), None);
        assert_eq!(buf.insert_and_evict(3), None);
        assert!(buf.is_full());

        // 4th insertion hands back the 1st item
        assert_eq!(buf.insert_and_evict(4), Some(1));
        assert_eq!(buf.insert_and_evict(5), Some(2));
        assert_eq!(buf.insert_and_evict(6), Some(3));
        assert_eq!(buf.insert_and_evict(7), Some(4));
    }

    #[test]
    fn test_capacity_one() {
        let mut buf = LookbackBuffer::new(1);
        assert_eq!(buf.insert_and_evict('a'), None);
        assert_eq!(buf.insert_and_evict('b'), Some('a'));
        assert_eq!(buf.insert_and_evict('c'), Some('b'));
        assert_eq!(buf.drain().collect::<Vec<_>>(), vec!['c']);
    }

    #[test]
    fn test_empty_strings_are_real_items() {
        let mut buf = LookbackBuffer::new(2);
        assert_eq!(buf.insert_and_evict(String::new()), None);
        assert_eq!(buf.insert_and_evict("x".to_string()), None);
        assert_eq!(buf.insert_and_evict("y".to_string()), Some(String::new()));
    }

    #[test]
    fn test_drain_before_wrap() {
        let mut buf = LookbackBuffer::new(5);
        for c in ["a", "b", "c"] {
            buf.insert_and_evict(c);
        }
        assert!(!buf.is_full());
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.drain().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_drain_after_wrap() {
        let mut buf = LookbackBuffer::new(3);
        for c in ["a", "b", "c", "d", "e", "f", "g"] {
            buf.insert_and_evict(c);
        }
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.drain().collect::<Vec<_>>(), vec!["e", "f", "g"]);
    }

    #[test]
    fn test_drain_exactly_full() {
        let mut buf = LookbackBuffer::new(2);
        buf.insert_and_evict(10);
        buf.insert_and_evict(20);
        assert_eq!(buf.drain().collect::<Vec<_>>(), vec![10, 20]);
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let err = LookbackBuffer::<u8>::try_new(-4).unwrap_err();
        assert!(matches!(err, LineError::InvalidCapacity(-4)));
        assert_eq!(LookbackBuffer::<u8>::try_new(0).unwrap().capacity(), 0);
    }
}
