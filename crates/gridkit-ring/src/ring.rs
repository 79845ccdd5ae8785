//! Fixed-capacity double-ended ring buffer.
//!
//! [`RingBuffer`] keeps two cursors into a circular slot array of size
//! `capacity`. `front` points at the first occupied slot, `back` one past
//! the last. The length is always derived from the cursors, never stored,
//! so the two cannot drift apart. Because `front == back` means empty, at
//! most `capacity - 1` elements are ever held.

use crate::error::RingBufferFull;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;

/// A fixed-capacity ring buffer with O(1) push and pop at both ends.
///
/// The slot array is allocated once in [`new`](Self::new) and never
/// grows. Peeking, popping, or indexing past the occupied window is a
/// caller error and panics.
///
/// # Pushing onto a full buffer
///
/// [`push_front`](Self::push_front) and [`push_back`](Self::push_back) do
/// not check for space. On a full buffer they write into the single free
/// slot and move their cursor onto the other one, so `front == back` and
/// the buffer reads as empty. Every element held before the push, and the
/// pushed value itself, is dropped at that point. Use [`try_push_front`](Self::try_push_front) /
/// [`try_push_back`](Self::try_push_back), or check
/// [`is_full`](Self::is_full), when that loss is not acceptable.
///
/// # Examples
///
/// ```
/// use gridkit_ring::RingBuffer;
///
/// let mut ring = RingBuffer::new(4);
/// ring.push_back(1);
/// ring.push_back(2);
/// ring.push_front(0);
/// assert_eq!(ring.len(), 3);
/// assert_eq!((ring[0], ring[1], ring[2]), (0, 1, 2));
/// assert!(ring.is_full());
/// assert!(ring.try_push_back(3).is_err());
/// ```
#[derive(Clone)]
pub struct RingBuffer<T> {
    /// Slots in the window `front..back` are `Some`; all others are `None`.
    slots: Box<[Option<T>]>,
    front: usize,
    back: usize,
}

// Compile-time assertion: RingBuffer is Send + Sync when its elements are.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<RingBuffer<u8>>();
};

impl<T> RingBuffer<T> {
    /// Create an empty ring buffer with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < 2`. One slot always stays free, so a smaller
    /// ring could never hold an element.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "RingBuffer capacity must be >= 2, got {capacity}");
        let slots = (0..capacity).map(|_| None).collect();
        Self {
            slots,
            front: 0,
            back: 0,
        }
    }

    /// Number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of elements: the forward distance from `front` to `back`.
    pub fn len(&self) -> usize {
        if self.back >= self.front {
            self.back - self.front
        } else {
            self.back + self.capacity() - self.front
        }
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }

    /// Whether the next unguarded push would overwrite the window.
    ///
    /// True when `len() == capacity() - 1`.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity() - 1
    }

    fn wrap_inc(&self, i: usize) -> usize {
        if i + 1 == self.capacity() {
            0
        } else {
            i + 1
        }
    }

    fn wrap_dec(&self, i: usize) -> usize {
        if i == 0 {
            self.capacity() - 1
        } else {
            i - 1
        }
    }

    fn slot_of(&self, i: usize) -> usize {
        (self.front + i) % self.capacity()
    }

    /// The `i`-th element counting from the front, or `None` if
    /// `i >= len()`.
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len() {
            return None;
        }
        self.slots[self.slot_of(i)].as_ref()
    }

    /// Mutable access to the `i`-th element counting from the front.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i >= self.len() {
            return None;
        }
        let slot = self.slot_of(i);
        self.slots[slot].as_mut()
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn front(&self) -> &T {
        match self.get(0) {
            Some(v) => v,
            None => panic!("front() called on an empty RingBuffer"),
        }
    }

    /// The first element, mutable.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn front_mut(&mut self) -> &mut T {
        match self.get_mut(0) {
            Some(v) => v,
            None => panic!("front_mut() called on an empty RingBuffer"),
        }
    }

    /// The last element.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn back(&self) -> &T {
        match self.len().checked_sub(1).and_then(|i| self.get(i)) {
            Some(v) => v,
            None => panic!("back() called on an empty RingBuffer"),
        }
    }

    /// The last element, mutable.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn back_mut(&mut self) -> &mut T {
        let last = self.len().checked_sub(1);
        match last.and_then(|i| self.get_mut(i)) {
            Some(v) => v,
            None => panic!("back_mut() called on an empty RingBuffer"),
        }
    }

    /// Step `front` back one slot (wrapping) and store `value` there.
    ///
    /// On a full buffer this empties the window; see the type docs.
    pub fn push_front(&mut self, value: T) {
        let overflow = self.is_full();
        self.front = self.wrap_dec(self.front);
        self.slots[self.front] = Some(value);
        if overflow {
            self.drop_all_slots();
        }
    }

    /// Store `value` at `back`, then step `back` forward one slot (wrapping).
    ///
    /// On a full buffer this empties the window; see the type docs.
    pub fn push_back(&mut self, value: T) {
        let overflow = self.is_full();
        self.slots[self.back] = Some(value);
        self.back = self.wrap_inc(self.back);
        if overflow {
            self.drop_all_slots();
        }
    }

    // Called once the window is empty, so no slot is occupied.
    fn drop_all_slots(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    /// Like [`push_front`](Self::push_front), but hands `value` back
    /// instead of overwriting when the buffer is full.
    pub fn try_push_front(&mut self, value: T) -> Result<(), RingBufferFull<T>> {
        if self.is_full() {
            return Err(RingBufferFull(value));
        }
        self.push_front(value);
        Ok(())
    }

    /// Like [`push_back`](Self::push_back), but hands `value` back
    /// instead of overwriting when the buffer is full.
    pub fn try_push_back(&mut self, value: T) -> Result<(), RingBufferFull<T>> {
        if self.is_full() {
            return Err(RingBufferFull(value));
        }
        self.push_back(value);
        Ok(())
    }

    /// Remove and return the first element.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn pop_front(&mut self) -> T {
        assert!(!self.is_empty(), "pop_front() called on an empty RingBuffer");
        let slot = self.front;
        self.front = self.wrap_inc(slot);
        match self.slots[slot].take() {
            Some(v) => v,
            None => unreachable!("occupied ring slot {slot} holds no value"),
        }
    }

    /// Remove and return the last element.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn pop_back(&mut self) -> T {
        assert!(!self.is_empty(), "pop_back() called on an empty RingBuffer");
        self.back = self.wrap_dec(self.back);
        let slot = self.back;
        match self.slots[slot].take() {
            Some(v) => v,
            None => unreachable!("occupied ring slot {slot} holds no value"),
        }
    }

    /// Drop every element and reset both cursors to slot 0.
    pub fn clear(&mut self) {
        self.drop_all_slots();
        self.front = 0;
        self.back = 0;
    }

    /// Elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            head: 0,
            tail: self.len(),
        }
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    /// The `i`-th element counting from the front.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Some(v) => v,
            None => panic!(
                "RingBuffer index {i} out of range for length {}",
                self.len()
            ),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Compares the logical contents, ignoring cursor positions and capacity.
impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Front-to-back iterator over a [`RingBuffer`].
pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    head: usize,
    tail: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        let item = self.ring.get(self.head);
        self.head += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.tail - self.head;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        self.ring.get(self.tail)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn contents<T: Clone>(ring: &RingBuffer<T>) -> Vec<T> {
        ring.iter().cloned().collect()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_is_empty() {
        let ring: RingBuffer<i32> = RingBuffer::new(4);
        assert_eq!(ring.len(), 0);
        assert!(ring.is_empty());
        assert!(!ring.is_full());
        assert_eq!(ring.capacity(), 4);
        assert_eq!(ring.get(0), None);
    }

    #[test]
    #[should_panic(expected = "capacity must be >= 2")]
    fn capacity_panics_below_2() {
        let _ring: RingBuffer<u8> = RingBuffer::new(1);
    }

    // ── Push / peek ─────────────────────────────────────────────

    #[test]
    fn mixed_pushes_keep_logical_order() {
        let mut ring = RingBuffer::new(4);
        ring.push_back(1);
        ring.push_back(2);
        ring.push_front(0);
        assert_eq!(ring.len(), 3);
        assert_eq!(ring[0], 0);
        assert_eq!(ring[1], 1);
        assert_eq!(ring[2], 2);
        assert_eq!(*ring.front(), 0);
        assert_eq!(*ring.back(), 2);
    }

    #[test]
    fn fill_to_capacity_minus_one() {
        let k = 6;
        let mut ring = RingBuffer::new(k);
        for v in 0..k - 1 {
            ring.push_back(v);
        }
        assert_eq!(ring.len(), k - 1);
        assert!(ring.is_full());
        assert_eq!(*ring.front(), 0);
        assert_eq!(*ring.back(), k - 2);
        for i in 0..k - 1 {
            assert_eq!(ring[i], i);
        }
    }

    #[test]
    fn push_front_wraps_below_zero() {
        let mut ring = RingBuffer::new(3);
        ring.push_front('a');
        assert_eq!(ring.len(), 1);
        assert_eq!(*ring.front(), 'a');
        assert_eq!(*ring.back(), 'a');
        ring.push_front('b');
        assert_eq!(contents(&ring), vec!['b', 'a']);
    }

    #[test]
    fn peek_mut_writes_through() {
        let mut ring = RingBuffer::new(4);
        ring.push_back(10);
        ring.push_back(20);
        *ring.front_mut() += 1;
        *ring.back_mut() += 2;
        *ring.get_mut(1).unwrap() += 3;
        assert_eq!(contents(&ring), vec![11, 25]);
        assert!(ring.get_mut(2).is_none());
    }

    // ── Pop ─────────────────────────────────────────────────────

    #[test]
    fn pop_both_ends() {
        let mut ring = RingBuffer::new(5);
        for v in [1, 2, 3, 4] {
            ring.push_back(v);
        }
        assert_eq!(ring.pop_front(), 1);
        assert_eq!(ring.pop_back(), 4);
        assert_eq!(contents(&ring), vec![2, 3]);
        assert_eq!(ring.pop_back(), 3);
        assert_eq!(ring.pop_front(), 2);
        assert!(ring.is_empty());
    }

    #[test]
    fn sliding_window_wraps_many_times() {
        let mut ring = RingBuffer::new(4);
        for t in 0..100u32 {
            if ring.is_full() {
                ring.pop_front();
            }
            ring.push_back(t);
            assert!(ring.len() <= 3);
            assert_eq!(*ring.back(), t);
        }
        assert_eq!(contents(&ring), vec![97, 98, 99]);
    }

    #[test]
    fn pop_returns_owned_values() {
        let mut ring = RingBuffer::new(3);
        ring.push_back(String::from("x"));
        let s: String = ring.pop_back();
        assert_eq!(s, "x");
    }

    #[test]
    #[should_panic(expected = "pop_front() called on an empty RingBuffer")]
    fn pop_front_empty_panics() {
        let mut ring: RingBuffer<i32> = RingBuffer::new(4);
        ring.pop_front();
    }

    #[test]
    #[should_panic(expected = "pop_back() called on an empty RingBuffer")]
    fn pop_back_empty_panics() {
        let mut ring: RingBuffer<i32> = RingBuffer::new(4);
        ring.pop_back();
    }

    #[test]
    #[should_panic(expected = "front() called on an empty RingBuffer")]
    fn front_empty_panics() {
        let ring: RingBuffer<i32> = RingBuffer::new(4);
        ring.front();
    }

    #[test]
    #[should_panic(expected = "back() called on an empty RingBuffer")]
    fn back_empty_panics() {
        let ring: RingBuffer<i32> = RingBuffer::new(4);
        ring.back();
    }

    #[test]
    #[should_panic(expected = "index 2 out of range for length 2")]
    fn index_past_len_panics() {
        let mut ring = RingBuffer::new(4);
        ring.push_back(1);
        ring.push_back(2);
        let _v = ring[2];
    }

    // ── Full-buffer behavior ────────────────────────────────────

    #[test]
    fn unguarded_push_back_on_full_empties_window() {
        let mut ring = RingBuffer::new(3);
        ring.push_back(1);
        ring.push_back(2);
        assert!(ring.is_full());
        ring.push_back(3);
        assert_eq!(ring.len(), 0);
        assert!(ring.is_empty());
        ring.push_back(4);
        assert_eq!(contents(&ring), vec![4]);
    }

    #[test]
    fn unguarded_push_front_on_full_empties_window() {
        let mut ring = RingBuffer::new(3);
        ring.push_front(1);
        ring.push_front(2);
        assert!(ring.is_full());
        ring.push_front(3);
        assert!(ring.is_empty());
    }

    #[test]
    fn unguarded_push_on_full_drops_lost_elements() {
        use std::rc::Rc;
        let tracked = Rc::new(());
        let mut ring = RingBuffer::new(3);
        ring.push_back(Rc::clone(&tracked));
        ring.push_back(Rc::clone(&tracked));
        assert_eq!(Rc::strong_count(&tracked), 3);
        ring.push_back(Rc::clone(&tracked));
        assert!(ring.is_empty());
        assert_eq!(Rc::strong_count(&tracked), 1);

        ring.push_front(Rc::clone(&tracked));
        ring.push_front(Rc::clone(&tracked));
        assert!(ring.is_full());
        ring.push_front(Rc::clone(&tracked));
        assert!(ring.is_empty());
        assert_eq!(Rc::strong_count(&tracked), 1);
    }

    #[test]
    fn push_below_full_keeps_every_element_alive() {
        use std::rc::Rc;
        let tracked = Rc::new(());
        let mut ring = RingBuffer::new(4);
        ring.push_back(Rc::clone(&tracked));
        ring.push_front(Rc::clone(&tracked));
        ring.push_back(Rc::clone(&tracked));
        assert!(ring.is_full());
        assert_eq!(Rc::strong_count(&tracked), 4);
        drop(ring.pop_front());
        assert_eq!(Rc::strong_count(&tracked), 3);
        ring.clear();
        assert_eq!(Rc::strong_count(&tracked), 1);
    }

    #[test]
    fn guarded_push_rejects_when_full() {
        let mut ring = RingBuffer::new(3);
        assert!(ring.try_push_back(1).is_ok());
        assert!(ring.try_push_front(0).is_ok());
        let err = ring.try_push_back(2).unwrap_err();
        assert_eq!(err.into_inner(), 2);
        assert_eq!(ring.try_push_front(9), Err(RingBufferFull(9)));
        assert_eq!(contents(&ring), vec![0, 1]);
    }

    #[test]
    fn full_error_displays() {
        assert_eq!(RingBufferFull(5u8).to_string(), "ring buffer full");
    }

    #[test]
    fn full_error_is_an_error_without_debug_payload() {
        struct Opaque;
        fn boxed<E: std::error::Error + 'static>(e: E) -> Box<dyn std::error::Error> {
            Box::new(e)
        }
        let err = boxed(RingBufferFull(Opaque));
        assert_eq!(err.to_string(), "ring buffer full");
        assert_eq!(format!("{:?}", RingBufferFull(Opaque)), "RingBufferFull(..)");
    }

    // ── Copy / compare / iterate ────────────────────────────────

    #[test]
    fn clone_is_independent() {
        let mut a = RingBuffer::new(4);
        a.push_back(1);
        a.push_back(2);
        let mut b = a.clone();
        b.push_back(3);
        *a.front_mut() = 10;
        assert_eq!(contents(&a), vec![10, 2]);
        assert_eq!(contents(&b), vec![1, 2, 3]);
    }

    #[test]
    fn equality_ignores_cursor_positions() {
        let mut a = RingBuffer::new(4);
        a.push_back(1);
        a.push_back(2);
        let mut b = RingBuffer::new(4);
        b.push_back(2);
        b.push_front(1);
        assert_eq!(a, b);
        b.pop_back();
        assert_ne!(a, b);
    }

    #[test]
    fn iter_is_double_ended_and_exact() {
        let mut ring = RingBuffer::new(5);
        ring.push_back(2);
        ring.push_back(3);
        ring.push_front(1);
        let it = ring.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(ring.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        let mut it = ring.iter();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn debug_lists_logical_contents() {
        let mut ring = RingBuffer::new(4);
        ring.push_back(2);
        ring.push_front(1);
        assert_eq!(format!("{ring:?}"), "[1, 2]");
    }

    #[test]
    fn clear_resets() {
        let mut ring = RingBuffer::new(3);
        ring.push_back(1);
        ring.push_front(0);
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.capacity(), 3);
        ring.push_back(7);
        assert_eq!(contents(&ring), vec![7]);
    }

    // ── Property tests ──────────────────────────────────────────

    #[derive(Clone, Debug)]
    enum Op {
        PushFront(i32),
        PushBack(i32),
        PopFront,
        PopBack,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::PushFront),
            any::<i32>().prop_map(Op::PushBack),
            Just(Op::PopFront),
            Just(Op::PopBack),
        ]
    }

    proptest! {
        #[test]
        fn matches_vecdeque_model(
            capacity in 2usize..8,
            ops in proptest::collection::vec(arb_op(), 0..64),
        ) {
            use std::collections::VecDeque;
            let mut ring = RingBuffer::new(capacity);
            let mut model = VecDeque::new();
            for op in ops {
                match op {
                    Op::PushFront(v) if !ring.is_full() => {
                        ring.push_front(v);
                        model.push_front(v);
                    }
                    Op::PushBack(v) if !ring.is_full() => {
                        ring.push_back(v);
                        model.push_back(v);
                    }
                    Op::PopFront if !ring.is_empty() => {
                        prop_assert_eq!(Some(ring.pop_front()), model.pop_front());
                    }
                    Op::PopBack if !ring.is_empty() => {
                        prop_assert_eq!(Some(ring.pop_back()), model.pop_back());
                    }
                    _ => {}
                }
                prop_assert_eq!(ring.len(), model.len());
                prop_assert!(ring.len() < ring.capacity());
                prop_assert!(ring.iter().eq(model.iter()));
            }
        }

        #[test]
        fn push_front_pop_front_round_trip(
            capacity in 3usize..10,
            seed in proptest::collection::vec(any::<i32>(), 0..8),
            extra in any::<i32>(),
        ) {
            let mut ring = RingBuffer::new(capacity);
            for v in seed.into_iter().take(capacity - 2) {
                ring.push_back(v);
            }
            let before = ring.clone();
            ring.push_front(extra);
            prop_assert_eq!(ring.pop_front(), extra);
            prop_assert_eq!(&ring, &before);
        }
    }
}
