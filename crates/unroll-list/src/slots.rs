//! Fixed-capacity inline element storage.
//!
//! [`Slots`] is the only place in the crate that touches uninitialised
//! memory. The invariant is simple: slots `0..len` are initialised, slots
//! `len..N` are not.

#![allow(unsafe_code)]

use std::iter::FusedIterator;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ptr;

/// Inline array of up to `N` elements with a populated prefix of `len`.
pub(crate) struct Slots<T, const N: usize> {
    len: usize,
    buf: [MaybeUninit<T>; N],
}

impl<T, const N: usize> Slots<T, N> {
    pub(crate) const fn new() -> Self {
        Self {
            len: 0,
            buf: [const { MaybeUninit::uninit() }; N],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len == N
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialised.
        unsafe { std::slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are initialised and uniquely borrowed.
        unsafe { std::slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Append `value`, handing it back if every slot is taken.
    pub(crate) fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.buf[self.len].write(value);
        self.len += 1;
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was initialised and is no longer part of the
        // populated prefix, so it is read exactly once.
        Some(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// When the storage is already full the element pushed past the end is
    /// returned (which is `value` itself when `index == N`).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub(crate) fn insert(&mut self, index: usize, value: T) -> Option<T> {
        assert!(
            index <= self.len,
            "insert index {index} beyond populated length {}",
            self.len
        );
        if index == N {
            return Some(value);
        }
        let overflow = if self.is_full() { self.pop() } else { None };
        // SAFETY: `index <= len < N`, so shifting `index..len` one slot to
        // the right stays inside the buffer; slot `index` is then
        // overwritten without dropping the moved-from value.
        unsafe {
            let at = self.buf.as_mut_ptr().cast::<T>().add(index);
            ptr::copy(at, at.add(1), self.len - index);
            ptr::write(at, value);
        }
        self.len += 1;
        overflow
    }

    /// Remove the element at `index`, shifting later elements left.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: `index < len`; the value is read out once and the tail
        // `index + 1..len` is moved over it before `len` shrinks.
        unsafe {
            let at = self.buf.as_mut_ptr().cast::<T>().add(index);
            let value = ptr::read(at);
            ptr::copy(at.add(1), at, self.len - index - 1);
            self.len -= 1;
            Some(value)
        }
    }

    pub(crate) fn clear(&mut self) {
        let len = self.len;
        // Shrink first so a panicking destructor leaks instead of double-dropping.
        self.len = 0;
        // SAFETY: the first `len` slots were initialised and are now outside
        // the populated prefix.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().cast::<T>(),
                len,
            ));
        }
    }
}

impl<T, const N: usize> Drop for Slots<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, const N: usize> Clone for Slots<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for (slot, value) in out.buf.iter_mut().zip(self.as_slice()) {
            slot.write(value.clone());
            out.len += 1;
        }
        out
    }
}

impl<T, const N: usize> IntoIterator for Slots<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> IntoIter<T, N> {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so ownership of the initialised
        // prefix moves into the iterator exactly once.
        let buf = unsafe { ptr::read(&this.buf) };
        IntoIter {
            buf,
            start: 0,
            end: this.len,
        }
    }
}

/// Owning iterator over the populated slots of a [`Slots`].
pub(crate) struct IntoIter<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    start: usize,
    end: usize,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: slots `start..end` are initialised; `start` advances past
        // the slot so it is read exactly once.
        let value = unsafe { self.buf[self.start].assume_init_read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: slot `end` is initialised and now outside `start..end`.
        Some(unsafe { self.buf[self.end].assume_init_read() })
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (start, end) = (self.start, self.end);
        self.start = end;
        // SAFETY: slots `start..end` are the initialised ones not yet yielded.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().cast::<T>().add(start),
                end - start,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counted(Rc<Cell<usize>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn filled<const N: usize>(values: &[i32]) -> Slots<i32, N> {
        let mut slots = Slots::new();
        for &v in values {
            slots.push(v).unwrap();
        }
        slots
    }

    #[test]
    fn push_until_full_then_reject() {
        let mut slots: Slots<i32, 2> = Slots::new();
        assert!(slots.push(1).is_ok());
        assert!(slots.push(2).is_ok());
        assert!(slots.is_full());
        assert_eq!(slots.push(3), Err(3));
        assert_eq!(slots.as_slice(), &[1, 2]);
    }

    #[test]
    fn pop_returns_last() {
        let mut slots = filled::<4>(&[1, 2, 3]);
        assert_eq!(slots.pop(), Some(3));
        assert_eq!(slots.pop(), Some(2));
        assert_eq!(slots.pop(), Some(1));
        assert_eq!(slots.pop(), None);
        assert!(slots.is_empty());
    }

    #[test]
    fn insert_shifts_right() {
        let mut slots = filled::<4>(&[1, 3]);
        assert_eq!(slots.insert(1, 2), None);
        assert_eq!(slots.insert(0, 0), None);
        assert_eq!(slots.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn insert_into_full_ejects_last() {
        let mut slots = filled::<3>(&[1, 2, 3]);
        assert_eq!(slots.insert(0, 0), Some(3));
        assert_eq!(slots.as_slice(), &[0, 1, 2]);
        assert_eq!(slots.insert(3, 9), Some(9));
        assert_eq!(slots.as_slice(), &[0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "beyond populated length")]
    fn insert_past_len_panics() {
        let mut slots = filled::<4>(&[1]);
        slots.insert(2, 5);
    }

    #[test]
    fn remove_shifts_left() {
        let mut slots = filled::<4>(&[1, 2, 3, 4]);
        assert_eq!(slots.remove(1), Some(2));
        assert_eq!(slots.as_slice(), &[1, 3, 4]);
        assert_eq!(slots.remove(2), Some(4));
        assert_eq!(slots.remove(2), None);
        assert_eq!(slots.as_slice(), &[1, 3]);
    }

    #[test]
    fn clone_is_independent() {
        let original = filled::<4>(&[1, 2]);
        let mut copy = original.clone();
        copy.as_mut_slice()[0] = 10;
        copy.push(3).unwrap();
        assert_eq!(original.as_slice(), &[1, 2]);
        assert_eq!(copy.as_slice(), &[10, 2, 3]);
    }

    #[test]
    fn into_iter_yields_in_order_from_both_ends() {
        let mut iter = filled::<4>(&[1, 2, 3, 4]).into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn drop_releases_every_populated_slot() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut slots: Slots<Counted, 4> = Slots::new();
            for _ in 0..3 {
                assert!(slots.push(Counted(Rc::clone(&drops))).is_ok());
            }
            drop(slots.remove(0));
            assert_eq!(drops.get(), 1);
        }
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn partially_consumed_into_iter_drops_the_rest() {
        let drops = Rc::new(Cell::new(0));
        let mut slots: Slots<Counted, 4> = Slots::new();
        for _ in 0..4 {
            assert!(slots.push(Counted(Rc::clone(&drops))).is_ok());
        }
        let mut iter = slots.into_iter();
        drop(iter.next());
        assert_eq!(drops.get(), 1);
        drop(iter);
        assert_eq!(drops.get(), 4);
    }
}
