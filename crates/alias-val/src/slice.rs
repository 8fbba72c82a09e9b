//! Views over shared backing storage
//!
//! A [`Slice`] is a small header: a handle to a backing buffer plus an
//! offset, a length and a capacity. Cloning a slice copies the header only,
//! so every clone and every re-slice of it reads and writes the same
//! elements.
//!
//! ```text
//! backing  [John  Paul  George  Ringo]
//! a = [0:2) ^^^^^^^^^^
//! b = [1:3)       ^^^^^^^^^^^^
//! ```
//!
//! Writing `b[0]` changes `a[1]` and the backing itself. The only operation
//! that breaks sharing is [`Slice::append`] past the capacity: it allocates a
//! fresh buffer, copies the elements forward and returns a header over the
//! new buffer, leaving earlier views attached to the old one.

use crate::{print_seq, same_storage, shared, Array, Shared, ValError, ValResult};
use serde::ser::{Serialize, Serializer};
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Bound, RangeBounds};
use tracing::debug;

/// Capacity below which an append that reallocates doubles the buffer.
pub const GROWTH_THRESHOLD: usize = 256;

pub struct Slice<T> {
    /// `None` for the nil slice. Otherwise the buffer holds at least
    /// `offset + cap` elements.
    backing: Option<Shared<Vec<T>>>,
    offset: usize,
    len: usize,
    cap: usize,
}

/// Capacity of the buffer allocated when an append needs `needed` slots
/// and the current buffer has `old_cap`.
pub fn grow_cap(old_cap: usize, needed: usize) -> usize {
    let double = old_cap.saturating_mul(2);
    if needed > double {
        return needed;
    }
    if old_cap < GROWTH_THRESHOLD {
        return double;
    }
    let mut cap = old_cap;
    while cap < needed {
        cap += (cap + 3 * GROWTH_THRESHOLD) / 4;
    }
    cap
}

impl<T> Slice<T> {
    /// The nil slice: no backing, length 0, capacity 0.
    pub const fn nil() -> Self {
        Self {
            backing: None,
            offset: 0,
            len: 0,
            cap: 0,
        }
    }

    /// Slice literal over `values`; length and capacity both equal
    /// `values.len()`.
    pub fn from_vec(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            backing: Some(shared(values)),
            offset: 0,
            len,
            cap: len,
        }
    }

    /// Moves `array` into a new backing buffer and views all of it.
    pub fn from_array<const N: usize>(array: Array<T, N>) -> Self {
        Self::from_vec(Vec::from(array.into_inner()))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_nil(&self) -> bool {
        self.backing.is_none()
    }

    /// True when both views sit on the same backing buffer, whether or not
    /// their windows overlap.
    pub fn shares_backing(&self, other: &Self) -> bool {
        match (&self.backing, &other.backing) {
            (Some(a), Some(b)) => same_storage(a, b),
            _ => false,
        }
    }

    /// Runs `f` over the elements currently in view.
    pub fn view<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        match &self.backing {
            Some(backing) => {
                let buf = backing.borrow();
                f(&buf[self.offset..self.offset + self.len])
            }
            None => f(&[]),
        }
    }

    /// Runs `f` over the whole capacity window, including the slots past
    /// `len` that an in-place append fills.
    fn window_mut<R>(&self, f: impl FnOnce(&mut [T]) -> R) -> R {
        match &self.backing {
            Some(backing) => {
                let mut buf = backing.borrow_mut();
                f(&mut buf[self.offset..self.offset + self.cap])
            }
            None => f(&mut []),
        }
    }

    fn check_index(&self, index: usize) -> ValResult<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(ValError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    pub fn get(&self, index: usize) -> ValResult<T>
    where
        T: Clone,
    {
        self.check_index(index)?;
        Ok(self.view(|v| v[index].clone()))
    }

    /// Writes element `index`; every view over that slot sees the new value.
    pub fn set(&self, index: usize, value: T) -> ValResult<()> {
        self.check_index(index)?;
        self.window_mut(|w| w[index] = value);
        Ok(())
    }

    /// Read-modify-write of element `index`. No borrow of the backing is
    /// held while `f` runs, so `f` may read other views of the same buffer.
    pub fn update(&self, index: usize, f: impl FnOnce(&mut T)) -> ValResult<()>
    where
        T: Clone,
    {
        let mut value = self.get(index)?;
        f(&mut value);
        self.set(index, value)
    }

    /// Re-slices within the same backing buffer.
    ///
    /// An omitted start defaults to 0 and an omitted end to the current
    /// length. The end may reach past the length up to the capacity, which
    /// brings elements beyond the old length back into view.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> ValResult<Self> {
        let lo = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let hi = match range.end_bound() {
            Bound::Included(&n) => n.saturating_add(1),
            Bound::Excluded(&n) => n,
            Bound::Unbounded => self.len,
        };
        if lo > hi || hi > self.cap {
            return Err(ValError::SliceBounds {
                lo,
                hi,
                cap: self.cap,
            });
        }
        Ok(Self {
            backing: self.backing.clone(),
            offset: self.offset + lo,
            len: hi - lo,
            cap: self.cap - lo,
        })
    }

    /// Full slice expression `[lo:hi:max]`: like [`Slice::slice`] but the
    /// result's capacity stops at `max`, so a later append past `hi - lo`
    /// reallocates instead of overwriting `max..`.
    pub fn slice3(&self, lo: usize, hi: usize, max: usize) -> ValResult<Self> {
        if lo > hi || hi > max || max > self.cap {
            return Err(ValError::FullSliceBounds {
                lo,
                hi,
                max,
                cap: self.cap,
            });
        }
        Ok(Self {
            backing: self.backing.clone(),
            offset: self.offset + lo,
            len: hi - lo,
            cap: max - lo,
        })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slice: self,
            pos: 0,
        }
    }
}

impl<T: Clone> Slice<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.view(|v| v.to_vec())
    }

    /// Copies `min(self.len(), src.len())` elements from `src` and returns
    /// the count. Overlapping views are handled as if through a temporary.
    pub fn copy_from(&self, src: &Slice<T>) -> usize {
        let n = self.len.min(src.len);
        let values = src.view(|v| v[..n].to_vec());
        self.window_mut(|w| w[..n].clone_from_slice(&values));
        n
    }
}

impl<T: Clone + Default> Slice<T> {
    /// Zeroed slice of length and capacity `len`.
    pub fn make(len: usize) -> Self {
        let mut values = Vec::with_capacity(len);
        values.resize_with(len, T::default);
        Self::from_vec(values)
    }

    /// Zeroed backing of `cap` elements viewed through the first `len`.
    pub fn make_with_cap(len: usize, cap: usize) -> ValResult<Self> {
        if len > cap {
            return Err(ValError::SliceBounds { lo: 0, hi: len, cap });
        }
        let mut values = Vec::with_capacity(cap);
        values.resize_with(cap, T::default);
        Ok(Self {
            backing: Some(shared(values)),
            offset: 0,
            len,
            cap,
        })
    }

    /// Appends `items` and returns the resulting view.
    ///
    /// When the items fit in the spare capacity they are written into the
    /// existing buffer, where every other view over those slots sees them,
    /// and the result shares that buffer. Otherwise a new buffer sized by
    /// [`grow_cap`] is allocated and the result no longer aliases `self`.
    pub fn append(&self, items: impl IntoIterator<Item = T>) -> Self {
        let mut items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return self.clone();
        }
        let needed = self.len + items.len();
        if needed <= self.cap {
            let start = self.len;
            self.window_mut(|w| {
                for (slot, item) in w[start..needed].iter_mut().zip(items) {
                    *slot = item;
                }
            });
            return Self {
                backing: self.backing.clone(),
                offset: self.offset,
                len: needed,
                cap: self.cap,
            };
        }

        let cap = grow_cap(self.cap, needed);
        debug!(
            len = self.len,
            old_cap = self.cap,
            new_cap = cap,
            "append reallocates backing storage"
        );
        let mut values = Vec::with_capacity(cap);
        self.view(|v| values.extend_from_slice(v));
        values.append(&mut items);
        values.resize_with(cap, T::default);
        Self {
            backing: Some(shared(values)),
            offset: 0,
            len: needed,
            cap,
        }
    }

    /// Appends every element of `other`, which may alias `self`.
    pub fn append_slice(&self, other: &Slice<T>) -> Self {
        self.append(other.to_vec())
    }
}

/// Iterates over copies of the elements, the way a range loop does.
/// Assigning to a yielded item never changes the slice.
pub struct Iter<'a, T> {
    slice: &'a Slice<T>,
    pos: usize,
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.slice.get(self.pos).ok()?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.slice.len.saturating_sub(self.pos);
        (rest, Some(rest))
    }
}

impl<T> Clone for Slice<T> {
    fn clone(&self) -> Self {
        Self {
            backing: self.backing.clone(),
            offset: self.offset,
            len: self.len,
            cap: self.cap,
        }
    }
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> From<Vec<T>> for Slice<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Slice<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_vec(Vec::from(values))
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Display> Display for Slice<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.view(|v| print_seq(f, v))
    }
}

impl<T: Debug> Debug for Slice<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.view(|v| {
            f.debug_struct("Slice")
                .field("len", &self.len)
                .field("cap", &self.cap)
                .field("values", &v)
                .finish()
        })
    }
}

impl<T: Serialize> Serialize for Slice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view(|v| serializer.collect_seq(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValStr;

    fn names() -> Slice<ValStr> {
        Slice::from_array(Array::new([
            ValStr::from("John"),
            ValStr::from("Paul"),
            ValStr::from("George"),
            ValStr::from("Ringo"),
        ]))
    }

    #[test]
    fn test_overlapping_views_share_writes() {
        let names = names();
        let a = names.slice(0..2).unwrap();
        let b = names.slice(1..3).unwrap();
        assert_eq!(format!("{} {}", a, b), "[John Paul] [Paul George]");

        b.set(0, "XXX".into()).unwrap();
        assert_eq!(format!("{} {}", a, b), "[John XXX] [XXX George]");
        assert_eq!(names.to_string(), "[John XXX George Ringo]");
        assert!(a.shares_backing(&b));
    }

    #[test]
    fn test_omitted_bounds() {
        let s = Slice::from(vec![2, 3, 5, 7, 11, 13]);
        let s = s.slice(1..4).unwrap();
        assert_eq!(s.to_string(), "[3 5 7]");
        let s = s.slice(..2).unwrap();
        assert_eq!(s.to_string(), "[3 5]");
        let s = s.slice(1..).unwrap();
        assert_eq!(s.to_string(), "[5]");
        let s = s.slice(..).unwrap();
        assert_eq!(s.to_string(), "[5]");
        assert_eq!((s.len(), s.cap()), (1, 4));
    }

    #[test]
    fn test_reslice_up_to_capacity() {
        let b: Slice<i32> = Slice::make_with_cap(0, 5).unwrap();
        assert_eq!((b.len(), b.cap()), (0, 5));
        let c = b.slice(..2).unwrap();
        assert_eq!((c.len(), c.cap(), c.to_string()), (2, 5, "[0 0]".to_string()));
        let d = c.slice(2..5).unwrap();
        assert_eq!((d.len(), d.cap(), d.to_string()), (3, 3, "[0 0 0]".to_string()));
    }

    #[test]
    fn test_bounds_faults() {
        let s = Slice::from(vec![1, 2, 3]);
        assert_eq!(
            s.slice(..4).unwrap_err(),
            ValError::SliceBounds { lo: 0, hi: 4, cap: 3 }
        );
        assert_eq!(
            s.slice(2..1).unwrap_err(),
            ValError::SliceBounds { lo: 2, hi: 1, cap: 3 }
        );
        assert_eq!(
            s.get(3).unwrap_err(),
            ValError::IndexOutOfRange { index: 3, len: 3 }
        );
        assert!(s.set(7, 0).is_err());
        assert!(Slice::<i32>::make_with_cap(3, 2).is_err());
    }

    #[test]
    fn test_index_checked_against_len_not_cap() {
        let s: Slice<i32> = Slice::make_with_cap(1, 4).unwrap();
        assert!(s.get(0).is_ok());
        assert_eq!(
            s.get(1).unwrap_err(),
            ValError::IndexOutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn test_nil_slice() {
        let s: Slice<i32> = Slice::nil();
        assert!(s.is_nil());
        assert_eq!((s.len(), s.cap(), s.to_string()), (0, 0, "[]".to_string()));
        assert!(s.slice(..).unwrap().is_nil());
        assert!(!Slice::<i32>::from(vec![]).is_nil());
    }

    #[test]
    fn test_append_grows_from_nil() {
        let s: Slice<i32> = Slice::nil();
        let s = s.append([0]);
        assert_eq!((s.len(), s.cap()), (1, 1));
        let s = s.append([1]);
        assert_eq!((s.len(), s.cap()), (2, 2));
        let s = s.append([2, 3, 4]);
        assert_eq!((s.len(), s.cap()), (5, 5));
        assert_eq!(s.to_string(), "[0 1 2 3 4]");
    }

    #[test]
    fn test_append_within_capacity_aliases() {
        let a: Slice<i32> = Slice::make_with_cap(3, 10).unwrap();
        let b = a.append([1]);
        let c = a.append([2]);
        assert!(b.shares_backing(&a));
        assert_eq!(b.get(3).unwrap(), 2);
        assert_eq!(c.get(3).unwrap(), 2);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_append_past_capacity_severs() {
        let old = Slice::from(vec![1, 2, 3]);
        let grown = old.append([4]);
        assert!(!grown.shares_backing(&old));
        assert_eq!(grown.cap(), 6);

        old.set(0, 100).unwrap();
        assert_eq!(grown.get(0).unwrap(), 1);
        grown.set(1, 200).unwrap();
        assert_eq!(old.get(1).unwrap(), 2);
    }

    #[test]
    fn test_full_slice_limits_capacity() {
        let base = Slice::from(vec![1, 2, 3, 4, 5]);
        let head = base.slice3(0, 2, 2).unwrap();
        assert_eq!(head.cap(), 2);
        let grown = head.append([9]);
        assert_eq!(base.get(2).unwrap(), 3);
        assert_eq!(grown.to_vec(), vec![1, 2, 9]);

        let head = base.slice(..2).unwrap();
        head.append([9]);
        assert_eq!(base.get(2).unwrap(), 9);

        assert_eq!(
            base.slice3(1, 3, 6).unwrap_err(),
            ValError::FullSliceBounds { lo: 1, hi: 3, max: 6, cap: 5 }
        );
    }

    #[test]
    fn test_append_slice_to_itself() {
        let s = Slice::from(vec![1, 2]);
        let doubled = s.append_slice(&s);
        assert_eq!(doubled.to_vec(), vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_grow_cap_policy() {
        assert_eq!(grow_cap(0, 1), 1);
        assert_eq!(grow_cap(1, 2), 2);
        assert_eq!(grow_cap(2, 5), 5);
        assert_eq!(grow_cap(4, 5), 8);
        assert_eq!(grow_cap(255, 256), 510);
        assert_eq!(grow_cap(256, 257), 512);
        assert_eq!(grow_cap(1024, 1025), 1024 + (1024 + 768) / 4);
    }

    #[test]
    fn test_copy_overlapping() {
        let s = Slice::from(vec![1, 2, 3, 4, 5]);
        let dst = s.slice(1..).unwrap();
        let n = dst.copy_from(&s);
        assert_eq!(n, 4);
        assert_eq!(s.to_vec(), vec![1, 1, 2, 3, 4]);
    }

    #[test]
    fn test_iter_yields_copies() {
        let rows: Slice<Slice<u8>> = Slice::make(3);
        for mut row in rows.iter() {
            row = Slice::make(2);
            assert_eq!(row.len(), 2);
        }
        assert!(rows.iter().all(|row| row.is_nil()));

        for i in 0..rows.len() {
            rows.set(i, Slice::make(2)).unwrap();
        }
        assert!(rows.iter().all(|row| row.len() == 2));
    }

    #[test]
    fn test_nested_slices_share_rows() {
        let board: Slice<Slice<ValStr>> = (0..3)
            .map(|_| Slice::from(vec![ValStr::from("_"); 3]))
            .collect();
        board.get(0).unwrap().set(0, "X".into()).unwrap();
        board.get(2).unwrap().set(2, "O".into()).unwrap();
        assert_eq!(board.to_string(), "[[X _ _] [_ _ _] [_ _ O]]");
    }

    #[test]
    fn test_update_in_place() {
        let s = Slice::from(vec![1, 2, 3]);
        let t = s.clone();
        t.update(2, |v| *v *= 10).unwrap();
        assert_eq!(s.get(2).unwrap(), 30);
    }

    #[test]
    fn test_update_may_read_sibling_view() {
        let s = Slice::from(vec![1, 2, 3]);
        let t = s.slice(1..).unwrap();
        s.update(0, |v| *v += t.get(0).unwrap()).unwrap();
        assert_eq!(s.to_vec(), vec![3, 2, 3]);

        let alias = s.clone();
        s.update(2, |v| *v *= alias.get(2).unwrap()).unwrap();
        assert_eq!(t.to_vec(), vec![2, 9]);
    }

    #[test]
    fn test_serialize_only_visible_window() {
        let s = Slice::from(vec![2, 3, 5, 7]).slice(1..3).unwrap();
        assert_eq!(serde_json::to_string(&s).unwrap(), "[3,5]");
        assert_eq!(serde_json::to_string(&Slice::<i32>::nil()).unwrap(), "[]");
    }
}
