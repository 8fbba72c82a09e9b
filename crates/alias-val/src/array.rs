//! Fixed-size arrays with value semantics
//!
//! An [`Array`] owns its elements inline. Assigning it or passing it by
//! value produces an independent copy: nothing written to the copy is ever
//! seen by the original. To share an array, wrap it in a [`crate::Ptr`] or
//! move it into the backing of a [`crate::Slice`].

use crate::{ValError, ValResult};
use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Array<T, const N: usize> {
    values: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    pub fn new(values: [T; N]) -> Self {
        Self { values }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn get(&self, index: usize) -> ValResult<&T> {
        self.values
            .get(index)
            .ok_or(ValError::IndexOutOfRange { index, len: N })
    }

    pub fn set(&mut self, index: usize, value: T) -> ValResult<()> {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ValError::IndexOutOfRange { index, len: N }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn into_inner(self) -> [T; N] {
        self.values
    }
}

/// Zero value: every element defaulted.
impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::new(values)
    }
}

impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.values[index]
    }
}

impl<T: Display, const N: usize> Display for Array<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        print_seq(f, self.values.iter())
    }
}

/// Writes `items` space-separated inside brackets: `[a b c]`.
pub fn print_seq<'a, T: Display + 'a>(
    f: &mut Formatter<'_>,
    items: impl IntoIterator<Item = &'a T>,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, v) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", v)?;
    }
    write!(f, "]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_value() {
        let a: Array<String, 2> = Array::default();
        assert_eq!(a.to_string(), "[ ]");
        let b: Array<i32, 3> = Array::default();
        assert_eq!(b.to_string(), "[0 0 0]");
    }

    #[test]
    fn test_assign_copies() {
        let x = Array::new([2, 3, 5, 7, 11, 13]);
        let mut y = x;
        y[0] = 99;
        assert_eq!(x[0], 2);
        assert_eq!(y[0], 99);
    }

    #[test]
    fn test_clone_copies_owned_elements() {
        let x = Array::new([String::from("Hello"), String::from("World")]);
        let mut y = x.clone();
        y[1].push('!');
        assert_eq!(x.to_string(), "[Hello World]");
        assert_eq!(y.to_string(), "[Hello World!]");
    }

    #[test]
    fn test_checked_access() {
        let mut a = Array::new([1, 2]);
        assert_eq!(a.get(1), Ok(&2));
        assert_eq!(a.get(2), Err(ValError::IndexOutOfRange { index: 2, len: 2 }));
        assert!(a.set(0, 10).is_ok());
        assert_eq!(a.set(5, 0), Err(ValError::IndexOutOfRange { index: 5, len: 2 }));
        assert_eq!(a.into_inner(), [10, 2]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let a = Array::new([1, 2]);
        let i = a.len();
        let v = a[i];
        assert_eq!(v, 0);
    }
}
