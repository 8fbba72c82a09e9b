//! Pointers to shared mutable cells
//!
//! A [`Ptr`] names a variable rather than holding a copy of it. Cloning the
//! pointer hands out another name for the same variable, so a write through
//! any clone is seen through all of them. Reading the value out with
//! [`Ptr::get`] makes a copy that is no longer tied to the cell.

use crate::{same_storage, shared, Shared};
use std::fmt::{self, Debug, Display, Formatter};

pub struct Ptr<T> {
    cell: Shared<T>,
}

impl<T> Clone for Ptr<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T> Ptr<T> {
    /// Allocate a new cell holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            cell: shared(value),
        }
    }

    /// Copy of the pointee.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.cell.borrow().clone()
    }

    /// Store through the pointer.
    pub fn set(&self, value: T) {
        *self.cell.borrow_mut() = value;
    }

    pub fn replace(&self, value: T) -> T {
        self.cell.replace(value)
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.borrow())
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.cell.borrow_mut())
    }

    /// True when both pointers name the same variable.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        same_storage(&self.cell, &other.cell)
    }
}

impl<T: Default> Default for Ptr<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Display> Display for Ptr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "&{}", self.cell.borrow())
    }
}

impl<T: Debug> Debug for Ptr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ptr").field(&*self.cell.borrow()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Array;

    #[test]
    fn test_write_through_pointer() {
        let i = Ptr::new(42);
        let p = i.clone();
        assert_eq!(p.get(), 42);
        p.set(21);
        assert_eq!(i.get(), 21);
    }

    #[test]
    fn test_repoint() {
        let i = Ptr::new(42);
        let j = Ptr::new(2701);
        let mut p = i.clone();
        assert!(p.ptr_eq(&i));

        p = j.clone();
        p.with_mut(|v| *v /= 37);
        assert_eq!(j.get(), 73);
        assert_eq!(i.get(), 42);
        assert!(!p.ptr_eq(&i));
    }

    #[test]
    fn test_copy_out_is_detached() {
        let p = Ptr::new([1, 2, 3]);
        let mut copy = p.get();
        copy[0] = 100;
        assert_eq!(p.get(), [1, 2, 3]);
    }

    #[test]
    fn test_pointer_to_array_writes_reach_original() {
        let x = Ptr::new(Array::new([1, 2, 3]));
        let p = x.clone();
        p.with_mut(|a| a[1] = 200);
        assert_eq!(x.get().into_inner(), [1, 200, 3]);

        let mut y = x.get();
        y[0] = 100;
        assert_eq!(x.get().into_inner(), [1, 200, 3]);
        assert_eq!(p.to_string(), "&[1 200 3]");
    }

    #[test]
    fn test_replace_returns_previous() {
        let p = Ptr::new(String::from("old"));
        assert_eq!(p.replace("new".into()), "old");
        assert_eq!(p.with(|s| s.len()), 3);
    }

    #[test]
    fn test_display() {
        let p = Ptr::new(7);
        assert_eq!(p.to_string(), "&7");
    }
}
