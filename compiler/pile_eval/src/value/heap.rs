//! Shared, immutable heap payloads.
//!
//! Every heap-allocated part of a [`Value`](super::Value) sits behind a
//! `Heap<T>`. Values never mutate their payload; words that "modify" an array
//! or object build a new payload, so sharing an `Arc` is always safe.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted, immutable payload.
///
/// Equality always compares contents, even for two handles to one
/// allocation, so a shared array holding `nan` is not equal to itself. Use
/// [`Heap::ptr_eq`] for identity, which is what prototype checks rely on.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    /// Crate-private so values are only created through `Value` factories.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Heap<T> {
    /// Copy of the payload, for building a modified value.
    #[inline]
    pub fn to_owned_inner(&self) -> T {
        T::clone(&self.0)
    }

    /// Take the payload out, copying only when it is shared.
    #[inline]
    pub fn into_inner(self) -> T {
        Arc::try_unwrap(self.0).unwrap_or_else(|shared| T::clone(&shared))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Hash> Hash for Heap<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_allocation() {
        let a = Heap::new(vec![1, 2, 3]);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn equal_contents_are_equal_but_not_identical() {
        let a = Heap::new("x".to_string());
        let b = Heap::new("x".to_string());
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn shared_handles_still_compare_contents() {
        let a = Heap::new(vec![f64::NAN]);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn into_inner_copies_only_when_shared() {
        let a = Heap::new(vec![1]);
        let b = a.clone();
        let mut owned = a.into_inner();
        owned.push(2);
        assert_eq!(owned, vec![1, 2]);
        assert_eq!(*b, vec![1]);
    }
}
