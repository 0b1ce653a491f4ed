use std::{cmp::Ordering, hash::{Hash, Hasher}};
use crate::observer::ObserverPtr;

impl<'t, T: ?Sized> ObserverPtr<'t, T> {
    /// Address equality between observers of possibly different types.
    /// Pointer metadata is not compared.
    pub fn addr_eq<U: ?Sized>(&self, other: &ObserverPtr<'_, U>) -> bool {
        self.addr() == other.addr()
    }
}

impl<T: ?Sized> PartialEq for ObserverPtr<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.addr_eq(other)
    }
}

impl<T: ?Sized> Eq for ObserverPtr<'_, T> {}

// Ordering is only defined between observers of the same type. Empty sorts first.
impl<T: ?Sized> PartialOrd for ObserverPtr<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ?Sized> Ord for ObserverPtr<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.addr().cmp(&other.addr())
    }
}

impl<T: ?Sized> Hash for ObserverPtr<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state)
    }
}
