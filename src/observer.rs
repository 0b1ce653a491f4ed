use std::{fmt, marker::PhantomData, ops::Deref, ptr::{self, NonNull}};
use crate::error::{ObserverError, ObserverResult};

/// A non-owning, possibly empty handle to a `T`.
///
/// The handle stores nothing but the address of the observed value. It never
/// drops, moves or otherwise manages the value it points at, and copying it
/// is as cheap as copying a reference. Comparisons and hashing work on the
/// address alone and never touch the pointee.
pub struct ObserverPtr<'t, T: ?Sized> {
    target: Option<NonNull<T>>,
    _marker: PhantomData<&'t T>,
}

// Same rules as `&T`
unsafe impl<T: ?Sized + Sync> Send for ObserverPtr<'_, T> {}
unsafe impl<T: ?Sized + Sync> Sync for ObserverPtr<'_, T> {}

impl<'t, T: ?Sized> ObserverPtr<'t, T> {
    /// An observer that points at nothing.
    pub const fn null() -> Self {
        Self { target: None, _marker: PhantomData }
    }

    pub fn new(target: &'t T) -> Self {
        Self { target: Some(NonNull::from(target)), _marker: PhantomData }
    }

    /// Wraps a raw pointer. A null pointer gives an empty observer.
    ///
    /// # Safety
    ///
    /// If `ptr` is non-null it must be valid for reads of `T` and the value
    /// must not be mutated for the whole of `'t`, exactly as if it had been
    /// turned into a `&'t T`.
    pub unsafe fn from_raw(ptr: *const T) -> Self {
        Self { target: NonNull::new(ptr.cast_mut()), _marker: PhantomData }
    }

    /// The observed value, or `None` if the observer is empty.
    pub fn get(&self) -> Option<&'t T> {
        // Only ever set from a `&'t T` or through `from_raw`
        self.target.map(|p| unsafe { p.as_ref() })
    }

    /// Like [`get`](Self::get), but reports an empty observer as an error.
    pub fn try_get(&self) -> ObserverResult<&'t T> {
        self.get().ok_or(ObserverError::Empty)
    }

    pub fn as_non_null(&self) -> Option<NonNull<T>> {
        self.target
    }

    /// The address of the observed value with any pointer metadata stripped,
    /// or a null pointer if the observer is empty.
    pub fn addr(&self) -> *const () {
        self.target.map_or(ptr::null(), |p| p.as_ptr().cast::<()>().cast_const())
    }

    pub fn is_some(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_null(&self) -> bool {
        self.target.is_none()
    }

    /// Dereferences without checking for emptiness.
    ///
    /// # Safety
    ///
    /// The observer must not be empty.
    pub unsafe fn deref_unchecked(&self) -> &'t T {
        self.target.unwrap_unchecked().as_ref()
    }

    /// Takes the observed value out, leaving the observer empty.
    pub fn release(&mut self) -> Option<&'t T> {
        self.replace(None)
    }

    /// Empties the observer. The previously observed value is left untouched.
    pub fn reset(&mut self) {
        self.target = None;
    }

    pub fn reset_to(&mut self, target: &'t T) {
        *self = Self::new(target);
    }

    /// Points the observer at `target` and returns what it observed before.
    pub fn replace(&mut self, target: Option<&'t T>) -> Option<&'t T> {
        std::mem::replace(self, target.into()).get()
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.target, &mut other.target);
    }

    /// Converts into an observer of a related type, e.g. a trait object the
    /// value implements or a field embedded inside it. Empty stays empty.
    ///
    /// ```
    /// # use observer_ptr::ObserverPtr;
    /// # use std::fmt::Display;
    /// let value = 7;
    /// let concrete = ObserverPtr::new(&value);
    /// let shown: ObserverPtr<dyn Display> = concrete.map(|v| v as &dyn Display);
    /// assert_eq!(shown.to_string(), "7");
    /// assert!(shown.addr_eq(&concrete));
    /// ```
    pub fn map<U: ?Sized, F: FnOnce(&'t T) -> &'t U>(self, f: F) -> ObserverPtr<'t, U> {
        self.get().map(f).into()
    }
}

impl<'t, T> ObserverPtr<'t, T> {
    /// The raw address, null if the observer is empty.
    pub fn as_ptr(&self) -> *const T {
        self.target.map_or(ptr::null(), |p| p.as_ptr().cast_const())
    }
}

pub fn make_observer<T: ?Sized>(target: &T) -> ObserverPtr<'_, T> {
    ObserverPtr::new(target)
}

pub fn swap<'t, T: ?Sized>(a: &mut ObserverPtr<'t, T>, b: &mut ObserverPtr<'t, T>) {
    a.swap(b);
}

impl<T: ?Sized> Clone for ObserverPtr<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ObserverPtr<'_, T> {}

impl<T: ?Sized> Default for ObserverPtr<'_, T> {
    fn default() -> Self {
        Self::null()
    }
}

/// # Panics
///
/// Panics if the observer is empty.
impl<T: ?Sized> Deref for ObserverPtr<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match self.get() {
            Some(target) => target,
            None => panic!("{}", ObserverError::Empty),
        }
    }
}

impl<T: ?Sized> fmt::Debug for ObserverPtr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("ObserverPtr(null)")
        } else {
            write!(f, "ObserverPtr({:p})", self.addr())
        }
    }
}

impl<T: ?Sized> fmt::Pointer for ObserverPtr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.addr(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::{make_observer, swap, ObserverPtr};
    use crate::error::ObserverError;

    #[test]
    fn starts_empty() {
        let obs = ObserverPtr::<i32>::default();
        assert!(obs.is_null());
        assert!(!obs.is_some());
        assert!(obs.get().is_none());
        assert!(obs.as_ptr().is_null());
        assert!(obs.addr().is_null());
        assert_eq!(ObserverPtr::<i32>::null(), obs);
    }

    #[test]
    fn reset_to_value() {
        let x = 42;
        let mut obs = ObserverPtr::<i32>::null();
        obs.reset_to(&x);
        assert!(obs.is_some());
        assert_eq!(*obs, 42);
        assert_eq!(obs.as_ptr(), &x as *const i32);
        assert!(std::ptr::eq(obs.get().unwrap(), &x));
    }

    #[test]
    fn release_empties() {
        let x = 3;
        let mut obs = make_observer(&x);
        let released = obs.release();
        assert!(std::ptr::eq(released.unwrap(), &x));
        assert!(obs.is_null());
        assert_eq!(obs.release(), None);
    }

    #[test]
    fn reset_leaves_value_alone() {
        let v = vec![1, 2, 3];
        let mut obs = ObserverPtr::new(&v);
        obs.reset();
        assert!(obs.is_null());
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn replace_returns_previous() {
        let a = 'a';
        let b = 'b';
        let mut obs = ObserverPtr::new(&a);
        assert_eq!(obs.replace(Some(&b)), Some(&'a'));
        assert_eq!(*obs, 'b');
        assert_eq!(obs.replace(None), Some(&'b'));
        assert!(obs.is_null());
    }

    #[test]
    fn swaps_addresses() {
        let a = 1;
        let b = 2;
        let mut x = ObserverPtr::new(&a);
        let mut y = ObserverPtr::new(&b);
        x.swap(&mut y);
        assert_eq!((*x, *y), (2, 1));
        swap(&mut x, &mut y);
        assert_eq!((*x, *y), (1, 2));

        let mut empty = ObserverPtr::null();
        x.swap(&mut empty);
        assert!(x.is_null());
        assert_eq!(*empty, 1);
    }

    struct Point {
        x: i32,
        y: i32,
    }

    impl Point {
        fn sum(&self) -> i32 {
            self.x + self.y
        }
    }

    #[test]
    fn member_access() {
        let p = Point { x: 2, y: 5 };
        let obs = ObserverPtr::new(&p);
        assert_eq!(obs.x, 2);
        assert_eq!(obs.sum(), 7);
        assert_eq!(unsafe { obs.deref_unchecked() }.y, 5);
    }

    #[test]
    fn raw_pointers() {
        let x = 9u8;
        let obs = unsafe { ObserverPtr::from_raw(&x as *const u8) };
        assert_eq!(*obs, 9);
        let null = unsafe { ObserverPtr::<u8>::from_raw(std::ptr::null()) };
        assert!(null.is_null());
    }

    #[test]
    fn unsized_targets() {
        let s = String::from("observed");
        let obs: ObserverPtr<str> = ObserverPtr::new(s.as_str());
        assert_eq!(obs.len(), 8);
        assert_eq!(obs.addr(), s.as_ptr().cast());

        let items = [1, 2, 3];
        let slice: ObserverPtr<[i32]> = ObserverPtr::new(&items[1..]);
        assert_eq!(&*slice, &[2, 3]);
    }

    #[test]
    fn try_get() {
        let x = 5;
        assert_eq!(ObserverPtr::new(&x).try_get(), Ok(&5));
        assert_eq!(ObserverPtr::<i32>::null().try_get(), Err(ObserverError::Empty));
    }

    #[test]
    #[should_panic(expected = "dereferenced an empty observer")]
    fn deref_empty_panics() {
        let obs = ObserverPtr::<i32>::null();
        let _value: i32 = *obs;
    }

    #[test]
    #[should_panic(expected = "dereferenced an empty observer")]
    fn member_access_on_empty_panics() {
        let obs = ObserverPtr::<Point>::null();
        let _x: i32 = obs.x;
    }

    #[test]
    fn formatting() {
        let x = 1;
        let obs = ObserverPtr::new(&x);
        assert_eq!(format!("{:?}", ObserverPtr::<i32>::null()), "ObserverPtr(null)");
        assert_eq!(format!("{obs:?}"), format!("ObserverPtr({:p})", &x));
        assert_eq!(format!("{obs:p}"), format!("{:p}", &x));
    }
}
