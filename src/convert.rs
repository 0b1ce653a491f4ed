use crate::observer::ObserverPtr;

impl<'t, T: ?Sized> From<&'t T> for ObserverPtr<'t, T> {
    fn from(target: &'t T) -> Self {
        Self::new(target)
    }
}

impl<'t, T: ?Sized> From<&'t mut T> for ObserverPtr<'t, T> {
    fn from(target: &'t mut T) -> Self {
        Self::new(target)
    }
}

impl<'t, T: ?Sized> From<Option<&'t T>> for ObserverPtr<'t, T> {
    fn from(target: Option<&'t T>) -> Self {
        target.map_or_else(Self::null, Self::new)
    }
}

impl<'t, T: ?Sized> From<ObserverPtr<'t, T>> for Option<&'t T> {
    fn from(obs: ObserverPtr<'t, T>) -> Self {
        obs.get()
    }
}

impl<'t, T> From<ObserverPtr<'t, T>> for *const T {
    fn from(obs: ObserverPtr<'t, T>) -> Self {
        obs.as_ptr()
    }
}

/// Shorthand for turning borrows into observers.
pub trait Observe<'t, T: ?Sized> {
    fn observe(self) -> ObserverPtr<'t, T>;
}

impl<'t, T: ?Sized> Observe<'t, T> for &'t T {
    fn observe(self) -> ObserverPtr<'t, T> {
        ObserverPtr::new(self)
    }
}

impl<'t, T: ?Sized> Observe<'t, T> for Option<&'t T> {
    fn observe(self) -> ObserverPtr<'t, T> {
        self.into()
    }
}
