use std::any::{type_name, Any};
use as_any::AsAny;
use crate::{error::{ObserverError, ObserverResult}, observer::ObserverPtr};

impl<'t, T: ?Sized + AsAny> ObserverPtr<'t, T> {
    /// Whether the observed value is a `U`. Always false for an empty observer.
    pub fn is<U: Any>(&self) -> bool {
        self.get().is_some_and(|target| AsAny::as_any(target).is::<U>())
    }

    /// Recovers an observer of the concrete type behind a trait object.
    /// This is the reverse of [`map`](ObserverPtr::map)ing into one.
    pub fn downcast<U: Any>(self) -> ObserverResult<ObserverPtr<'t, U>> {
        let target = self.try_get()?;
        AsAny::as_any(target)
            .downcast_ref::<U>()
            .map(ObserverPtr::new)
            .ok_or(ObserverError::TypeMismatch { expected: type_name::<U>() })
    }
}
