use serde::{Serialize, Serializer};
use crate::observer::ObserverPtr;

/// Serializes the observed value the same way `Option<&T>` would, the address
/// itself never ends up in the output.
impl<T: ?Sized + Serialize> Serialize for ObserverPtr<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}
