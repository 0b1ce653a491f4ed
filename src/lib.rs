//! A non-owning observer handle.
//!
//! [`ObserverPtr`] says "I can see this value but I do not own it". It holds
//! a single address (or nothing), hands out shared references to the value
//! behind it, and compares, orders and hashes by that address. It never
//! frees, constructs or drops anything.
//!
//! ```
//! use observer_ptr::{make_observer, ObserverPtr};
//!
//! let x = 42;
//! let mut obs = ObserverPtr::<i32>::null();
//! assert!(obs.is_null());
//!
//! obs.reset_to(&x);
//! assert_eq!(*obs, 42);
//! assert_eq!(obs, make_observer(&x));
//!
//! assert_eq!(obs.release(), Some(&42));
//! assert!(obs.is_null());
//! ```

#![warn(clippy::todo)]

use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any};

pub mod error;
pub mod observer;
pub mod cmp;
pub mod convert;
#[cfg(feature = "as-any")]
pub mod downcast;
#[cfg(feature = "serde")]
pub mod serialize;


pub use convert::Observe;
pub use error::{ObserverError, ObserverResult};
pub use observer::{make_observer, swap, ObserverPtr};

assert_eq_size!(ObserverPtr<'static, u64>, *const u64);
assert_eq_size!(ObserverPtr<'static, str>, *const str);
assert_eq_size!(ObserverPtr<'static, dyn std::fmt::Debug>, *const dyn std::fmt::Debug);

assert_impl_all!(ObserverPtr<'static, u32>: Copy, Default, Send, Sync, Ord, std::hash::Hash);
assert_not_impl_any!(ObserverPtr<'static, std::cell::Cell<u32>>: Send, Sync);
