//! An optional-value container with a defined `repr(C)` layout.
//!
//! [`Optional<T>`] holds at most one value of type `T` and is always in
//! exactly one of two states, [`Full`] or [`Empty`]. The combinator surface
//! mirrors the familiar monadic one (`map`, `and_then`, `filter`, `or`, the
//! `insert`/`take`/`replace` family), but extraction never panics:
//! [`Optional::unwrap`] and [`Optional::expect`] return a recoverable
//! [`EmptyValueError`] so absence can be handled as a normal branch.
//!
//! The tagged layout is generated into a C header by the build script, so
//! the container can be shared across an FFI boundary.

pub mod error;
pub mod optional;

pub use crate::error::EmptyValueError;
pub use crate::optional::Optional;
pub use crate::optional::Optional::{Empty, Full};
