//! Two small containers for representing "value or absence" and "success or failure" as data.
//!
//! - [`Maybe<T>`] is either [`Maybe::Some`] holding a value, or [`Maybe::None`].
//! - [`Outcome<T, E>`] is either [`Outcome::Ok`] holding a success value, or [`Outcome::Err`]
//!   holding an error.
//!
//! Both are plain enums: a value is constructed once in one of its two states and never changes.
//! Every combinator consumes or borrows the container and returns a new one, running exactly one
//! branch per call. Closures passed to the `_else` combinators only run on the fallback branch,
//! and a panic inside a closure is never caught.
//!
//! ```rust
//! use option_result::{Maybe, Outcome};
//!
//! let port: Maybe<u16> = Maybe::Some(8080);
//! assert_eq!(port.map(|p| p + 1), Maybe::Some(8081));
//! assert_eq!(Maybe::<u16>::None.unwrap_or(80), 80);
//!
//! let status: Outcome<&str, u16> = Outcome::Err(404);
//! assert_eq!(status.ok(), Maybe::None);
//! assert_eq!(status.map_err(|code| code / 100), Outcome::Err(4));
//! ```
//!
//! Calling [`Maybe::unwrap`] on `None`, or [`Outcome::unwrap`] on `Err`, panics. The message is
//! the [`Display`](core::fmt::Display) form of an [`UnwrapError`], which is also available
//! without panicking through [`Maybe::try_unwrap`] and friends.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

mod lookup;
mod maybe;
mod outcome;
mod unwrap;

pub use lookup::Lookup;
pub use maybe::{IntoIter, Iter, Maybe};
pub use outcome::Outcome;
pub use unwrap::UnwrapError;
