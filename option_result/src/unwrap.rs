use alloc::{format, string::String};
use core::fmt::Debug;
use thiserror::Error;

/// Describes an attempt to extract a payload from the wrong variant.
///
/// Every panicking extractor ([`Maybe::unwrap`](crate::Maybe::unwrap),
/// [`Outcome::unwrap_err`](crate::Outcome::unwrap_err), the `expect` family, ...) builds one of
/// these and panics with its [`Display`](core::fmt::Display) form. The `try_` variants of those
/// methods hand it back instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnwrapError {
    /// A value was requested from [`Maybe::None`](crate::Maybe::None).
    #[error("called `{method}()` on a `None` value")]
    NoneValue {
        /// The method that was called.
        method: &'static str,
    },
    /// A success value was requested from [`Outcome::Err`](crate::Outcome::Err).
    #[error("called `{method}()` on an `Err` value: {found}")]
    ErrValue {
        /// The method that was called.
        method: &'static str,
        /// `Debug` representation of the error that was held instead.
        found: String,
    },
    /// An error was requested from [`Outcome::Ok`](crate::Outcome::Ok).
    #[error("called `{method}()` on an `Ok` value: {found}")]
    OkValue {
        /// The method that was called.
        method: &'static str,
        /// `Debug` representation of the success value that was held instead.
        found: String,
    },
    /// A caller-supplied `expect` message, with nothing else to report.
    #[error("{message}")]
    Expect {
        /// The message passed to `expect`.
        message: String,
    },
    /// A caller-supplied `expect` message, followed by the payload that was held instead.
    #[error("{message}: {found}")]
    ExpectWith {
        /// The message passed to `expect`.
        message: String,
        /// `Debug` representation of the payload that was held instead.
        found: String,
    },
}

impl UnwrapError {
    pub(crate) fn none(method: &'static str) -> Self {
        UnwrapError::NoneValue { method }
    }

    pub(crate) fn err(method: &'static str, found: &impl Debug) -> Self {
        UnwrapError::ErrValue {
            method,
            found: format!("{found:?}"),
        }
    }

    pub(crate) fn ok(method: &'static str, found: &impl Debug) -> Self {
        UnwrapError::OkValue {
            method,
            found: format!("{found:?}"),
        }
    }

    pub(crate) fn expect(message: &str) -> Self {
        UnwrapError::Expect {
            message: message.into(),
        }
    }

    pub(crate) fn expect_with(message: &str, found: &impl Debug) -> Self {
        UnwrapError::ExpectWith {
            message: message.into(),
            found: format!("{found:?}"),
        }
    }

    /// The `Debug` representation of the payload that was present instead, if there was one.
    pub fn found(&self) -> Option<&str> {
        match self {
            UnwrapError::ErrValue { found, .. }
            | UnwrapError::OkValue { found, .. }
            | UnwrapError::ExpectWith { found, .. } => Some(found),
            UnwrapError::NoneValue { .. } | UnwrapError::Expect { .. } => None,
        }
    }
}

/// Panics with `err`.
///
/// This is the only place the crate panics.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail(err: UnwrapError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        location = %core::panic::Location::caller(),
        "{err}"
    );
    panic!("{err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_method_and_payload() {
        assert_eq!(
            UnwrapError::none("Maybe::unwrap").to_string(),
            "called `Maybe::unwrap()` on a `None` value"
        );
        assert_eq!(
            UnwrapError::err("Outcome::unwrap", &"bad").to_string(),
            "called `Outcome::unwrap()` on an `Err` value: \"bad\""
        );
        assert_eq!(
            UnwrapError::ok("Outcome::unwrap_err", &1).to_string(),
            "called `Outcome::unwrap_err()` on an `Ok` value: 1"
        );
    }

    #[test]
    fn expect_messages_are_used_verbatim() {
        assert_eq!(UnwrapError::expect("no port").to_string(), "no port");
        assert_eq!(
            UnwrapError::expect_with("lookup failed", &404).to_string(),
            "lookup failed: 404"
        );
    }

    #[test]
    fn found_is_only_set_when_a_payload_was_held() {
        assert_eq!(UnwrapError::none("Maybe::unwrap").found(), None);
        assert_eq!(UnwrapError::expect("x").found(), None);
        assert_eq!(UnwrapError::err("Outcome::unwrap", &404).found(), Some("404"));
    }

    #[test]
    #[should_panic(expected = "called `Maybe::unwrap()` on a `None` value")]
    fn fail_panics_with_the_display_form() {
        fail(UnwrapError::none("Maybe::unwrap"));
    }
}
