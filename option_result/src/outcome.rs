use crate::{
    unwrap::{fail, UnwrapError},
    IntoIter, Iter, Maybe,
};
use core::fmt::{self, Debug, Display};

/// The result of an operation: either [`Outcome::Ok`] with a success value, or [`Outcome::Err`]
/// with an error.
///
/// `Ok` and `Err` never compare equal, even when their payloads do. Every `Ok` sorts before every
/// `Err`.
///
/// ```rust
/// use option_result::{Maybe, Outcome};
///
/// fn parse(input: &str) -> Outcome<u8, String> {
///     input.parse::<u8>().map_err(|e| format!("{e}")).into()
/// }
///
/// assert_eq!(parse("7").map(|n| n * 2), Outcome::Ok(14));
/// assert_eq!(parse("x").ok(), Maybe::None);
/// assert_ne!(Outcome::<i32, i32>::Ok(1), Outcome::Err(1));
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Outcome<T, E> {
    /// A success value.
    Ok(T),
    /// An error value.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is [`Outcome::Ok`].
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is [`Outcome::Err`].
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrows both payloads.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// The success value, discarding any error.
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Outcome::Ok(value) => Maybe::Some(value),
            Outcome::Err(_) => Maybe::None,
        }
    }

    /// The error, discarding any success value.
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Outcome::Ok(_) => Maybe::None,
            Outcome::Err(error) => Maybe::Some(error),
        }
    }

    /// Returns the success value.
    ///
    /// ## Panics
    ///
    /// Panics if this is [`Outcome::Err`], with a message that includes the error.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => fail(err),
        }
    }

    /// Returns the success value.
    ///
    /// ## Panics
    ///
    /// Panics with `msg` followed by the error if this is [`Outcome::Err`].
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => fail(UnwrapError::expect_with(msg, &error)),
        }
    }

    /// Returns the success value, or an [`UnwrapError`] describing the error that was held.
    pub fn try_unwrap(self) -> Result<T, UnwrapError>
    where
        E: Debug,
    {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(UnwrapError::err("Outcome::unwrap", &error)),
        }
    }

    /// Returns the error.
    ///
    /// ## Panics
    ///
    /// Panics if this is [`Outcome::Ok`], with a message that includes the success value.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(err) => fail(err),
        }
    }

    /// Returns the error.
    ///
    /// ## Panics
    ///
    /// Panics with `msg` followed by the success value if this is [`Outcome::Ok`].
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Ok(value) => fail(UnwrapError::expect_with(msg, &value)),
            Outcome::Err(error) => error,
        }
    }

    /// Returns the error, or an [`UnwrapError`] describing the success value that was held.
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError>
    where
        T: Debug,
    {
        match self {
            Outcome::Ok(value) => Err(UnwrapError::ok("Outcome::unwrap_err", &value)),
            Outcome::Err(error) => Ok(error),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error with `f`.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => f(error),
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Applies `f` to the success value, leaving an error untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies `op` to the error, leaving a success value untouched.
    #[inline]
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(op(error)),
        }
    }

    /// Applies `f` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(_) => default,
        }
    }

    /// Applies `f` to the success value, or computes a default from the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => default(error),
        }
    }

    /// Calls `f` with a reference to the success value, then returns `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error, then returns `self` unchanged.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Chains a fallible transform on the success value.
    ///
    /// ```rust
    /// use option_result::Outcome;
    ///
    /// let checked_half = |n: u32| {
    ///     if n % 2 == 0 { Outcome::Ok(n / 2) } else { Outcome::Err(n) }
    /// };
    /// assert_eq!(Outcome::Ok(8).and_then(checked_half), Outcome::Ok(4));
    /// assert_eq!(Outcome::Ok(3).and_then(checked_half), Outcome::Err(3));
    /// assert_eq!(Outcome::Err(1).and_then(checked_half), Outcome::Err(1));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns `other` if this is `Ok`, otherwise this error.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => other,
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Recovers from an error with a fallible transform.
    #[inline]
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => op(error),
        }
    }

    /// Returns `self` if it is `Ok`, otherwise `other`.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(_) => other,
        }
    }

    /// Iterates over the success value: one item for `Ok`, none for `Err`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().ok())
    }

    /// Converts into a [`core::result::Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Outcome<Maybe<T>, E> {
    /// Turns an `Outcome` of a `Maybe` into a `Maybe` of an `Outcome`.
    ///
    /// `Ok(None)` becomes `None`.
    #[inline]
    pub fn transpose(self) -> Maybe<Outcome<T, E>> {
        match self {
            Outcome::Ok(Maybe::Some(value)) => Maybe::Some(Outcome::Ok(value)),
            Outcome::Ok(Maybe::None) => Maybe::None,
            Outcome::Err(error) => Maybe::Some(Outcome::Err(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T, E> Display for Outcome<T, E>
where
    T: Display,
    E: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(value) => write!(f, "Ok({value})"),
            Outcome::Err(error) => write!(f, "Err({error})"),
        }
    }
}

impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    /// Collects the success values, stopping at and returning the first error.
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        let mut error = None;
        let collected = iter
            .into_iter()
            .map_while(|item| match item {
                Outcome::Ok(value) => Some(value),
                Outcome::Err(e) => {
                    error = Some(e);
                    None
                }
            })
            .collect();
        match error {
            Some(error) => Outcome::Err(error),
            None => Outcome::Ok(collected),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
