use crate::{
    unwrap::{fail, UnwrapError},
    Outcome,
};
use core::{
    fmt::{self, Display},
    iter::FusedIterator,
};

/// An optional value: either [`Maybe::Some`] holding exactly one `T`, or [`Maybe::None`].
///
/// `None` sorts before every `Some`; two `Some` values compare by their payloads.
///
/// ```rust
/// use option_result::Maybe;
///
/// let name = Maybe::Some("leptos");
/// assert!(name.is_some());
/// assert_eq!(name.map(str::len), Maybe::Some(6));
///
/// let missing: Maybe<&str> = Maybe::None;
/// assert_eq!(missing.unwrap_or("anonymous"), "anonymous");
/// assert!(Maybe::None < Maybe::Some(0));
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Default)]
pub enum Maybe<T> {
    /// No value.
    #[default]
    None,
    /// Some value of type `T`.
    Some(T),
}

impl<T> Maybe<T> {
    /// Returns `true` if this holds a value.
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns `true` if this holds nothing.
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Borrows the held value, if any.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Returns the held value.
    ///
    /// ## Panics
    ///
    /// Panics if this is [`Maybe::None`].
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => fail(UnwrapError::none("Maybe::unwrap")),
        }
    }

    /// Returns the held value.
    ///
    /// ## Panics
    ///
    /// Panics with `msg` if this is [`Maybe::None`].
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => fail(UnwrapError::expect(msg)),
        }
    }

    /// Returns the held value, or an [`UnwrapError`] describing why there is none.
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(UnwrapError::none("Maybe::unwrap")),
        }
    }

    /// Returns the held value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default,
        }
    }

    /// Returns the held value, or computes one with `f`.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => f(),
        }
    }

    /// Returns the held value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Applies `f` to the held value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Applies `f` to the held value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => default,
        }
    }

    /// Applies `f` to the held value, or computes a default with `default`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => default(),
        }
    }

    /// Calls `f` with a reference to the held value, then returns `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Some(value) = &self {
            f(value);
        }
        self
    }

    /// Chains a transform that may itself produce nothing.
    ///
    /// ```rust
    /// use option_result::Maybe;
    ///
    /// let half = |n: u32| if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::None };
    /// assert_eq!(Maybe::Some(8).and_then(half).and_then(half), Maybe::Some(2));
    /// assert_eq!(Maybe::Some(6).and_then(half).and_then(half), Maybe::None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Returns `other` if this holds a value, otherwise `None`.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Some(_) => other,
            Maybe::None => Maybe::None,
        }
    }

    /// Returns `self` if it holds a value, otherwise `alternative`.
    #[inline]
    pub fn or(self, alternative: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => alternative,
        }
    }

    /// Returns `self` if it holds a value, otherwise calls `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => f(),
        }
    }

    /// Returns whichever of `self` and `other` holds a value, if exactly one does.
    #[inline]
    pub fn xor(self, other: Maybe<T>) -> Maybe<T> {
        match (self, other) {
            (Maybe::Some(value), Maybe::None) | (Maybe::None, Maybe::Some(value)) => {
                Maybe::Some(value)
            }
            _ => Maybe::None,
        }
    }

    /// Pairs the held values of `self` and `other` if both are present.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
            _ => Maybe::None,
        }
    }

    /// Keeps the held value only if `predicate` returns `true` for it.
    ///
    /// The predicate is never called on `None`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Maybe::Some(value) = self {
            if predicate(&value) {
                return Maybe::Some(value);
            }
        }
        Maybe::None
    }

    /// Converts into an [`Outcome`], using `error` for the empty case.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Maybe::Some(value) => Outcome::Ok(value),
            Maybe::None => Outcome::Err(error),
        }
    }

    /// Converts into an [`Outcome`], computing the error with `f` for the empty case.
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Some(value) => Outcome::Ok(value),
            Maybe::None => Outcome::Err(f()),
        }
    }

    /// Iterates over the held value: one item for `Some`, none for `None`.
    ///
    /// Each call starts a fresh iterator over the same container.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref())
    }

    /// Converts into a [`core::option::Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Maybe<Outcome<T, E>> {
    /// Turns a `Maybe` of an `Outcome` into an `Outcome` of a `Maybe`.
    ///
    /// `None` becomes `Ok(None)`.
    #[inline]
    pub fn transpose(self) -> Outcome<Maybe<T>, E> {
        match self {
            Maybe::Some(Outcome::Ok(value)) => Outcome::Ok(Maybe::Some(value)),
            Maybe::Some(Outcome::Err(error)) => Outcome::Err(error),
            Maybe::None => Outcome::Ok(Maybe::None),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> Display for Maybe<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Some(value) => write!(f, "Some({value})"),
            Maybe::None => f.write_str("None"),
        }
    }
}

impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    /// Collects the held values, stopping at the first `None`.
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        let mut missing = false;
        let collected = iter
            .into_iter()
            .map_while(|item| match item {
                Maybe::Some(value) => Some(value),
                Maybe::None => {
                    missing = true;
                    None
                }
            })
            .collect();
        if missing {
            Maybe::None
        } else {
            Maybe::Some(collected)
        }
    }
}

/// Borrowing iterator over a [`Maybe`], created by [`Maybe::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: Maybe<&'a T>) -> Self {
        Iter {
            inner: inner.into(),
        }
    }
}

// Derived `Clone` would require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`Maybe`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: Maybe<T>) -> Self {
        IntoIter {
            inner: inner.into(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
