use std::{fmt, hint, mem};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EmptyValueError;

use self::Optional::{Empty, Full};

/// A container holding at most one value of type `T`.
///
/// An `Optional` is always in exactly one of two states: [`Full`] with one
/// value, or [`Empty`] with none. The tagged layout is defined (`repr(C, u8)`)
/// so the type can cross an FFI boundary.
///
/// cbindgen:derive-tagged-enum-destructor
#[repr(C, u8)]
pub enum Optional<T> {
    Empty,
    Full(T),
}

impl<T> From<std::option::Option<T>> for Optional<T> {
    #[inline]
    fn from(value: std::option::Option<T>) -> Self {
        match value {
            None => Empty,
            Some(val) => Full(val),
        }
    }
}

impl<T> Into<std::option::Option<T>> for Optional<T> {
    #[inline]
    fn into(self) -> std::option::Option<T> {
        match self {
            Empty => None,
            Full(val) => Some(val),
        }
    }
}

impl<T> Optional<T> {
    /////////////////////////////////////////////////////////////////////////
    // Querying the contained value
    /////////////////////////////////////////////////////////////////////////

    /// Returns `true` if the container holds a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let x: Optional<u32> = Full(2);
    /// assert_eq!(x.is_present(), true);
    ///
    /// let x: Optional<u32> = Empty;
    /// assert_eq!(x.is_present(), false);
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(*self, Full(_))
    }

    /// Returns `true` if the container holds a value and that value matches
    /// a predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let x: Optional<u32> = Full(2);
    /// assert_eq!(x.is_present_and(|x| x > 1), true);
    ///
    /// let x: Optional<u32> = Full(0);
    /// assert_eq!(x.is_present_and(|x| x > 1), false);
    ///
    /// let x: Optional<u32> = Empty;
    /// assert_eq!(x.is_present_and(|x| x > 1), false);
    /// ```
    #[must_use]
    #[inline]
    pub fn is_present_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Empty => false,
            Full(x) => f(x),
        }
    }

    /// Returns `true` if the container holds no value.
    ///
    /// Exact complement of [`is_present`].
    ///
    /// [`is_present`]: Optional::is_present
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let x: Optional<u32> = Full(2);
    /// assert_eq!(x.is_absent(), false);
    ///
    /// let x: Optional<u32> = Empty;
    /// assert_eq!(x.is_absent(), true);
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /////////////////////////////////////////////////////////////////////////
    // Adapters for working with references
    /////////////////////////////////////////////////////////////////////////

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    ///
    /// Useful for applying by-value combinators such as [`map`] without
    /// consuming the original container.
    ///
    /// [`map`]: Optional::map
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Full, Optional};
    ///
    /// let text: Optional<String> = Full("Hello, world!".to_string());
    /// let text_length: Optional<usize> = text.as_ref().map(|s| s.len());
    /// assert_eq!(text_length, Full(13));
    /// assert!(text.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match *self {
            Full(ref x) => Full(x),
            Empty => Empty,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let mut x = Full(2);
    /// match x.as_mut() {
    ///     Full(v) => *v = 42,
    ///     Empty => {}
    /// }
    /// assert_eq!(x, Full(42));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match *self {
            Full(ref mut x) => Full(x),
            Empty => Empty,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Extracting the contained value
    /////////////////////////////////////////////////////////////////////////

    /// Returns the contained value, or an [`EmptyValueError`] carrying `msg`
    /// if the container is [`Empty`].
    ///
    /// Absence is reported as a recoverable error rather than a panic, so it
    /// can be handled as an ordinary branch with `?` or a `match`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let x = Full("air");
    /// assert_eq!(x.expect("the world is ending"), Ok("air"));
    ///
    /// let x: Optional<&str> = Empty;
    /// let err = x.expect("the world is ending").unwrap_err();
    /// assert_eq!(err.message(), "the world is ending");
    /// ```
    #[inline]
    pub fn expect(self, msg: &str) -> Result<T, EmptyValueError> {
        match self {
            Full(val) => Ok(val),
            Empty => Err(EmptyValueError::new(msg)),
        }
    }

    /// Returns the contained value, or an [`EmptyValueError`] with a fixed
    /// message if the container is [`Empty`].
    ///
    /// If the error message should describe what was missing, use [`expect`].
    /// If failure is not an option, prefer [`unwrap_or`], [`unwrap_or_else`],
    /// or [`unwrap_or_default`].
    ///
    /// [`expect`]: Optional::expect
    /// [`unwrap_or`]: Optional::unwrap_or
    /// [`unwrap_or_else`]: Optional::unwrap_or_else
    /// [`unwrap_or_default`]: Optional::unwrap_or_default
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let x = Full("air");
    /// assert_eq!(x.unwrap(), Ok("air"));
    ///
    /// let x: Optional<&str> = Empty;
    /// assert!(x.unwrap().is_err());
    /// ```
    #[inline]
    pub fn unwrap(self) -> Result<T, EmptyValueError> {
        match self {
            Full(val) => Ok(val),
            Empty => Err(EmptyValueError::new("unwrap called on empty Optional")),
        }
    }

    /// Returns the contained value or a provided fallback.
    ///
    /// Arguments passed to `unwrap_or` are eagerly evaluated; if you are
    /// passing the result of a function call, it is recommended to use
    /// [`unwrap_or_else`], which is lazily evaluated.
    ///
    /// [`unwrap_or_else`]: Optional::unwrap_or_else
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// assert_eq!(Full("car").unwrap_or("bike"), "car");
    /// assert_eq!(Optional::<&str>::Empty.unwrap_or("bike"), "bike");
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Full(x) => x,
            Empty => fallback,
        }
    }

    /// Returns the contained value or computes a fallback from a closure.
    ///
    /// The closure is invoked at most once, and only when the container is
    /// [`Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let k = 10;
    /// assert_eq!(Full(4).unwrap_or_else(|| 2 * k), 4);
    /// assert_eq!(Optional::<i32>::Empty.unwrap_or_else(|| 2 * k), 20);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Full(x) => x,
            Empty => f(),
        }
    }

    /// Returns the contained value or the default value of `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let x: Optional<u32> = Empty;
    /// let y: Optional<u32> = Full(12);
    ///
    /// assert_eq!(x.unwrap_or_default(), 0);
    /// assert_eq!(y.unwrap_or_default(), 12);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Full(x) => x,
            Empty => Default::default(),
        }
    }

    /// Returns the contained value without checking that the container is
    /// [`Full`].
    ///
    /// # Safety
    ///
    /// Calling this method on [`Empty`] is undefined behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Full, Optional};
    ///
    /// let x = Full("air");
    /// assert_eq!(unsafe { x.unwrap_unchecked() }, "air");
    /// ```
    #[inline]
    #[track_caller]
    pub unsafe fn unwrap_unchecked(self) -> T {
        debug_assert!(self.is_present());
        match self {
            Full(val) => val,
            // SAFETY: the safety contract must be upheld by the caller.
            Empty => unsafe { hint::unreachable_unchecked() },
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Transforming the contained value
    /////////////////////////////////////////////////////////////////////////

    /// Maps an `Optional<T>` to an `Optional<U>` by applying a function to
    /// the contained value (if [`Full`]), or returns [`Empty`] (if [`Empty`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let maybe_string = Full(String::from("Hello, World!"));
    /// // `map` takes self by value, consuming `maybe_string`
    /// let maybe_len = maybe_string.map(|s| s.len());
    /// assert_eq!(maybe_len, Full(13));
    ///
    /// let x: Optional<&str> = Empty;
    /// assert_eq!(x.map(|s| s.len()), Empty);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Full(x) => Full(f(x)),
            Empty => Empty,
        }
    }

    /// Calls the provided closure with a reference to the contained value
    /// (if [`Full`]), purely for its side effect, and returns the container
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// // prints "got: 4"
    /// let x = Full(4).inspect(|x| println!("got: {x}"));
    /// assert_eq!(x, Full(4));
    ///
    /// // prints nothing
    /// let x: Optional<u32> = Empty.inspect(|x| println!("got: {x}"));
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Full(ref x) = self {
            f(x);
        }

        self
    }

    /// Returns the provided fallback (if [`Empty`]), or applies a function
    /// to the contained value (if [`Full`]).
    ///
    /// Arguments passed to `map_or` are eagerly evaluated; if you are
    /// passing the result of a function call, it is recommended to use
    /// [`map_or_else`], which is lazily evaluated.
    ///
    /// [`map_or_else`]: Optional::map_or_else
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let x = Full("foo");
    /// assert_eq!(x.map_or(42, |v| v.len()), 3);
    ///
    /// let x: Optional<&str> = Empty;
    /// assert_eq!(x.map_or(42, |v| v.len()), 42);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, fallback: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Full(t) => f(t),
            Empty => fallback,
        }
    }

    /// Lazily computes a fallback from a closure (if [`Empty`]), or applies
    /// a different function to the contained value (if [`Full`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let k = 21;
    ///
    /// let x = Full("foo");
    /// assert_eq!(x.map_or_else(|| 2 * k, |v| v.len()), 3);
    ///
    /// let x: Optional<&str> = Empty;
    /// assert_eq!(x.map_or_else(|| 2 * k, |v| v.len()), 42);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, fallback: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Full(t) => f(t),
            Empty => fallback(),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Boolean operations on containers, eager and lazy
    /////////////////////////////////////////////////////////////////////////

    /// Returns [`Empty`] if the container is [`Empty`], otherwise returns
    /// `optb` as-is. A [`Full`] receiver does not force `optb` to be present.
    ///
    /// Arguments passed to `and` are eagerly evaluated; if you are passing
    /// the result of a function call, it is recommended to use [`and_then`],
    /// which is lazily evaluated.
    ///
    /// [`and_then`]: Optional::and_then
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let x = Full(2);
    /// let y: Optional<&str> = Empty;
    /// assert_eq!(x.and(y), Empty);
    ///
    /// let x: Optional<u32> = Empty;
    /// let y = Full("foo");
    /// assert_eq!(x.and(y), Empty);
    ///
    /// let x = Full(2);
    /// let y = Full("foo");
    /// assert_eq!(x.and(y), Full("foo"));
    /// ```
    #[inline]
    pub fn and<U>(self, optb: Optional<U>) -> Optional<U> {
        match self {
            Full(_) => optb,
            Empty => Empty,
        }
    }

    /// Returns [`Empty`] if the container is [`Empty`], otherwise calls `f`
    /// with the contained value and returns the result.
    ///
    /// Some languages call this operation flatmap or monadic bind.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// fn half(x: u32) -> Optional<u32> {
    ///     if x % 2 == 0 { Full(x / 2) } else { Empty }
    /// }
    ///
    /// assert_eq!(Full(8).and_then(half), Full(4));
    /// assert_eq!(Full(3).and_then(half), Empty);
    /// assert_eq!(Empty.and_then(half), Empty);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Full(x) => f(x),
            Empty => Empty,
        }
    }

    /// Returns [`Empty`] if the container is [`Empty`], otherwise calls
    /// `predicate` with the contained value and returns:
    ///
    /// - [`Full(t)`] if `predicate` returns `true` (where `t` is the
    ///   contained value), and
    /// - [`Empty`] if `predicate` returns `false`.
    ///
    /// [`Full(t)`]: Optional::Full
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// fn is_even(n: &i32) -> bool {
    ///     n % 2 == 0
    /// }
    ///
    /// assert_eq!(Empty.filter(is_even), Empty);
    /// assert_eq!(Full(3).filter(is_even), Empty);
    /// assert_eq!(Full(4).filter(is_even), Full(4));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Full(x) = self {
            if predicate(&x) {
                return Full(x);
            }
        }
        Empty
    }

    /// Returns the container if it holds a value, otherwise returns `optb`.
    ///
    /// Arguments passed to `or` are eagerly evaluated; if you are passing
    /// the result of a function call, it is recommended to use [`or_else`],
    /// which is lazily evaluated.
    ///
    /// [`or_else`]: Optional::or_else
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let x = Full(2);
    /// let y = Empty;
    /// assert_eq!(x.or(y), Full(2));
    ///
    /// let x = Empty;
    /// let y = Full(100);
    /// assert_eq!(x.or(y), Full(100));
    ///
    /// let x: Optional<u32> = Empty;
    /// let y = Empty;
    /// assert_eq!(x.or(y), Empty);
    /// ```
    #[inline]
    pub fn or(self, optb: Optional<T>) -> Optional<T> {
        match self {
            Full(x) => Full(x),
            Empty => optb,
        }
    }

    /// Returns the container if it holds a value, otherwise calls `f` and
    /// returns the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// fn nobody() -> Optional<&'static str> { Empty }
    /// fn vikings() -> Optional<&'static str> { Full("vikings") }
    ///
    /// assert_eq!(Full("barbarians").or_else(vikings), Full("barbarians"));
    /// assert_eq!(Empty.or_else(vikings), Full("vikings"));
    /// assert_eq!(Empty.or_else(nobody), Empty);
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            Full(x) => Full(x),
            Empty => f(),
        }
    }

    /// Returns [`Full`] if exactly one of `self`, `optb` holds a value,
    /// otherwise returns [`Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let x = Full(2);
    /// let y: Optional<u32> = Empty;
    /// assert_eq!(x.xor(y), Full(2));
    ///
    /// let x: Optional<u32> = Empty;
    /// let y = Full(2);
    /// assert_eq!(x.xor(y), Full(2));
    ///
    /// let x = Full(2);
    /// let y = Full(2);
    /// assert_eq!(x.xor(y), Empty);
    ///
    /// let x: Optional<u32> = Empty;
    /// let y: Optional<u32> = Empty;
    /// assert_eq!(x.xor(y), Empty);
    /// ```
    #[inline]
    pub fn xor(self, optb: Optional<T>) -> Optional<T> {
        match (self, optb) {
            (Full(a), Empty) => Full(a),
            (Empty, Full(b)) => Full(b),
            _ => Empty,
        }
    }

    /// Returns `true` if the container holds a value equal to `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let x: Optional<u32> = Full(2);
    /// assert_eq!(x.contains(&2), true);
    ///
    /// let x: Optional<u32> = Full(3);
    /// assert_eq!(x.contains(&2), false);
    ///
    /// let x: Optional<u32> = Empty;
    /// assert_eq!(x.contains(&2), false);
    /// ```
    #[must_use]
    #[inline]
    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<T>,
    {
        match self {
            Full(y) => x.eq(y),
            Empty => false,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Entry-like operations to insert a value and return a reference
    /////////////////////////////////////////////////////////////////////////

    /// Inserts `value` into the container, then returns a mutable reference
    /// to it.
    ///
    /// If the container already holds a value, the old value is dropped.
    /// Writes through the returned reference land in the container's own
    /// storage and are visible through the container once the borrow ends.
    ///
    /// See also [`Optional::get_or_insert`], which keeps the existing value
    /// if the container is already [`Full`].
    ///
    /// # Example
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let mut opt: Optional<i32> = Empty;
    /// let val = opt.insert(1);
    /// assert_eq!(*val, 1);
    /// let val = opt.insert(2);
    /// *val = 3;
    /// assert_eq!(opt, Full(3));
    /// ```
    #[must_use = "if you intended to set a value, consider assignment instead"]
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Full(value);

        // SAFETY: the code above just filled the container
        unsafe { self.as_mut().unwrap_unchecked() }
    }

    /// Inserts `value` into the container if it is [`Empty`], then returns
    /// a mutable reference to the contained value.
    ///
    /// See also [`Optional::insert`], which overwrites the value even if the
    /// container is already [`Full`].
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let mut x: Optional<u32> = Empty;
    ///
    /// {
    ///     let y: &mut u32 = x.get_or_insert(5);
    ///     assert_eq!(y, &5);
    ///
    ///     *y = 7;
    /// }
    ///
    /// assert_eq!(x, Full(7));
    /// ```
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        if let Empty = *self {
            *self = Full(value);
        }

        // SAFETY: an `Empty` receiver would have been replaced by a `Full`
        // variant in the code above.
        unsafe { self.as_mut().unwrap_unchecked() }
    }

    /// Inserts the default value of `T` into the container if it is
    /// [`Empty`], then returns a mutable reference to the contained value.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let mut x: Optional<u32> = Empty;
    /// let y = x.get_or_insert_default();
    /// assert_eq!(y, &0);
    /// *y = 7;
    /// assert_eq!(x, Full(7));
    /// ```
    #[inline]
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    /// Inserts a value computed from `f` into the container if it is
    /// [`Empty`], then returns a mutable reference to the contained value.
    ///
    /// `f` is invoked at most once, and only when the container is [`Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let mut x: Optional<u32> = Empty;
    ///
    /// {
    ///     let y: &mut u32 = x.get_or_insert_with(|| 5);
    ///     assert_eq!(y, &5);
    ///
    ///     *y = 7;
    /// }
    ///
    /// assert_eq!(x, Full(7));
    /// ```
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if let Empty = *self {
            *self = Full(f());
        }

        // SAFETY: an `Empty` receiver would have been replaced by a `Full`
        // variant in the code above.
        unsafe { self.as_mut().unwrap_unchecked() }
    }

    /////////////////////////////////////////////////////////////////////////
    // Misc
    /////////////////////////////////////////////////////////////////////////

    /// Takes the value out of the container, leaving [`Empty`] in its place.
    ///
    /// The returned container is an independent snapshot; mutating the
    /// receiver afterwards does not affect it.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let mut x = Full(2);
    /// let y = x.take();
    /// assert_eq!(x, Empty);
    /// assert_eq!(y, Full(2));
    ///
    /// let mut x: Optional<u32> = Empty;
    /// let y = x.take();
    /// assert_eq!(x, Empty);
    /// assert_eq!(y, Empty);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Optional<T> {
        mem::replace(self, Empty)
    }

    /// Replaces the contents of the container with `value`, returning the
    /// old state. The receiver is always [`Full`] afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let mut x = Full(2);
    /// let old = x.replace(5);
    /// assert_eq!(x, Full(5));
    /// assert_eq!(old, Full(2));
    ///
    /// let mut x = Empty;
    /// let old = x.replace(3);
    /// assert_eq!(x, Full(3));
    /// assert_eq!(old, Empty);
    /// ```
    #[inline]
    pub fn replace(&mut self, value: T) -> Optional<T> {
        mem::replace(self, Full(value))
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes exactly one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Empty, Full, Optional};
    ///
    /// let x: Optional<Optional<u32>> = Full(Full(6));
    /// assert_eq!(x.flatten(), Full(6));
    ///
    /// let x: Optional<Optional<u32>> = Full(Empty);
    /// assert_eq!(x.flatten(), Empty);
    ///
    /// let x: Optional<Optional<u32>> = Empty;
    /// assert_eq!(x.flatten(), Empty);
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        match self {
            Full(inner) => inner,
            Empty => Empty,
        }
    }
}

impl<T> Optional<&T> {
    /// Maps an `Optional<&T>` to an `Optional<T>` by copying the contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Full, Optional};
    ///
    /// let x = 12;
    /// let opt_x = Full(&x);
    /// assert_eq!(opt_x.copied(), Full(12));
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub const fn copied(self) -> Optional<T>
    where
        T: Copy,
    {
        match self {
            Full(&v) => Full(v),
            Empty => Empty,
        }
    }

    /// Maps an `Optional<&T>` to an `Optional<T>` by cloning the contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_std::{Full, Optional};
    ///
    /// let x = String::from("hey");
    /// let opt_x = Full(&x);
    /// assert_eq!(opt_x.cloned(), Full(String::from("hey")));
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn cloned(self) -> Optional<T>
    where
        T: Clone,
    {
        match self {
            Full(t) => Full(t.clone()),
            Empty => Empty,
        }
    }
}

impl<T> Clone for Optional<T>
where
    T: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Full(x) => Full(x.clone()),
            Empty => Empty,
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (Full(to), Full(from)) => to.clone_from(from),
            (to, from) => *to = from.clone(),
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Empty
    }
}

impl<T> PartialEq for Optional<T>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Full(a), Full(b)) => a == b,
            (Empty, Empty) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Optional<T> where T: Eq {}

impl<T> fmt::Debug for Optional<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Full(x) => formatter.debug_tuple("Full").field(x).finish(),
            Empty => formatter.write_str("Empty"),
        }
    }
}

impl<T> Serialize for Optional<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_ref() {
            Full(x) => serializer.serialize_some(x),
            Empty => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let r = std::option::Option::<T>::deserialize(deserializer)?;
        Ok(r.into())
    }
}

#[cfg(test)]
mod tests {
    use super::Optional::{Empty, Full};
    use super::*;

    #[test]
    fn presence_predicates_are_complements() {
        let full: Optional<u32> = Full(2);
        assert!(full.is_present());
        assert!(!full.is_absent());

        let empty: Optional<u32> = Empty;
        assert!(!empty.is_present());
        assert!(empty.is_absent());
    }

    #[test]
    fn is_present_and_forwards_value() {
        assert!(Full(2).is_present_and(|x| x > 1));
        assert!(!Full(0).is_present_and(|x| x > 1));
        assert!(!Optional::<u32>::Empty.is_present_and(|x| x > 1));
    }

    #[test]
    fn unwrap_or_identity_laws() {
        assert_eq!(Full(3).unwrap_or(99), 3);
        assert_eq!(Optional::<i32>::Empty.unwrap_or(99), 99);
    }

    #[test]
    fn unwrap_or_else_is_lazy() {
        let mut calls = 0;
        let value = Full(4).unwrap_or_else(|| {
            calls += 1;
            0
        });
        assert_eq!(value, 4);
        assert_eq!(calls, 0);

        let value = Optional::<i32>::Empty.unwrap_or_else(|| {
            calls += 1;
            9
        });
        assert_eq!(value, 9);
        assert_eq!(calls, 1);
    }

    #[test]
    fn unwrap_or_default_uses_zero_value() {
        assert_eq!(Optional::<u32>::Empty.unwrap_or_default(), 0);
        assert_eq!(Full(12u32).unwrap_or_default(), 12);
        assert_eq!(Optional::<String>::Empty.unwrap_or_default(), String::new());
    }

    #[test]
    fn unwrap_reports_recoverable_error() {
        assert_eq!(Full(7).unwrap(), Ok(7));

        let err = Optional::<u32>::Empty.unwrap().unwrap_err();
        assert_eq!(err.message(), "unwrap called on empty Optional");
    }

    #[test]
    fn expect_carries_caller_message() {
        assert_eq!(Full("air").expect("gone"), Ok("air"));

        let err = Optional::<u32>::Empty.expect("id missing").unwrap_err();
        assert_eq!(err.message(), "id missing");
    }

    #[test]
    fn map_preserves_structure() {
        // functor law on both states
        assert_eq!(Full(3).map(|x| x * 2), Full(6));
        assert_eq!(Optional::<i32>::Empty.map(|x| x * 2), Empty);
    }

    #[test]
    fn inspect_is_identity_with_side_effect() {
        let mut seen = 0;
        let x = Full(4).inspect(|v| seen = *v);
        assert_eq!(x, Full(4));
        assert_eq!(seen, 4);

        let mut called = false;
        let x: Optional<u32> = Empty.inspect(|_| called = true);
        assert_eq!(x, Empty);
        assert!(!called);
    }

    #[test]
    fn map_or_and_map_or_else() {
        assert_eq!(Full("foo").map_or(42, |v| v.len()), 3);
        assert_eq!(Optional::<&str>::Empty.map_or(42, |v| v.len()), 42);

        assert_eq!(Full("foo").map_or_else(|| 42, |v| v.len()), 3);
        assert_eq!(Optional::<&str>::Empty.map_or_else(|| 42, |v| v.len()), 42);
    }

    #[test]
    fn and_does_not_force_second_operand() {
        assert_eq!(Full(2).and(Full("foo")), Full("foo"));
        assert_eq!(Full(2).and(Optional::<&str>::Empty), Empty);
        assert_eq!(Optional::<u32>::Empty.and(Full("foo")), Empty);
        assert_eq!(Optional::<u32>::Empty.and(Optional::<&str>::Empty), Empty);
    }

    #[test]
    fn and_then_satisfies_bind_laws() {
        fn half(x: u32) -> Optional<u32> {
            if x % 2 == 0 {
                Full(x / 2)
            } else {
                Empty
            }
        }

        // left identity
        assert_eq!(Full(8).and_then(half), half(8));
        assert_eq!(Full(3).and_then(half), Empty);
        // absorption
        assert_eq!(Empty.and_then(half), Empty);
    }

    #[test]
    fn filter_keeps_matching_values() {
        let is_even = |n: &i32| n % 2 == 0;

        assert_eq!(Optional::<i32>::Empty.filter(is_even), Empty);
        assert_eq!(Full(3).filter(is_even), Empty);
        assert_eq!(Full(4).filter(is_even), Full(4));
    }

    #[test]
    fn or_prefers_first_present() {
        assert_eq!(Full(2).or(Full(100)), Full(2));
        assert_eq!(Full(2).or(Empty), Full(2));
        assert_eq!(Optional::<i32>::Empty.or(Full(100)), Full(100));
        assert_eq!(Optional::<i32>::Empty.or(Empty), Empty);
    }

    #[test]
    fn or_else_is_lazy() {
        let mut calls = 0;
        let x = Full(2).or_else(|| {
            calls += 1;
            Full(100)
        });
        assert_eq!(x, Full(2));
        assert_eq!(calls, 0);

        let x = Optional::<i32>::Empty.or_else(|| {
            calls += 1;
            Full(100)
        });
        assert_eq!(x, Full(100));
        assert_eq!(calls, 1);
    }

    #[test]
    fn xor_requires_exactly_one_present() {
        assert_eq!(Full(1).xor(Optional::<i32>::Empty), Full(1));
        assert_eq!(Optional::<i32>::Empty.xor(Full(2)), Full(2));
        assert_eq!(Full(1).xor(Full(2)), Empty);
        assert_eq!(Optional::<i32>::Empty.xor(Empty), Empty);
    }

    #[test]
    fn flatten_collapses_one_level() {
        assert_eq!(Full(Full(6)).flatten(), Full(6));
        assert_eq!(Full(Optional::<u32>::Empty).flatten(), Empty);
        assert_eq!(Optional::<Optional<u32>>::Empty.flatten(), Empty);
    }

    #[test]
    fn contains_checks_equality() {
        assert!(Full(3).contains(&3));
        assert!(!Full(3).contains(&4));
        assert!(!Optional::<i32>::Empty.contains(&3));
    }

    #[test]
    fn insert_overwrites_and_aliases_storage() {
        let mut x: Optional<i32> = Full(1);
        let alias = x.insert(5);
        *alias += 2;
        assert_eq!(x, Full(7));

        let mut x: Optional<i32> = Empty;
        let alias = x.insert(5);
        *alias += 2;
        assert_eq!(x, Full(7));
    }

    #[test]
    fn get_or_insert_keeps_existing_value() {
        let mut x = Full(1);
        let alias = x.get_or_insert(9);
        assert_eq!(*alias, 1);
        assert_eq!(x, Full(1));

        let mut x: Optional<i32> = Empty;
        let alias = x.get_or_insert(9);
        *alias += 1;
        assert_eq!(x, Full(10));
    }

    #[test]
    fn get_or_insert_default_inserts_zero_value() {
        let mut x: Optional<u32> = Empty;
        assert_eq!(*x.get_or_insert_default(), 0);
        assert_eq!(x, Full(0));

        let mut x = Full(3u32);
        assert_eq!(*x.get_or_insert_default(), 3);
    }

    #[test]
    fn get_or_insert_with_is_lazy() {
        let mut called = false;
        let mut x = Full(2);
        let alias = x.get_or_insert_with(|| {
            called = true;
            10
        });
        assert_eq!(*alias, 2);
        assert!(!called);

        let mut x: Optional<i32> = Empty;
        let alias = x.get_or_insert_with(|| 10);
        assert_eq!(*alias, 10);
        assert_eq!(x, Full(10));
    }

    #[test]
    fn take_resets_receiver_and_returns_snapshot() {
        let mut x = Full(1);
        let taken = x.take();
        assert_eq!(taken, Full(1));
        assert_eq!(x, Empty);

        // later mutation of the receiver does not touch the snapshot
        let _ = x.insert(5);
        assert_eq!(taken, Full(1));

        let mut x: Optional<i32> = Empty;
        assert_eq!(x.take(), Empty);
        assert_eq!(x, Empty);
    }

    #[test]
    fn replace_returns_prior_state() {
        let mut x = Full(1);
        assert_eq!(x.replace(2), Full(1));
        assert_eq!(x, Full(2));

        let mut x: Optional<i32> = Empty;
        assert_eq!(x.replace(3), Empty);
        assert_eq!(x, Full(3));
    }

    #[test]
    fn clone_produces_independent_storage() {
        let mut a = Full(String::from("left"));
        let b = a.clone();
        if let Full(s) = a.as_mut() {
            s.push_str("-mutated");
        }
        assert_eq!(a, Full(String::from("left-mutated")));
        assert_eq!(b, Full(String::from("left")));
    }

    #[test]
    fn copied_and_cloned_through_references() {
        let x = 12;
        assert_eq!(Full(&x).copied(), Full(12));

        let s = String::from("hey");
        assert_eq!(Full(&s).cloned(), Full(String::from("hey")));
        assert_eq!(Optional::<&String>::Empty.cloned(), Empty);
    }

    #[test]
    fn converts_to_and_from_std_option() {
        let full: Optional<u32> = Some(3).into();
        assert_eq!(full, Full(3));
        let empty: Optional<u32> = None.into();
        assert_eq!(empty, Empty);

        let std_full: Option<u32> = Full(3).into();
        assert_eq!(std_full, Some(3));
        let std_empty: Option<u32> = Optional::<u32>::Empty.into();
        assert_eq!(std_empty, None);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Optional::<u32>::default(), Empty);
    }

    #[test]
    fn serde_round_trip() {
        let full: Optional<u32> = serde_json::from_str("3").unwrap();
        assert_eq!(full, Full(3));

        let empty: Optional<u32> = serde_json::from_str("null").unwrap();
        assert_eq!(empty, Empty);

        assert_eq!(serde_json::to_string(&Full(3u32)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&Optional::<u32>::Empty).unwrap(),
            "null"
        );
    }
}
