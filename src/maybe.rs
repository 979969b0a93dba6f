use crate::{has::Has, iterate::Iter, not::Not};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Maybe<T>(pub(crate) Option<T>);

impl<T> Maybe<T> {
    pub const NOT: Self = Self(None);

    #[inline]
    pub fn one(value: T) -> Self {
        Self(Some(value))
    }

    #[inline]
    pub fn when(condition: bool, value: T) -> Self {
        if condition {
            Self(Some(value))
        } else {
            Self::NOT
        }
    }

    #[inline]
    pub fn when_with<F: FnOnce() -> T>(condition: bool, value: F) -> Self {
        if condition {
            Self(Some(value()))
        } else {
            Self::NOT
        }
    }

    #[inline]
    pub fn has(&self) -> bool {
        self.0.is_some()
    }

    #[inline]
    pub fn get(self) -> Option<T> {
        self.0
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, map: F) -> Maybe<U> {
        match self.0 {
            Some(value) => Maybe(Some(map(value))),
            None => Maybe::NOT,
        }
    }

    pub fn filter<F: FnOnce(&T) -> bool>(self, filter: F) -> Self {
        match self.0 {
            Some(value) => {
                if filter(&value) {
                    Self(Some(value))
                } else {
                    Self::NOT
                }
            }
            None => Self::NOT,
        }
    }

    pub fn bind<U, M: Has<U>, F: FnOnce(T) -> M>(self, bind: F) -> Maybe<U> {
        match self.0 {
            Some(value) => Maybe(bind(value).get()),
            None => Maybe::NOT,
        }
    }

    pub fn join<U, R, M: Has<U>, O: FnOnce(&T) -> M, C: FnOnce(T, U) -> R>(
        self,
        other: O,
        combine: C,
    ) -> Maybe<R> {
        match self.0 {
            Some(value) => match other(&value).get() {
                Some(second) => Maybe(Some(combine(value, second))),
                None => Maybe::NOT,
            },
            None => Maybe::NOT,
        }
    }

    pub fn each<F: FnOnce(T)>(self, each: F) {
        if let Some(value) = self.0 {
            each(value);
        }
    }

    #[inline]
    pub fn or(self, fallback: T) -> T {
        match self.0 {
            Some(value) => value,
            None => fallback,
        }
    }

    pub fn or_else<F: FnOnce() -> T>(self, fallback: F) -> T {
        match self.0 {
            Some(value) => value,
            None => fallback(),
        }
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.0.as_ref())
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::NOT
    }
}

// A blanket 'From<T>' would collide with 'From<Not>' at 'T = Not', so the
// raw value side is a named constructor ('one') and the trait seam belongs
// to the marker, which is the side that needs inference.
impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Not> for Maybe<T> {
    #[inline]
    fn from(_: Not) -> Self {
        Self::NOT
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.0
    }
}

impl<T> Has<T> for Maybe<T> {
    #[inline]
    fn has(&self) -> bool {
        self.0.is_some()
    }

    #[inline]
    fn get(self) -> Option<T> {
        self.0
    }
}

// Presence participates in the hash so that all absent containers agree on
// one value and no absent container hashes like a present one by accident.
impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.has().hash(state);
        if let Some(value) = &self.0 {
            value.hash(state);
        }
    }
}

impl<T: PartialEq> PartialEq<T> for Maybe<T> {
    fn eq(&self, other: &T) -> bool {
        match &self.0 {
            Some(value) => value == other,
            None => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(formatter),
            None => Ok(()),
        }
    }
}

// 'impl<T> PartialEq<Maybe<T>> for T' is rejected by coherence, so the bare
// side of the comparison is spelled out per type.
macro_rules! compare {
    ($($t:ty),*$(,)?) => {$(
        impl PartialEq<Maybe<$t>> for $t {
            #[inline]
            fn eq(&self, other: &Maybe<$t>) -> bool {
                other == self
            }
        }
    )*};
}

compare!(
    bool, char, f32, f64, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, String,
);

impl PartialEq<Maybe<String>> for str {
    #[inline]
    fn eq(&self, other: &Maybe<String>) -> bool {
        match &other.0 {
            Some(value) => value == self,
            None => false,
        }
    }
}
