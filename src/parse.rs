use crate::maybe::Maybe;
use std::marker::PhantomData;

/// Wraps a try-parse function (fill the out value, report success with a
/// boolean) as a function from source text to `Maybe<T>`. Failure is only
/// ever the boolean channel; a panic inside the wrapped function is not
/// caught.
pub struct Parser<T, F = fn(&str, &mut T) -> bool>(F, PhantomData<T>);

#[inline]
pub fn parser<T: Default, F: Fn(&str, &mut T) -> bool>(parse: F) -> Parser<T, F> {
    Parser::new(parse)
}

impl<T: Default, F: Fn(&str, &mut T) -> bool> Parser<T, F> {
    #[inline]
    pub fn new(parse: F) -> Self {
        Self(parse, PhantomData)
    }

    pub fn parse(&self, source: &str) -> Maybe<T> {
        let mut value = T::default();
        if (self.0)(source, &mut value) {
            Maybe::one(value)
        } else {
            Maybe::NOT
        }
    }
}

impl<T, F: Clone> Clone for Parser<T, F> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}
