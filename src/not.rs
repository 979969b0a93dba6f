use crate::has::Has;
use std::fmt;

/// The type-erased absent value; materializes into `Maybe<T>::NOT` for
/// whatever `T` the use site infers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Not;

impl<T> Has<T> for Not {
    #[inline]
    fn has(&self) -> bool {
        false
    }

    #[inline]
    fn get(self) -> Option<T> {
        None
    }
}

impl fmt::Display for Not {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}
