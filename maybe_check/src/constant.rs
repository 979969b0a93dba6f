use crate::generate::{Generate, State};

#[derive(Clone, Debug, Default)]
pub struct Constant<T>(pub T);

impl<T> From<T> for Constant<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Clone> Generate for Constant<T> {
    type Item = T;

    fn generate(&self, _: &mut State) -> Self::Item {
        self.0.clone()
    }
}
