use crate::generate::{Generate, State};
use std::marker::PhantomData;

#[derive(Debug)]
pub struct Map<G, T, F = fn(<G as Generate>::Item) -> T>(G, F, PhantomData<T>);

impl<G: Clone, T, F: Clone> Clone for Map<G, T, F> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), self.1.clone(), PhantomData)
    }
}

impl<G: Generate, T, F: Fn(G::Item) -> T> Map<G, T, F> {
    #[inline]
    pub fn new(generate: G, map: F) -> Self {
        Self(generate, map, PhantomData)
    }
}

impl<G: Generate, T, F: Fn(G::Item) -> T> Generate for Map<G, T, F> {
    type Item = T;

    fn generate(&self, state: &mut State) -> Self::Item {
        (self.1)(self.0.generate(state))
    }
}
