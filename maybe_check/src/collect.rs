use crate::{
    generate::{FullGenerate, Generate, State},
    primitive::Full,
};
use std::{iter::FromIterator, marker::PhantomData, ops::Range};

#[derive(Debug)]
pub struct Collect<G, C>(G, Range<usize>, PhantomData<C>);

impl<G: Clone, C> Clone for Collect<G, C> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), self.1.clone(), PhantomData)
    }
}

impl<G: Generate, C: FromIterator<G::Item>> Collect<G, C> {
    #[inline]
    pub fn new(generate: G, counts: Range<usize>) -> Self {
        Self(generate, counts, PhantomData)
    }
}

impl<G: Generate, C: FromIterator<G::Item>> Generate for Collect<G, C> {
    type Item = C;

    fn generate(&self, state: &mut State) -> Self::Item {
        let count = state.random.usize(self.1.clone());
        Iterator::map(0..count, |_| self.0.generate(state)).collect()
    }
}

impl FullGenerate for String {
    type Item = String;
    type Generate = Collect<Full<char>, String>;
    fn generator() -> Self::Generate {
        Full::new().collect(0..65)
    }
}

impl<G: FullGenerate> FullGenerate for Vec<G> {
    type Item = Vec<G::Item>;
    type Generate = Collect<G::Generate, Vec<G::Item>>;
    fn generator() -> Self::Generate {
        G::generator().collect(0..65)
    }
}
