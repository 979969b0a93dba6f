use crate::generate::{Generate, State};

#[derive(Clone, Debug)]
pub struct Filter<G, F = fn(&<G as Generate>::Item) -> bool>(G, F, usize);

impl<G: Generate, F: Fn(&G::Item) -> bool> Filter<G, F> {
    #[inline]
    pub fn new(generate: G, filter: F, iterations: usize) -> Self {
        Self(generate, filter, iterations)
    }
}

impl<G: Generate, F: Fn(&G::Item) -> bool> Generate for Filter<G, F> {
    type Item = Option<G::Item>;

    fn generate(&self, state: &mut State) -> Self::Item {
        for _ in 0..self.2 {
            let item = self.0.generate(state);
            if (self.1)(&item) {
                return Some(item);
            }
        }
        None
    }
}
