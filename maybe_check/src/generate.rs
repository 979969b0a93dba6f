use crate::{collect::Collect, filter::Filter, map::Map, sample::Sample};
use fastrand::Rng;
use std::{iter::FromIterator, ops::Range};

#[derive(Clone, Debug, Default)]
pub struct State {
    pub index: usize,
    pub count: usize,
    pub size: f64,
    pub random: Rng,
}

impl State {
    #[inline]
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count,
            size: 0.,
            random: Rng::new(),
        }
    }
}

pub trait FullGenerate {
    type Item;
    type Generate: Generate<Item = Self::Item>;
    fn generator() -> Self::Generate;
}

pub trait IntoGenerate {
    type Item;
    type Generate: Generate<Item = Self::Item>;
    fn generator(self) -> Self::Generate;
}

pub trait Generate: Sized {
    type Item;

    fn generate(&self, state: &mut State) -> Self::Item;

    fn map<T, F: Fn(Self::Item) -> T>(self, map: F) -> Map<Self, T, F> {
        Map::new(self, map)
    }

    fn filter<F: Fn(&Self::Item) -> bool>(
        self,
        iterations: Option<usize>,
        filter: F,
    ) -> Filter<Self, F> {
        Filter::new(self, filter, iterations.unwrap_or(256))
    }

    fn collect<C: FromIterator<Self::Item>>(self, counts: Range<usize>) -> Collect<Self, C> {
        Collect::new(self, counts)
    }

    fn sample(&self, count: usize) -> Sample<'_, Self> {
        Sample::new(self, State::new(count))
    }
}
