use crate::generate::{FullGenerate, Generate, IntoGenerate, State};

macro_rules! tuple {
    ($($p:ident, $t:ident),*) => {
        impl<$($t: Generate,)*> Generate for ($($t,)*) {
            type Item = ($($t::Item,)*);

            fn generate(&self, state: &mut State) -> Self::Item {
                let ($($p,)*) = self;
                ($($p.generate(state),)*)
            }
        }

        impl<$($t: FullGenerate,)*> FullGenerate for ($($t,)*) {
            type Item = ($($t::Item,)*);
            type Generate = ($($t::Generate,)*);

            fn generator() -> Self::Generate {
                ($($t::generator(),)*)
            }
        }

        impl<$($t: IntoGenerate,)*> IntoGenerate for ($($t,)*) {
            type Item = ($($t::Item,)*);
            type Generate = ($($t::Generate,)*);

            fn generator(self) -> Self::Generate {
                let ($($p,)*) = self;
                ($($p.generator(),)*)
            }
        }
    };
}

tuple!(p0, T0);
tuple!(p0, T0, p1, T1);
tuple!(p0, T0, p1, T1, p2, T2);
tuple!(p0, T0, p1, T1, p2, T2, p3, T3);
