use crate::{Computed, Sequence, Step};

pub trait IntoSequence<T> {
    fn into_sequence(self) -> impl Sequence<Item = T>;
}

impl<T, I: Iterator<Item = T>> IntoSequence<T> for I {
    fn into_sequence(self) -> impl Sequence<Item = T> {
        let mut iterator = self.fuse();

        Computed::new(move || Ok(Step::from(iterator.next())))
    }
}
