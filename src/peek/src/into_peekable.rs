use crate::Peeker;
use sequence::Sequence;

pub trait IntoPeekable<T>: Sequence<Item = T> + Sized {
    fn into_peekable(self) -> Peeker<Self>;
}

impl<T, S: Sequence<Item = T>> IntoPeekable<T> for S {
    fn into_peekable(self) -> Peeker<S> {
        Peeker::new(self)
    }
}
