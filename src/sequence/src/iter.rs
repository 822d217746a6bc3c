use crate::SequenceError;

/// Forward-only consuming surface for lazily computed sequences.
pub trait Sequence {
    type Item;

    /// Never consumes an element; computes ahead at most one.
    fn has_next(&mut self) -> Result<bool, SequenceError>;

    fn next(&mut self) -> Result<Self::Item, SequenceError>;
}

impl<S: Sequence> Sequence for &mut S {
    type Item = S::Item;

    fn has_next(&mut self) -> Result<bool, SequenceError> {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        (**self).next()
    }
}
