use crate::{Sequence, SequenceError};

/// Sources that can delete the element most recently returned by `next`.
pub trait Removable: Sequence {
    fn remove(&mut self) -> Result<(), SequenceError>;
}

impl<R: Removable> Removable for &mut R {
    fn remove(&mut self) -> Result<(), SequenceError> {
        (**self).remove()
    }
}
