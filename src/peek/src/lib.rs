mod into_peekable;
mod peeker;

pub use self::{into_peekable::IntoPeekable, peeker::Peeker};

use sequence::{Sequence, SequenceError};

pub trait Peek: Sequence {
    /// Returns the next element without consuming it.
    fn peek(&mut self) -> Result<&Self::Item, SequenceError>;
}

impl<P: Peek> Peek for &mut P {
    fn peek(&mut self) -> Result<&Self::Item, SequenceError> {
        (**self).peek()
    }
}
