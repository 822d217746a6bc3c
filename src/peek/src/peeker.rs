use crate::Peek;
use derive_more::Deref;
use sequence::{Removable, Sequence, SequenceError};

/// Single-slot lookahead over any sequence.
#[derive(Deref)]
pub struct Peeker<S: Sequence> {
    #[deref]
    source: S,

    slot: Option<S::Item>,
}

impl<S: Sequence> Peeker<S> {
    pub fn new(source: S) -> Self {
        Self { source, slot: None }
    }
}

impl<S: Sequence> Sequence for Peeker<S> {
    type Item = S::Item;

    fn has_next(&mut self) -> Result<bool, SequenceError> {
        if self.slot.is_some() {
            return Ok(true);
        }

        self.source.has_next()
    }

    fn next(&mut self) -> Result<S::Item, SequenceError> {
        match self.slot.take() {
            Some(pending) => Ok(pending),
            None => self.source.next(),
        }
    }
}

impl<S: Sequence> Peek for Peeker<S> {
    fn peek(&mut self) -> Result<&S::Item, SequenceError> {
        if self.slot.is_none() {
            self.slot = Some(self.source.next()?);
        }

        Ok(self.slot.as_ref().unwrap())
    }
}

impl<S: Removable> Removable for Peeker<S> {
    // The source's removal cursor stops matching the consumer's idea of
    // "current" while a peeked element is pending.
    fn remove(&mut self) -> Result<(), SequenceError> {
        if self.slot.is_some() {
            return Err(SequenceError::protocol(
                "cannot remove while a peeked element is pending",
            ));
        }

        self.source.remove()
    }
}
