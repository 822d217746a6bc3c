use crate::{ComputeError, Sequence, SequenceError, Step};

/// Lazy sequence where each element is computed from the one before it.
///
/// The seed is the first element produced; seeding with `None` yields an
/// empty sequence without ever invoking the advance function.
pub struct Chained<T, F> {
    advance: F,
    next_or_end: Option<T>,
    failed: bool,
}

impl<T, F> Chained<T, F>
where
    F: FnMut(&T) -> Result<Step<T>, ComputeError>,
{
    pub fn new(first: Option<T>, advance: F) -> Self {
        Self {
            advance,
            next_or_end: first,
            failed: false,
        }
    }
}

impl<T, F> Sequence for Chained<T, F>
where
    F: FnMut(&T) -> Result<Step<T>, ComputeError>,
{
    type Item = T;

    // Termination is decided by the slot alone; the advance function never
    // runs speculatively.
    fn has_next(&mut self) -> Result<bool, SequenceError> {
        if self.failed {
            return Err(SequenceError::protocol(
                "sequence failed on an earlier call",
            ));
        }

        Ok(self.next_or_end.is_some())
    }

    fn next(&mut self) -> Result<T, SequenceError> {
        if self.failed {
            return Err(SequenceError::protocol(
                "sequence failed on an earlier call",
            ));
        }

        let current = self.next_or_end.take().ok_or(SequenceError::Exhausted)?;

        match (self.advance)(&current) {
            Ok(step) => {
                self.next_or_end = step.into_option();
                Ok(current)
            }
            Err(error) => {
                self.failed = true;
                Err(SequenceError::Compute(error))
            }
        }
    }
}
