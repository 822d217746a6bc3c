use crate::{ComputeError, Sequence, SequenceError, Step, state::State};

/// Lazy sequence driven by a zero-argument compute function.
///
/// The compute function runs at most once per produced element, no matter
/// how many `has_next` calls happen in between.
pub struct Computed<T, F> {
    compute: F,
    state: State<T>,
}

impl<T, F> Computed<T, F>
where
    F: FnMut() -> Result<Step<T>, ComputeError>,
{
    pub fn new(compute: F) -> Self {
        Self {
            compute,
            state: State::NotReady,
        }
    }
}

impl<T, F> Sequence for Computed<T, F>
where
    F: FnMut() -> Result<Step<T>, ComputeError>,
{
    type Item = T;

    fn has_next(&mut self) -> Result<bool, SequenceError> {
        match self.state {
            State::Ready(_) => Ok(true),
            State::Done => Ok(false),
            State::Failed => Err(SequenceError::protocol(
                "sequence failed on an earlier call",
            )),
            State::NotReady => match (self.compute)() {
                Ok(Step::Yield(value)) => {
                    self.state = State::Ready(value);
                    Ok(true)
                }
                Ok(Step::Done) => {
                    self.state = State::Done;
                    Ok(false)
                }
                Err(error) => {
                    self.state = State::Failed;
                    Err(SequenceError::Compute(error))
                }
            },
        }
    }

    fn next(&mut self) -> Result<T, SequenceError> {
        if !self.has_next()? {
            return Err(SequenceError::Exhausted);
        }

        Ok(self.state.take_ready())
    }
}
