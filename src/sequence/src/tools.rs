use crate::{Sequence, SequenceError};

pub trait SequenceTools: Sequence {
    fn collect_vec(&mut self) -> Result<Vec<Self::Item>, SequenceError> {
        let mut collected = vec![];

        while self.has_next()? {
            collected.push(self.next()?);
        }

        Ok(collected)
    }
}

impl<S: Sequence> SequenceTools for S {}

#[cfg(test)]
mod tests {
    use super::SequenceTools;
    use crate::{Computed, IntoSequence};

    #[test]
    fn collects_until_exhausted() {
        let mut numbers = (0..4).into_sequence();

        assert_eq!(numbers.collect_vec().unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(numbers.collect_vec().unwrap(), vec![]);
    }

    #[test]
    fn surfaces_compute_errors() {
        let mut flaky = Computed::<i32, _>::new(|| Err("oops".into()));

        assert!(flaky.collect_vec().unwrap_err().is_compute());
    }
}
