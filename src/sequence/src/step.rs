use derive_more::IsVariant;

/// Outcome of a single compute invocation.
#[derive(Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum Step<T> {
    Yield(T),
    Done,
}

impl<T> Step<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Yield(value) => Some(value),
            Step::Done => None,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Step::Yield(value),
            None => Step::Done,
        }
    }
}
