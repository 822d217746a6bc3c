use std::{error::Error, fmt::Display};

/// Whatever a compute function chooses to fail with.
pub type ComputeError = Box<dyn Error + Send + Sync>;

#[derive(Debug)]
pub enum SequenceError {
    Exhausted,
    Protocol(String),
    Compute(ComputeError),
}

impl SequenceError {
    pub fn protocol(message: impl ToString) -> Self {
        Self::Protocol(message.to_string())
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }

    pub fn is_compute(&self) -> bool {
        matches!(self, Self::Compute(_))
    }
}

impl Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "sequence exhausted"),
            Self::Protocol(message) => write!(f, "protocol violation: {}", message),
            Self::Compute(error) => write!(f, "compute function failed: {}", error),
        }
    }
}

impl Error for SequenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Compute(error) => Some(&**error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceError;
    use std::error::Error;

    #[test]
    fn keeps_the_compute_cause() {
        let error = SequenceError::Compute("disk unplugged".into());
        assert_eq!(error.to_string(), "compute function failed: disk unplugged");
        assert!(error.source().is_some());
    }

    #[test]
    fn exhaustion_has_no_cause() {
        let error = SequenceError::Exhausted;
        assert_eq!(error.to_string(), "sequence exhausted");
        assert!(error.source().is_none());
    }
}
