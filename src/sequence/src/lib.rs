mod chained;
mod computed;
mod error;
mod from_vec;
mod into_sequence;
mod iter;
mod removable;
mod state;
mod step;
mod tools;

pub use self::{
    chained::Chained,
    computed::Computed,
    error::{ComputeError, SequenceError},
    from_vec::FromVec,
    into_sequence::IntoSequence,
    iter::Sequence,
    removable::Removable,
    step::Step,
    tools::SequenceTools,
};
