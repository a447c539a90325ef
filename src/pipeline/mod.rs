// Pipelines — the inspect channel and the slot workflows built on it.

pub mod inspect;
pub mod workflow;
