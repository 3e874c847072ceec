pub mod blend;
pub mod catalog;
pub mod displacement;
pub mod mode;
pub mod sampler;
pub mod summary;
