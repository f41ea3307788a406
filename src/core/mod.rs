//! Engine core: tunables, scaling math, and the facade.

pub mod constants;
pub mod engine;
pub mod scaling;
