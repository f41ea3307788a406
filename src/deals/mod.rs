//! Deal offers: generation from the catalog, and resolution math.

pub mod generation;
pub mod resolution;
pub mod types;
