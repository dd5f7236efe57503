//! CLI library components for the slab sweep.

pub mod logging;
pub mod pipeline;
pub mod summary;
