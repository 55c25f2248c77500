//! Processing stages between the raw dataset and the presentation layer:
//! validity filtering, region normalization, family classification, and the
//! query engine everything downstream reads through.

pub mod classify;
pub mod diagnostics;
pub mod normalize;
pub mod quality_gate;
pub mod query;
