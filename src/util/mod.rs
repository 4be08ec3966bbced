//! Browser-glue helpers shared across pages and state.

pub mod token;
