// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod tokenize;

pub use filters::{filter_applications, timeframe_cutoff};
pub use matcher::Scorer;
pub use scoring::{calculate_matching_score, TextField};
pub use tokenize::normalize;
