//! Process-wide configuration: the ignore-pattern set used to demote
//! recurring known-noise errors. Read-only after startup.

pub mod load;
pub mod model;

pub use model::PrettyConfig;
