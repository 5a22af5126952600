/// Line classification for the streaming prettifier.
///
/// This module turns raw input lines into classified records without ever
/// consuming more than local context.
///
/// # Architecture
///
/// - `model.rs`: the `ParsedRecord` variants
/// - `pattern.rs`: line patterns for zap records and stack traces, compiled once
/// - `classify.rs`: the per-line classifier holding the continuation flag
///
/// # Safety Guarantees
///
/// Classification never fails: anything that does not decode cleanly comes
/// back as `Malformed` or `Plain` with the original text intact, so the
/// renderer can always reproduce the input verbatim.
pub mod classify;
pub mod model;
pub mod pattern;

// Re-export commonly used types
pub use classify::Classifier;
pub use model::ParsedRecord;
