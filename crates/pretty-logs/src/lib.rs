// Module structure for the pretty-logs stream prettifier.

// Core pipeline
pub mod parser;
pub mod render;
pub mod stream;

// Configuration
pub mod conf;
