pub mod align;
pub mod api;
pub mod config;
pub mod error;
pub mod loader;
// cmd and reports are binary modules (in main.rs or distinct files).
// They only render AnalysisReport values and never feed back into the engine.
