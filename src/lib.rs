pub mod config;
pub mod error;
pub mod geometry;
pub mod optimizer;
pub mod scorer;
pub mod snapshot;
// cmd and reports are binary modules (declared in main.rs).
