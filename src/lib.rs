pub mod attempts;
pub mod canonical;
pub mod checker;
pub mod config;
pub mod error;
pub mod geometry;
pub mod recorder;
pub mod session;
pub mod shapes;
pub mod simulate;
// cmd and reports belong to the binary (main.rs).
