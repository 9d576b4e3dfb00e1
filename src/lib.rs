// open-docs - lib.rs
//
// Library entry point, exposing every module for integration testing.
// The binary in `main.rs` only parses arguments and wires these together.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
