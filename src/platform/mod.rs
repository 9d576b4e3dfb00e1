// open-docs - platform/mod.rs
//
// Platform abstraction layer: host probing, real subprocesses, config
// directories.
// Dependencies: standard library, directories crate, core.
// Must NOT depend on: app.

pub mod config;
pub mod probe;
pub mod process;
