// open-docs - app/mod.rs
//
// Application layer: launch orchestration and outcome reporting.
// Dependencies: core, platform.

pub mod launcher;
