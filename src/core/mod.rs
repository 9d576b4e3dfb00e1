// open-docs - core/mod.rs
//
// Core logic layer: platform classification, path resolution, and the
// per-platform openers.
// Dependencies: standard library, util.
// Must NOT depend on: platform, app. Subprocesses are reached only
// through the `CommandRunner` trait.

pub mod detect;
pub mod model;
pub mod opener;
pub mod path;
pub mod runner;
