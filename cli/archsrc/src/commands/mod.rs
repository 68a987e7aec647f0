//! CLI command implementations.

pub mod convert;
pub mod microarch;
pub mod providers;
pub mod show;
