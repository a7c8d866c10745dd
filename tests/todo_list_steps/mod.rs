//! Step definitions for to-do list behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
