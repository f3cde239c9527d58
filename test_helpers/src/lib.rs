//! Test helpers shared across crates.
//!
//! [`env`] serialises process-environment mutation and restores every
//! touched variable when the owning guard drops. [`home`] builds on it to
//! give a test a throwaway home directory with the platform configuration
//! variables cleared.

pub mod env;
pub mod home;
