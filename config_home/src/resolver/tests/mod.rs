//! Resolver behaviour against scripted platforms.
//!
//! Covers per-platform resolution rules, the override variable, privilege
//! elevation, application-name validation and the idempotent creation
//! helpers.

mod construction;
mod filesystem;
mod fixtures;
mod overrides;
