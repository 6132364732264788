//! Core use-case services.
//!
//! # Responsibility
//! - Turn registry state plus caller input into derived suggestions.
//! - Keep callers decoupled from registry internals.

pub mod program_adjuster;
