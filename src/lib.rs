//! Payment gateway request composition.
//!
//! Requests are built as nested scope trees ([`domain::ScopedBuilder`], or
//! the typed wrappers in [`application`]); failed requests come back as a
//! [`domain::ValidationErrors`] tree navigated by the same object names.

pub mod application;
pub mod config;
pub mod domain;
pub mod tree_traits;
pub mod util;
