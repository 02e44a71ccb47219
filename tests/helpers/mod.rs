//! Shared test helpers.

pub mod index_helpers;
pub mod outline_assertions;
