//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::Catalog;
use crate::core::state::App;

/// The compiled-in sample catalog.
pub fn sample_catalog() -> Catalog {
    Catalog::sample().expect("sample catalog must parse")
}

/// Creates a test App on the landing page with the sample catalog.
pub fn test_app() -> App {
    App::new(sample_catalog())
}
