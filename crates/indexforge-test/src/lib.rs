//! Shared test fixtures for IndexForge crates.
//!
//! This crate provides index sets and construction rules for testing.
//!
//! - [`sets`] - Index sets used across scenarios
//! - [`rules`] - Construction rules that count, skip, or fail
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! indexforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use indexforge_test::rules::{skip_index, CallCounter};
//! use indexforge_test::sets::one_two_three;
//! ```

pub mod rules;
pub mod sets;

pub use rules::CallCounter;
pub use sets::{one_two_three, products_by_period};
