//! Fantasy Cricket API Library
//!
//! Builds fantasy cricket XIs from a rated player catalog. The core is the
//! roster validator, which decides whether eleven picks form a legal team,
//! and the team service, which validates and stores teams under unique
//! names.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
