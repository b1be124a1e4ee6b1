//! Functional core for profilehub.
//!
//! Pure types, traits and functions shared by the service shell. Nothing in
//! this crate performs I/O; backends live in the `profilehub` crate.

pub mod aggregation;
pub mod cache;
pub mod profile;
pub mod serde_ext;
pub mod storage;
pub mod upstream;
