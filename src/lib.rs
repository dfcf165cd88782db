//! Interactive book inventory backed by a JSON catalog file.

pub mod application;
pub mod domain;
pub mod infra;
pub mod interface;
