#![no_std]

//! NDMatrix Core - Coordinate and Storage Abstractions
//!
//! This crate provides the coordinate key type, the backing-store capability
//! trait, and the error type shared by sparse N-dimensional matrix
//! implementations

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

pub mod coord;
pub mod error;
pub mod store;

pub use coord::*;
pub use error::*;
pub use store::*;
