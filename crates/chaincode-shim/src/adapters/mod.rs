//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the ports.
//!
//! The production handler speaks the peer protocol and lives with the
//! execution environment; this crate ships the in-memory one.

pub mod memory_handler;

pub use memory_handler::*;
