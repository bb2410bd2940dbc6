//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions at the stub's two boundaries.
//!
//! - **Driving Port (Inbound)**: `Chaincode`, implemented by business logic
//! - **Driven Port (Outbound)**: `Handler`, implemented by the peer connection
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
