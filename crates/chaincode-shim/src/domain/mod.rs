//! # Domain Layer (Inner Hexagon)
//!
//! Pure values and functions used by the stub.
//! NO I/O, NO async.
//!
//! - `value_objects`: transaction id and the immutable argument snapshot
//! - `entities`: the `Response` a chaincode returns
//! - `services`: composite-key derivation

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
