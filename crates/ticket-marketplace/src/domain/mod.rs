//! # Domain Layer (Inner Hexagon)
//!
//! Pure business logic of the marketplace.
//! NO I/O, NO async, NO external collaborators.
//!
//! Adapters and the application service depend on this module, never the
//! other way around.

pub mod access;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod pricing;
pub mod registry;
pub mod services;
pub mod ticket_id;
pub mod value_objects;

pub use access::*;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use registry::*;
pub use services::*;
pub use ticket_id::*;
pub use value_objects::*;
