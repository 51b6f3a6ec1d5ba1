//! Core types for moneychanger.

pub mod conversion;
pub mod generation;
pub mod message;

pub use conversion::*;
pub use generation::*;
pub use message::*;
