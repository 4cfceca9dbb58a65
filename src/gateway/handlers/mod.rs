//! Gateway HTTP handlers

pub mod health;
pub mod order;

pub use health::*;
pub use order::*;
