//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router wiring.

pub mod dto;
pub mod handlers;
pub mod router;
