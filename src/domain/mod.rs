//! Domain Layer
//!
//! The core of session synthesis: pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Requests, repositories, settings records and the session
//! - `value_objects/` - Immutable policy and configuration values
//! - `services/` - Selectors, config layering, transformer chains
//! - `policies/` - Flag-to-policy rules
//! - `ports/` - Interfaces for collaborators (decryption, local managers, events)

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
