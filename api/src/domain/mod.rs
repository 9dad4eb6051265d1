//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models served to the site
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
