//! Coefficient-table store for geolca.
//!
//! Reads the per-archetype table files produced by the external data
//! preparation step and hands the engine validated, immutable
//! [`ArchetypeData`](geolca_core::ArchetypeData):
//! - [`StoreConfig`] - TOML catalog of servable archetypes and the data
//!   directory
//! - [`CoefficientStore`] - file loading, decoding, and shape validation
//!
//! The store is read-only by design. Producing the backing files (parsing
//! the published supplementary material) is an external collaborator's job;
//! a missing archetype surfaces as a typed error, never as an internal
//! retry.

mod config;
mod format;
mod store;


pub use config::{ConfigError, StoreConfig};
pub use store::CoefficientStore;
