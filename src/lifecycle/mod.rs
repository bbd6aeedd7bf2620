//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure around the containers:
//!
//! - **Lifecycle management**: Loading the menu at startup and saving it at shutdown
//! - **Orchestration**: Moving orders from the pending queue into the history
//! - **Configuration**: File locations and capacities
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`OrderSystem`] - Owns the catalog, the pending queue and the completed history
//! - [`SystemConfig`] - File locations, overridable from the environment
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod error;
pub mod order_system;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use order_system::*;
pub use self::tracing::*;
