//! Feature Model
//!
//! Artifact and prototype records for feature packaging metadata.
//!
//! # Core Concepts
//!
//! - [`ArtifactId`]: Versioned module identity (`group:artifact[:type[:classifier]]:version`)
//! - [`Artifact`]: Module identity plus string metadata, with alias and start order accessors
//! - [`Prototype`]: Base feature reference (by id or location) plus removal lists
//! - [`AliasConfig`]: How alias metadata is split and completed
//!
//! # Example
//!
//! ```rust
//! use feature_model::{Artifact, ArtifactId, KEY_ALIAS};
//!
//! let mut artifact = Artifact::from_mvn_id("org.example:core:1.0").unwrap();
//! artifact.metadata_mut().insert(KEY_ALIAS.to_string(), "org.example:legacy".to_string());
//! artifact.set_start_order(20).unwrap();
//!
//! let aliases = artifact.aliases(false).unwrap();
//! assert!(aliases.contains(&ArtifactId::from_mvn_id("org.example:legacy:0.0.0").unwrap()));
//! assert_eq!(artifact.start_order().unwrap(), 20);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod artifact;
mod artifact_id;
mod config;
mod error;
mod prototype;

// Re-exports
pub use artifact::{Artifact, ArtifactError, KEY_ALIAS, KEY_START_ORDER};
pub use artifact_id::{ArtifactId, ArtifactIdError, DEFAULT_TYPE};
pub use config::{AliasConfig, ConfigError, DEFAULT_ALIAS_SEPARATOR, DEFAULT_ALIAS_VERSION};
pub use error::ErrorKind;
pub use prototype::{Prototype, PrototypeError, PrototypeSource};

/// Re-exported location type used by [`Prototype::with_url`]
pub use url::Url;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
