//! Artifacts
//!
//! An [`Artifact`] is an [`ArtifactId`] plus free-form string metadata. Two
//! metadata keys carry meaning: [`KEY_ALIAS`] and [`KEY_START_ORDER`].
//!
//! Not synchronized; share across threads behind a lock.

use crate::artifact_id::{ArtifactId, ArtifactIdError};
use crate::config::{AliasConfig, ConfigError};
use crate::error::ErrorKind;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::num::ParseIntError;

/// Metadata key holding comma-separated alias identifiers
pub const KEY_ALIAS: &str = "alias";

/// Metadata key holding the start order of a bundle
pub const KEY_START_ORDER: &str = "start-order";

/// Versioned module with metadata
///
/// # Invariants
/// - `id` is fixed at construction
/// - Equality, hashing and ordering use `id` only
/// - A stored `start-order` written through [`Artifact::set_start_order`] is
///   positive; zero is represented by the key's absence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    id: ArtifactId,
    #[serde(default)]
    metadata: HashMap<String, String>,
}

impl Artifact {
    /// Create artifact with empty metadata
    #[inline]
    #[must_use]
    pub fn new(id: ArtifactId) -> Self {
        Self {
            id,
            metadata: HashMap::new(),
        }
    }

    /// Create artifact from a textual module identifier
    ///
    /// # Errors
    /// Returns error if `mvn_id` is not a well-formed identifier
    pub fn from_mvn_id(mvn_id: &str) -> Result<Self, ArtifactIdError> {
        Ok(Self::new(ArtifactId::from_mvn_id(mvn_id)?))
    }

    /// Artifact identity
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ArtifactId {
        &self.id
    }

    /// Metadata entries
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// Live metadata mapping; edits are visible to later reads
    #[inline]
    pub fn metadata_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.metadata
    }

    /// Alias identifiers declared in the `alias` metadata entry
    ///
    /// Entries are trimmed and entries with at most one `:` get the version
    /// `0.0.0`. Duplicates collapse. With `include_main` the artifact's own id
    /// is added.
    ///
    /// # Errors
    /// Returns [`ArtifactError::InvalidAlias`] if an entry is not a module identifier
    pub fn aliases(&self, include_main: bool) -> Result<HashSet<ArtifactId>, ArtifactError> {
        self.aliases_with(include_main, &AliasConfig::default())
    }

    /// [`Artifact::aliases`] with explicit separator and default version
    ///
    /// # Errors
    /// - [`ArtifactError::InvalidConfig`] if `config` fails [`AliasConfig::validate`]
    /// - [`ArtifactError::InvalidAlias`] if an entry is not a module identifier
    pub fn aliases_with(
        &self,
        include_main: bool,
        config: &AliasConfig,
    ) -> Result<HashSet<ArtifactId>, ArtifactError> {
        config.validate()?;

        let mut ids = HashSet::new();
        if include_main {
            ids.insert(self.id.clone());
        }

        let Some(aliases) = self.metadata.get(KEY_ALIAS) else {
            return Ok(ids);
        };

        for alias in aliases.split(config.separator).map(str::trim) {
            let parsed = if alias.matches(':').count() <= 1 {
                tracing::debug!("Alias {} has no version, using {}", alias, config.default_version);
                ArtifactId::from_mvn_id(&format!("{alias}:{}", config.default_version))
            } else {
                ArtifactId::from_mvn_id(alias)
            };
            let id = parsed.map_err(|source| ArtifactError::InvalidAlias {
                alias: alias.to_string(),
                source,
            })?;
            ids.insert(id);
        }

        Ok(ids)
    }

    /// Start order from metadata, `0` when unset
    ///
    /// # Errors
    /// - [`ArtifactError::InvalidStartOrder`] if the stored value is not an integer
    /// - [`ArtifactError::NegativeStartOrder`] if the stored value is negative
    pub fn start_order(&self) -> Result<i32, ArtifactError> {
        let Some(value) = self.metadata.get(KEY_START_ORDER) else {
            return Ok(0);
        };

        let order: i32 = value
            .parse()
            .map_err(|source| ArtifactError::InvalidStartOrder {
                value: value.clone(),
                source,
            })?;
        if order < 0 {
            tracing::warn!("Artifact {} has negative start order {}", self.id, order);
            return Err(ArtifactError::NegativeStartOrder(order));
        }
        Ok(order)
    }

    /// Store the start order; `0` removes the metadata entry
    ///
    /// # Errors
    /// Returns [`ArtifactError::InvalidArgument`] if `start_order` is negative
    pub fn set_start_order(&mut self, start_order: i32) -> Result<(), ArtifactError> {
        match start_order.cmp(&0) {
            Ordering::Less => Err(ArtifactError::InvalidArgument(format!(
                "start order must be >= 0 but is {start_order}"
            ))),
            Ordering::Equal => {
                self.metadata.remove(KEY_START_ORDER);
                Ok(())
            }
            Ordering::Greater => {
                self.metadata
                    .insert(KEY_START_ORDER.to_string(), start_order.to_string());
                Ok(())
            }
        }
    }

    /// Copy of this artifact under a different id
    ///
    /// The copy owns its own metadata map holding the same entries.
    #[must_use]
    pub fn copy(&self, id: ArtifactId) -> Self {
        tracing::trace!("Copying artifact {} as {}", self.id, id);
        Self {
            id,
            metadata: self.metadata.clone(),
        }
    }
}

impl PartialEq for Artifact {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Artifact {}

impl Hash for Artifact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Ord for Artifact {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Artifact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Artifact {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Artifact [id={}]", self.id.to_mvn_id())
    }
}

/// Errors related to artifact metadata
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// Rejected input to a setter
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Stored start order is not an integer
    #[error("start order '{value}' is not a number")]
    InvalidStartOrder {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Alias entry is not a module identifier
    #[error("invalid alias '{alias}'")]
    InvalidAlias {
        alias: String,
        #[source]
        source: ArtifactIdError,
    },

    /// Alias configuration unusable
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    /// Stored start order is negative
    #[error("start order must be >= 0 but is {0}")]
    NegativeStartOrder(i32),
}

impl ArtifactError {
    /// Category of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::InvalidConfig(_) => ErrorKind::InvalidArgument,
            Self::InvalidStartOrder { .. } | Self::InvalidAlias { .. } => ErrorKind::Format,
            Self::NegativeStartOrder(_) => ErrorKind::InvalidState,
        }
    }
}
