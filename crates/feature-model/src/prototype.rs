//! Prototypes
//!
//! A [`Prototype`] names the feature a derived feature is built from, either
//! by module id or by location, and lists what to strip from it on merge.
//!
//! Not synchronized; share across threads behind a lock.

use crate::artifact_id::ArtifactId;
use crate::error::ErrorKind;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use url::Url;

/// Where the base feature of a prototype comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrototypeSource {
    /// Base feature identified by module id
    Id(ArtifactId),
    /// Base feature identified by location
    Url(Url),
}

impl PrototypeSource {
    /// String form used for ordering: the id's `mvn:` URL, or the location
    #[must_use]
    pub fn sort_key(&self) -> Cow<'_, str> {
        match self {
            Self::Id(id) => Cow::Owned(id.to_mvn_url()),
            Self::Url(url) => Cow::Borrowed(url.as_str()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Id(_) => 0,
            Self::Url(_) => 1,
        }
    }
}

impl Ord for PrototypeSource {
    // Each side orders by its own sort key. Equal keys on different channels
    // put ids first so that the order agrees with `Eq`.
    // Deviation: older prototype ordering took the left-hand url for both
    // sides of a url-vs-url comparison, so every such pair compared equal.
    // That behavior is intentionally not reproduced.
    fn cmp(&self, other: &Self) -> Ordering {
        let key = match (self, other) {
            (Self::Url(a), Self::Url(b)) => a.as_str().cmp(b.as_str()),
            _ => self.sort_key().cmp(&other.sort_key()),
        };
        key
            .then_with(|| self.rank().cmp(&other.rank()))
            .then_with(|| match (self, other) {
                (Self::Id(a), Self::Id(b)) => a.cmp(b),
                (Self::Url(a), Self::Url(b)) => a.cmp(b),
                _ => Ordering::Equal,
            })
    }
}

impl PartialOrd for PrototypeSource {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for PrototypeSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => f.write_str(&id.to_mvn_id()),
            Self::Url(url) => f.write_str(url.as_str()),
        }
    }
}

/// Blueprint feature reference plus removals
///
/// # Invariants
/// - Exactly one of id or url identifies the base feature
/// - Removal collections keep insertion order and duplicates
/// - Equality, hashing and ordering use the identity only
#[derive(Debug)]
pub struct Prototype {
    source: PrototypeSource,
    configuration_removals: Vec<String>,
    bundle_removals: Vec<ArtifactId>,
    framework_properties_removals: Vec<String>,
    extension_removals: Vec<String>,
    artifact_extension_removals: HashMap<String, Vec<ArtifactId>>,
}

impl Prototype {
    /// Create prototype with empty removals
    #[must_use]
    pub fn new(source: PrototypeSource) -> Self {
        Self {
            source,
            configuration_removals: Vec::new(),
            bundle_removals: Vec::new(),
            framework_properties_removals: Vec::new(),
            extension_removals: Vec::new(),
            artifact_extension_removals: HashMap::new(),
        }
    }

    /// Prototype of the feature with the given id
    #[inline]
    #[must_use]
    pub fn with_id(id: ArtifactId) -> Self {
        Self::new(PrototypeSource::Id(id))
    }

    /// Prototype of the feature at the given location
    #[inline]
    #[must_use]
    pub fn with_url(url: Url) -> Self {
        Self::new(PrototypeSource::Url(url))
    }

    /// Build from separately collected id and location
    ///
    /// # Errors
    /// Returns [`PrototypeError::InvalidArgument`] unless exactly one is given
    pub fn from_parts(id: Option<ArtifactId>, url: Option<Url>) -> Result<Self, PrototypeError> {
        match (id, url) {
            (Some(id), None) => Ok(Self::with_id(id)),
            (None, Some(url)) => Ok(Self::with_url(url)),
            (Some(_), Some(_)) => Err(PrototypeError::InvalidArgument(
                "prototype takes an id or a url, not both".to_string(),
            )),
            (None, None) => Err(PrototypeError::InvalidArgument(
                "prototype requires an id or a url".to_string(),
            )),
        }
    }

    /// Identity of the base feature
    #[inline]
    #[must_use]
    pub fn source(&self) -> &PrototypeSource {
        &self.source
    }

    /// Module id, if identified by id
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<&ArtifactId> {
        match &self.source {
            PrototypeSource::Id(id) => Some(id),
            PrototypeSource::Url(_) => None,
        }
    }

    /// Location, if identified by url
    #[inline]
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        match &self.source {
            PrototypeSource::Url(url) => Some(url),
            PrototypeSource::Id(_) => None,
        }
    }

    /// Configuration PIDs to drop, in application order
    #[inline]
    #[must_use]
    pub fn configuration_removals(&self) -> &[String] {
        &self.configuration_removals
    }

    /// Live list of configuration removals
    #[inline]
    pub fn configuration_removals_mut(&mut self) -> &mut Vec<String> {
        &mut self.configuration_removals
    }

    /// Bundles to drop
    #[inline]
    #[must_use]
    pub fn bundle_removals(&self) -> &[ArtifactId] {
        &self.bundle_removals
    }

    /// Live list of bundle removals
    #[inline]
    pub fn bundle_removals_mut(&mut self) -> &mut Vec<ArtifactId> {
        &mut self.bundle_removals
    }

    /// Framework property names to drop
    #[inline]
    #[must_use]
    pub fn framework_properties_removals(&self) -> &[String] {
        &self.framework_properties_removals
    }

    /// Live list of framework property removals
    #[inline]
    pub fn framework_properties_removals_mut(&mut self) -> &mut Vec<String> {
        &mut self.framework_properties_removals
    }

    /// Whole extensions to drop
    #[inline]
    #[must_use]
    pub fn extension_removals(&self) -> &[String] {
        &self.extension_removals
    }

    /// Live list of extension removals
    #[inline]
    pub fn extension_removals_mut(&mut self) -> &mut Vec<String> {
        &mut self.extension_removals
    }

    /// Artifacts to drop from within named extensions
    #[inline]
    #[must_use]
    pub fn artifact_extension_removals(&self) -> &HashMap<String, Vec<ArtifactId>> {
        &self.artifact_extension_removals
    }

    /// Live map of per-extension artifact removals
    #[inline]
    pub fn artifact_extension_removals_mut(&mut self) -> &mut HashMap<String, Vec<ArtifactId>> {
        &mut self.artifact_extension_removals
    }

    /// Whether any removal is recorded
    #[must_use]
    pub fn has_removals(&self) -> bool {
        !self.configuration_removals.is_empty()
            || !self.bundle_removals.is_empty()
            || !self.framework_properties_removals.is_empty()
            || !self.extension_removals.is_empty()
            || self.artifact_extension_removals.values().any(|v| !v.is_empty())
    }
}

/// NOTE: cloning keeps the identity but starts with EMPTY removal collections.
/// A clone is a fresh prototype of the same base feature, ready for its own
/// removals; it is not a deep copy.
impl Clone for Prototype {
    fn clone(&self) -> Self {
        tracing::trace!("Cloning prototype {} without removals", self.source);
        Self::new(self.source.clone())
    }
}

impl PartialEq for Prototype {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Prototype {}

impl Hash for Prototype {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl Ord for Prototype {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source.cmp(&other.source)
    }
}

impl PartialOrd for Prototype {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Prototype [id={}]", self.source)
    }
}

/// Errors related to prototype construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrototypeError {
    /// Identity channels missing or both present
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PrototypeError {
    /// Category of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}
