//! Module identifiers
//!
//! Provides [`ArtifactId`], the versioned module identity used by artifacts,
//! aliases, bundle removals and id-based prototypes.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Packaging type assumed when an identifier does not name one
pub const DEFAULT_TYPE: &str = "jar";

/// Versioned module identity
///
/// Textual form ("mvn id"):
/// - `group:artifact:version`
/// - `group:artifact:type:version`
/// - `group:artifact:type:classifier:version`
///
/// The type defaults to [`DEFAULT_TYPE`] and is omitted again when rendering
/// if there is no classifier.
///
/// # Example
/// ```
/// use feature_model::ArtifactId;
///
/// let id: ArtifactId = "org.example:core:1.2.0".parse().unwrap();
/// assert_eq!(id.group_id(), "org.example");
/// assert_eq!(id.to_mvn_url(), "mvn:org.example/core/1.2.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId {
    group_id: String,
    artifact_id: String,
    version: String,
    r#type: String,
    classifier: Option<String>,
}

impl ArtifactId {
    /// Create identifier from its parts
    ///
    /// A `None` type means [`DEFAULT_TYPE`].
    ///
    /// # Errors
    /// Returns error if any given part is empty after trimming
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        r#type: Option<String>,
        classifier: Option<String>,
    ) -> Result<Self, ArtifactIdError> {
        let group_id = non_empty(group_id.into(), "group")?;
        let artifact_id = non_empty(artifact_id.into(), "artifact")?;
        let version = non_empty(version.into(), "version")?;
        let r#type = match r#type {
            Some(t) => non_empty(t, "type")?,
            None => DEFAULT_TYPE.to_string(),
        };
        let classifier = classifier.map(|c| non_empty(c, "classifier")).transpose()?;

        Ok(Self {
            group_id,
            artifact_id,
            version,
            r#type,
            classifier,
        })
    }

    /// Parse from the `group:artifact[:type[:classifier]]:version` form
    ///
    /// # Errors
    /// Returns error if the segment count is not 3, 4 or 5, or a segment is empty
    pub fn from_mvn_id(input: &str) -> Result<Self, ArtifactIdError> {
        let parts: Vec<&str> = input.split(':').map(str::trim).collect();
        let (group, artifact, r#type, classifier, version) = match parts.as_slice() {
            [g, a, v] => (*g, *a, None, None, *v),
            [g, a, t, v] => (*g, *a, Some(*t), None, *v),
            [g, a, t, c, v] => (*g, *a, Some(*t), Some(*c), *v),
            _ => {
                return Err(ArtifactIdError::InvalidFormat {
                    input: input.to_string(),
                    reason: format!("expected 3 to 5 ':'-separated segments, got {}", parts.len()),
                })
            }
        };

        Self::new(
            group,
            artifact,
            version,
            r#type.map(str::to_string),
            classifier.map(str::to_string),
        )
        .map_err(|e| ArtifactIdError::InvalidFormat {
            input: input.to_string(),
            reason: e.to_string(),
        })
    }

    /// Group segment
    #[inline]
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Artifact segment
    #[inline]
    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Version segment
    #[inline]
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Packaging type (defaults to `jar`)
    #[inline]
    #[must_use]
    pub fn r#type(&self) -> &str {
        &self.r#type
    }

    /// Optional classifier
    #[inline]
    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    /// Same identifier with a different version
    ///
    /// # Errors
    /// Returns error if `version` is empty
    pub fn with_version(&self, version: impl Into<String>) -> Result<Self, ArtifactIdError> {
        let mut id = self.clone();
        id.version = non_empty(version.into(), "version")?;
        Ok(id)
    }

    /// Canonical `group:artifact[:type[:classifier]]:version` form
    #[must_use]
    pub fn to_mvn_id(&self) -> String {
        self.render(':')
    }

    /// `mvn:group/artifact/version[/type[/classifier]]` form
    #[must_use]
    pub fn to_mvn_url(&self) -> String {
        let mut url = format!("mvn:{}/{}/{}", self.group_id, self.artifact_id, self.version);
        if self.renders_type() {
            url.push('/');
            url.push_str(&self.r#type);
            if let Some(classifier) = &self.classifier {
                url.push('/');
                url.push_str(classifier);
            }
        }
        url
    }

    fn renders_type(&self) -> bool {
        self.classifier.is_some() || self.r#type != DEFAULT_TYPE
    }

    fn render(&self, sep: char) -> String {
        let mut out = format!("{}{sep}{}", self.group_id, self.artifact_id);
        if self.renders_type() {
            out.push(sep);
            out.push_str(&self.r#type);
            if let Some(classifier) = &self.classifier {
                out.push(sep);
                out.push_str(classifier);
            }
        }
        out.push(sep);
        out.push_str(&self.version);
        out
    }
}

fn non_empty(value: String, segment: &'static str) -> Result<String, ArtifactIdError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ArtifactIdError::EmptySegment(segment));
    }
    Ok(trimmed.to_string())
}

/// Dotted version comparison, numeric where both segments are numeric
fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = match (l.parse::<u64>(), r.parse::<u64>()) {
                    (Ok(l), Ok(r)) => l.cmp(&r),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => l.cmp(r),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

impl Ord for ArtifactId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group_id
            .cmp(&other.group_id)
            .then_with(|| self.artifact_id.cmp(&other.artifact_id))
            .then_with(|| compare_versions(&self.version, &other.version))
            .then_with(|| self.r#type.cmp(&other.r#type))
            .then_with(|| self.classifier.cmp(&other.classifier))
    }
}

impl PartialOrd for ArtifactId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for ArtifactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_mvn_id())
    }
}

impl FromStr for ArtifactId {
    type Err = ArtifactIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mvn_id(s)
    }
}

impl serde::Serialize for ArtifactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_mvn_id())
    }
}

impl<'de> serde::Deserialize<'de> for ArtifactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ArtifactIdVisitor;

        impl serde::de::Visitor<'_> for ArtifactIdVisitor {
            type Value = ArtifactId;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
                formatter.write_str("a module identifier like group:artifact:version")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(ArtifactIdVisitor)
    }
}

/// Errors that can occur when parsing or building identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArtifactIdError {
    /// Identifier text is malformed
    #[error("invalid module identifier '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// A required segment is empty
    #[error("{0} segment must not be empty")]
    EmptySegment(&'static str),
}
