//! Testing utilities for the feature model workspace
//!
//! Shared test helpers and fixtures.

#![allow(missing_docs)]

use feature_model::{Artifact, ArtifactId, Prototype};
use url::Url;

/// Install a test-writer subscriber; later calls are no-ops. Honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn artifact_id(mvn_id: &str) -> ArtifactId {
    ArtifactId::from_mvn_id(mvn_id).unwrap()
}

pub fn create_artifact_with_metadata(mvn_id: &str, entries: &[(&str, &str)]) -> Artifact {
    let mut artifact = Artifact::new(artifact_id(mvn_id));
    for (key, value) in entries {
        artifact
            .metadata_mut()
            .insert((*key).to_string(), (*value).to_string());
    }
    artifact
}

pub fn create_url_prototype(location: &str) -> Prototype {
    Prototype::with_url(Url::parse(location).unwrap())
}

/// Id-based prototype with one entry in every removal collection
pub fn create_prototype_with_removals(mvn_id: &str) -> Prototype {
    let mut prototype = Prototype::with_id(artifact_id(mvn_id));
    prototype
        .configuration_removals_mut()
        .push("org.example.config".to_string());
    prototype
        .bundle_removals_mut()
        .push(artifact_id("org.example:unwanted:1.0"));
    prototype
        .framework_properties_removals_mut()
        .push("org.osgi.framework.bootdelegation".to_string());
    prototype
        .extension_removals_mut()
        .push("repoinit".to_string());
    prototype
        .artifact_extension_removals_mut()
        .entry("content-packages".to_string())
        .or_default()
        .push(artifact_id("org.example:package:zip:1.0"));
    prototype
}
