// Copyright 2026 the Miximus developers
// Licensed under the Apache License, Version 2.0

//! Typed errors for key artifacts and the deployment sequence.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("cannot read {path}: {source}")]
    MissingKeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed key: {0}")]
    MalformedKey(String),

    #[error("malformed proof: {0}")]
    MalformedProof(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Platform failures abort the remaining steps and are never retried:
    /// later steps are not idempotent with respect to partially-created
    /// on-chain state.
    #[error("deployment failure at `{step}`: {message}")]
    DeploymentFailure { step: String, message: String },
}
