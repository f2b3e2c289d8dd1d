// Copyright 2026 the Miximus developers
// Licensed under the Apache License, Version 2.0

//! # mx-deploy
//!
//! Verification-key handling and deployment wiring for the Miximus pool.
//!
//! The verifier contract takes its Groth16 verification key as two flat
//! sequences of base-field elements. This crate owns that boundary: the
//! typed [`VerificationKey`] record, JSON artifact loading with arity
//! validation, the order-preserving [`flatten`] transform, and the
//! [`deploy_miximus`] sequence that feeds the result to an injected
//! [`ContractPlatform`].
//!
//! ## Typical flow
//!
//! ```rust,no_run
//! use mx_deploy::{deploy_miximus, InMemoryPlatform};
//!
//! # fn example() -> Result<(), mx_deploy::DeployError> {
//! let mut platform = InMemoryPlatform::new();
//! let deployment = deploy_miximus(&mut platform, "keys/miximus.vk.json".as_ref())?;
//! println!("pool at {}", deployment.miximus.0);
//! # Ok(())
//! # }
//! ```

pub mod deployer;
pub mod error;
pub mod flatten;
pub mod proof;
pub mod vk;

pub use deployer::{
    deploy_miximus, deploy_miximus_with_key, ContractAddress, ContractPlatform, Deployment,
    InMemoryPlatform, PlatformCall, MIMC_ARTIFACT, MIXIMUS_ARTIFACT, VERIFIER_ARTIFACT,
};
pub use error::{ArtifactError, DeployError};
pub use flatten::{flatten, FlattenedKey};
pub use proof::ProofRecord;
pub use vk::VerificationKey;
