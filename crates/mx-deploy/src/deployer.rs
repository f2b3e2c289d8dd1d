// Copyright 2026 the Miximus developers
// Licensed under the Apache License, Version 2.0

//! Deployment sequencing for the Miximus contract set.
//!
//! The platform the contracts land on is injected as a trait object owned
//! by the caller; nothing here resolves artifacts through global state.
//! The sequence is strictly ordered and synchronous: each step references
//! addresses produced by earlier ones, and any failure aborts the rest.

use std::path::Path;

use ark_bn254::Fq;

use crate::error::DeployError;
use crate::flatten::{flatten, FlattenedKey};
use crate::vk::VerificationKey;

pub const MIMC_ARTIFACT: &str = "MiMC";
pub const VERIFIER_ARTIFACT: &str = "Verifier";
pub const MIXIMUS_ARTIFACT: &str = "Miximus";

/// Address of a deployed contract, as the platform reports it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContractAddress(pub String);

/// The external contract-deployment facility.
pub trait ContractPlatform {
    /// Deploy `artifact`, passing each element of `args` as one flat
    /// constructor argument array.
    fn deploy(&mut self, artifact: &str, args: &[Vec<Fq>])
        -> Result<ContractAddress, DeployError>;

    /// Link an already-deployed library into `artifact` before it is
    /// deployed.
    fn link(&mut self, library: &ContractAddress, artifact: &str) -> Result<(), DeployError>;
}

/// Typed handles produced by a completed deployment.
#[derive(Clone, Debug)]
pub struct Deployment {
    pub mimc: ContractAddress,
    pub verifier: ContractAddress,
    pub miximus: ContractAddress,
    pub key: FlattenedKey,
}

/// Deploy and wire the full contract set, reading the verification key
/// from `key_path`.
pub fn deploy_miximus<P: ContractPlatform>(
    platform: &mut P,
    key_path: &Path,
) -> Result<Deployment, DeployError> {
    let vk = VerificationKey::load(key_path)?;
    deploy_miximus_with_key(platform, &vk)
}

/// Deploy and wire the full contract set from an already-validated key.
///
/// The key is flattened before anything is deployed, so a malformed key
/// never leaves partial on-chain state behind.
pub fn deploy_miximus_with_key<P: ContractPlatform>(
    platform: &mut P,
    vk: &VerificationKey,
) -> Result<Deployment, DeployError> {
    let key = flatten(vk);

    let mimc = platform.deploy(MIMC_ARTIFACT, &[])?;
    let verifier = platform.deploy(VERIFIER_ARTIFACT, &[])?;
    platform.link(&verifier, MIXIMUS_ARTIFACT)?;
    platform.link(&mimc, MIXIMUS_ARTIFACT)?;

    let miximus = platform.deploy(
        MIXIMUS_ARTIFACT,
        &[key.vk_flat.clone(), key.vk_flat_ic.clone()],
    )?;

    Ok(Deployment {
        mimc,
        verifier,
        miximus,
        key,
    })
}

/// What a platform was asked to do, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlatformCall {
    Deploy {
        artifact: String,
        args: Vec<Vec<Fq>>,
    },
    Link {
        library: ContractAddress,
        artifact: String,
    },
}

/// Recording platform for tests and dry runs. Addresses are sequential
/// placeholders.
#[derive(Default)]
pub struct InMemoryPlatform {
    pub calls: Vec<PlatformCall>,
    next: u64,
}

impl InMemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContractPlatform for InMemoryPlatform {
    fn deploy(
        &mut self,
        artifact: &str,
        args: &[Vec<Fq>],
    ) -> Result<ContractAddress, DeployError> {
        self.next += 1;
        self.calls.push(PlatformCall::Deploy {
            artifact: artifact.to_string(),
            args: args.to_vec(),
        });
        Ok(ContractAddress(format!("0x{:040x}", self.next)))
    }

    fn link(&mut self, library: &ContractAddress, artifact: &str) -> Result<(), DeployError> {
        self.calls.push(PlatformCall::Link {
            library: library.clone(),
            artifact: artifact.to_string(),
        });
        Ok(())
    }
}
