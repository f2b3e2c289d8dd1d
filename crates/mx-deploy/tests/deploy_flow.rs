// Copyright 2026 the Miximus developers
// Licensed under the Apache License, Version 2.0

//! Deployment sequencing: key problems abort before anything is deployed,
//! platform failures abort the remaining steps.

use ark_bn254::Fq;
use mx_deploy::{
    deploy_miximus, deploy_miximus_with_key, ContractAddress, ContractPlatform, DeployError,
    InMemoryPlatform, VerificationKey, MIMC_ARTIFACT, VERIFIER_ARTIFACT,
};

fn fq(n: u64) -> Fq {
    Fq::from(n)
}

fn sample_vk() -> VerificationKey {
    VerificationKey {
        alpha: [fq(1), fq(2)],
        beta: [[fq(3), fq(4)], [fq(5), fq(6)]],
        gamma: [[fq(7), fq(8)], [fq(9), fq(10)]],
        delta: [[fq(11), fq(12)], [fq(13), fq(14)]],
        gamma_abc: vec![[fq(15), fq(16)], [fq(17), fq(18)]],
    }
}

/// Platform that fails when asked to deploy a given artifact.
struct FailingPlatform {
    inner: InMemoryPlatform,
    fail_on: &'static str,
}

impl ContractPlatform for FailingPlatform {
    fn deploy(
        &mut self,
        artifact: &str,
        args: &[Vec<Fq>],
    ) -> Result<ContractAddress, DeployError> {
        if artifact == self.fail_on {
            return Err(DeployError::DeploymentFailure {
                step: artifact.to_string(),
                message: "out of gas".into(),
            });
        }
        self.inner.deploy(artifact, args)
    }

    fn link(&mut self, library: &ContractAddress, artifact: &str) -> Result<(), DeployError> {
        self.inner.link(library, artifact)
    }
}

#[test]
fn missing_key_file_makes_no_platform_calls() {
    let mut platform = InMemoryPlatform::new();
    let err = deploy_miximus(&mut platform, "/nonexistent/miximus.vk.json".as_ref()).unwrap_err();
    assert!(matches!(err, DeployError::Artifact(_)), "{err}");
    assert!(platform.calls.is_empty(), "no partial deployment on key error");
}

#[test]
fn malformed_key_makes_no_platform_calls() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vk.json");
    std::fs::write(&path, r#"{"alpha": ["1"]}"#).unwrap();

    let mut platform = InMemoryPlatform::new();
    let err = deploy_miximus(&mut platform, &path).unwrap_err();
    assert!(matches!(err, DeployError::Artifact(_)), "{err}");
    assert!(platform.calls.is_empty());
}

#[test]
fn platform_failure_aborts_remaining_steps() {
    let mut platform = FailingPlatform {
        inner: InMemoryPlatform::new(),
        fail_on: VERIFIER_ARTIFACT,
    };
    let err = deploy_miximus_with_key(&mut platform, &sample_vk()).unwrap_err();
    assert!(matches!(err, DeployError::DeploymentFailure { .. }), "{err}");

    // Only the MiMC deploy went through; nothing after the failure ran.
    assert_eq!(platform.inner.calls.len(), 1);
}

#[test]
fn first_step_failure_deploys_nothing_else() {
    let mut platform = FailingPlatform {
        inner: InMemoryPlatform::new(),
        fail_on: MIMC_ARTIFACT,
    };
    let err = deploy_miximus_with_key(&mut platform, &sample_vk()).unwrap_err();
    assert!(matches!(err, DeployError::DeploymentFailure { .. }), "{err}");
    assert!(platform.inner.calls.is_empty());
}

#[test]
fn deployment_reuses_flattened_key_in_constructor() {
    let mut platform = InMemoryPlatform::new();
    let deployment = deploy_miximus_with_key(&mut platform, &sample_vk()).unwrap();
    assert_eq!(deployment.key.vk_flat.len(), 14);
    assert_eq!(deployment.key.vk_flat_ic.len(), 4);
}
