// Copyright 2026 the Miximus developers
// Licensed under the Apache License, Version 2.0

//! Flatten a [`VerificationKey`] into the two flat sequences the verifier
//! contract constructor takes. Pure and order-preserving: no I/O, no
//! randomness, same input gives byte-identical output.

use ark_bn254::Fq;

use crate::vk::VerificationKey;

/// Constructor arguments for the verifier: `vk_flat` holds alpha, beta,
/// gamma, delta (14 elements, fixed); `vk_flat_ic` holds every `gammaABC`
/// point in order (2 per point).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlattenedKey {
    pub vk_flat: Vec<Fq>,
    pub vk_flat_ic: Vec<Fq>,
}

pub fn flatten(vk: &VerificationKey) -> FlattenedKey {
    let mut vk_flat = Vec::with_capacity(14);
    vk_flat.extend_from_slice(&vk.alpha);
    for point in [&vk.beta, &vk.gamma, &vk.delta] {
        for row in point {
            vk_flat.extend_from_slice(row);
        }
    }

    let mut vk_flat_ic = Vec::with_capacity(2 * vk.gamma_abc.len());
    for point in &vk.gamma_abc {
        vk_flat_ic.extend_from_slice(point);
    }

    FlattenedKey { vk_flat, vk_flat_ic }
}
