// Copyright 2026 the Miximus developers
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;

use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_groth16::{Groth16, PreparedVerifyingKey, Proof, VerifyingKey};
use ark_snark::SNARK;
use mx_types::{MerklePath, MerkleRoot, Nullifier};

use crate::error::PoolError;
use crate::tree::MerkleTree;

/// Coordinates per flattened G1 / G2 point.
const G1_COORDS: usize = 2;
const G2_COORDS: usize = 4;
const VK_FLAT_LEN: usize = G1_COORDS + 3 * G2_COORDS;

fn g1_point(coords: &[Fq], what: &str) -> Result<G1Affine, PoolError> {
    let p = G1Affine::new_unchecked(coords[0], coords[1]);
    if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(PoolError::MalformedKey(format!(
            "{what} is not a valid G1 point"
        )));
    }
    Ok(p)
}

fn g2_point(coords: &[Fq], what: &str) -> Result<G2Affine, PoolError> {
    let x = Fq2::new(coords[0], coords[1]);
    let y = Fq2::new(coords[2], coords[3]);
    let p = G2Affine::new_unchecked(x, y);
    if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(PoolError::MalformedKey(format!(
            "{what} is not a valid G2 point"
        )));
    }
    Ok(p)
}

/// Reassemble an arkworks verification key from the two flat coordinate
/// sequences the deployer passes as constructor arguments. The inverse of
/// `mx_deploy::flatten` composed with the record's arkworks conversion.
pub fn decode_verifying_key(
    vk_flat: &[Fq],
    vk_flat_ic: &[Fq],
) -> Result<VerifyingKey<Bn254>, PoolError> {
    if vk_flat.len() != VK_FLAT_LEN {
        return Err(PoolError::MalformedKey(format!(
            "vk_flat must have {VK_FLAT_LEN} elements, got {}",
            vk_flat.len()
        )));
    }
    if vk_flat_ic.is_empty() || vk_flat_ic.len() % G1_COORDS != 0 {
        return Err(PoolError::MalformedKey(format!(
            "vk_flat_IC must be a non-empty sequence of coordinate pairs, got {}",
            vk_flat_ic.len()
        )));
    }

    let alpha_g1 = g1_point(&vk_flat[0..2], "alpha")?;
    let beta_g2 = g2_point(&vk_flat[2..6], "beta")?;
    let gamma_g2 = g2_point(&vk_flat[6..10], "gamma")?;
    let delta_g2 = g2_point(&vk_flat[10..14], "delta")?;
    let gamma_abc_g1 = vk_flat_ic
        .chunks(G1_COORDS)
        .map(|c| g1_point(c, "gammaABC"))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(VerifyingKey {
        alpha_g1,
        beta_g2,
        gamma_g2,
        delta_g2,
        gamma_abc_g1,
    })
}

/// The shielded pool. Spent nullifiers and every root the tree has ever
/// had are retained; a withdrawal may prove against any historical root
/// so that deposits landing after proof generation do not invalidate it.
pub struct MiximusPool {
    tree: MerkleTree,
    roots: BTreeSet<Fr>,
    spent: BTreeSet<Nullifier>,
    pvk: PreparedVerifyingKey<Bn254>,
}

impl MiximusPool {
    /// Instantiate the pool from flattened constructor arguments.
    pub fn new(vk_flat: &[Fq], vk_flat_ic: &[Fq]) -> Result<Self, PoolError> {
        let vk = decode_verifying_key(vk_flat, vk_flat_ic)?;
        // Withdraw statement: root, nullifier, external_hash
        if vk.gamma_abc_g1.len() != 4 {
            return Err(PoolError::MalformedKey(format!(
                "key expects {} public inputs, withdraw has 3",
                vk.gamma_abc_g1.len() - 1
            )));
        }

        let tree = MerkleTree::new();
        let mut roots = BTreeSet::new();
        roots.insert(tree.root().0);

        Ok(Self {
            tree,
            roots,
            spent: BTreeSet::new(),
            pvk: PreparedVerifyingKey::from(vk),
        })
    }

    /// Append a leaf commitment; the new root joins the history.
    pub fn deposit(&mut self, leaf: Fr) -> Result<usize, PoolError> {
        let index = self.tree.insert(leaf)?;
        self.roots.insert(self.tree.root().0);
        Ok(index)
    }

    pub fn root(&self) -> MerkleRoot {
        self.tree.root()
    }

    pub fn is_known_root(&self, root: &Fr) -> bool {
        self.roots.contains(root)
    }

    pub fn is_spent(&self, nullifier: &Nullifier) -> bool {
        self.spent.contains(nullifier)
    }

    pub fn leaf_count(&self) -> usize {
        self.tree.next_index()
    }

    /// Authentication path for a deposited leaf (prover side).
    pub fn path(&self, index: usize) -> MerklePath {
        self.tree.proof(index)
    }

    /// Spend a note: proof must verify for `(root, nullifier,
    /// external_hash)` against a historical root, and the nullifier is
    /// burned on success.
    pub fn withdraw(
        &mut self,
        root: Fr,
        nullifier: Nullifier,
        external_hash: Fr,
        proof: &Proof<Bn254>,
    ) -> Result<(), PoolError> {
        if !self.roots.contains(&root) {
            return Err(PoolError::UnknownRoot);
        }
        if self.spent.contains(&nullifier) {
            return Err(PoolError::NullifierSpent);
        }

        let public_inputs = [root, nullifier.0, external_hash];
        let ok = Groth16::<Bn254>::verify_with_processed_vk(&self.pvk, &public_inputs, proof)
            .unwrap_or(false);
        if !ok {
            return Err(PoolError::InvalidProof);
        }

        self.spent.insert(nullifier);
        Ok(())
    }
}
