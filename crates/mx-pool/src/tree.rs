// Copyright 2026 the Miximus developers
// Licensed under the Apache License, Version 2.0

use ark_bn254::Fr;
use ark_ff::AdditiveGroup;
use mx_mimc::merkle_node;
use mx_types::{MerklePath, MerkleRoot, TREE_DEPTH};

use crate::error::PoolError;

/// Append-only MiMC Merkle tree, fixed depth, zero-filled empty subtrees.
/// Each level hashes with its own IV.
pub struct MerkleTree {
    leaves: Vec<Fr>,
    ivs: Vec<Fr>,
    zeros: Vec<Fr>,
}

impl MerkleTree {
    pub fn new() -> Self {
        let ivs = mx_mimc::merkle_ivs();
        let mut zeros = vec![Fr::ZERO; TREE_DEPTH + 1];
        for i in 1..=TREE_DEPTH {
            zeros[i] = merkle_node(ivs[i - 1], zeros[i - 1], zeros[i - 1]);
        }
        Self {
            leaves: Vec::new(),
            ivs,
            zeros,
        }
    }

    pub fn insert(&mut self, leaf: Fr) -> Result<usize, PoolError> {
        if self.leaves.len() >= 1usize << TREE_DEPTH {
            return Err(PoolError::TreeFull);
        }
        let idx = self.leaves.len();
        self.leaves.push(leaf);
        Ok(idx)
    }

    pub fn next_index(&self) -> usize {
        self.leaves.len()
    }

    pub fn leaves(&self) -> &[Fr] {
        &self.leaves
    }

    pub fn root(&self) -> MerkleRoot {
        if self.leaves.is_empty() {
            return MerkleRoot(self.zeros[TREE_DEPTH]);
        }
        let mut layer: Vec<Fr> = self.leaves.clone();
        for level in 0..TREE_DEPTH {
            let mut next = Vec::with_capacity((layer.len() + 1) / 2);
            let zero = self.zeros[level];
            let iv = self.ivs[level];
            let mut i = 0;
            while i < layer.len() {
                let left = layer[i];
                let right = if i + 1 < layer.len() { layer[i + 1] } else { zero };
                next.push(merkle_node(iv, left, right));
                i += 2;
            }
            layer = next;
        }
        MerkleRoot(layer[0])
    }

    pub fn proof(&self, index: usize) -> MerklePath {
        assert!(index < self.leaves.len(), "index out of bounds");
        let mut siblings = Vec::with_capacity(TREE_DEPTH);
        let mut indices = Vec::with_capacity(TREE_DEPTH);
        let mut layer: Vec<Fr> = self.leaves.clone();
        let mut idx = index;

        for level in 0..TREE_DEPTH {
            let zero = self.zeros[level];
            let iv = self.ivs[level];
            let is_right = idx & 1 == 1;
            indices.push(is_right);

            let sibling_idx = if is_right { idx - 1 } else { idx + 1 };
            let sibling = if sibling_idx < layer.len() {
                layer[sibling_idx]
            } else {
                zero
            };
            siblings.push(sibling);

            // build next layer
            let mut next = Vec::with_capacity((layer.len() + 1) / 2);
            let mut i = 0;
            while i < layer.len() {
                let left = layer[i];
                let right = if i + 1 < layer.len() { layer[i + 1] } else { zero };
                next.push(merkle_node(iv, left, right));
                i += 2;
            }
            layer = next;
            idx /= 2;
        }

        MerklePath { siblings, indices }
    }
}

impl Default for MerkleTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Verify a Merkle proof against a root.
pub fn verify_proof(leaf: Fr, path: &MerklePath, root: &MerkleRoot) -> bool {
    mx_mimc::merkle_root_from_path(leaf, path) == root.0
}
