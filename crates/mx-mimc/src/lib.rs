//! MiMC-e7 over the BN254 scalar field.
//!
//! The cipher is 91 rounds of `x <- (x + k + c_i)^7` followed by a final
//! key addition; the hash chains it in Miyaguchi-Preneel mode. Round
//! constants and domain IVs are derived from fixed seed strings by an
//! iterated SHA-256 chain, so every party computes identical parameters
//! with no setup artifact.

use ark_bn254::Fr;
use ark_ff::{Field, PrimeField};
use mx_types::{MerklePath, Note, TREE_DEPTH};
use sha2::{Digest, Sha256};

pub const MIMC_ROUNDS: usize = 91;

/// Derive `n` field elements from a seed by hashing the running digest.
fn derive_constants(seed: &[u8], n: usize) -> Vec<Fr> {
    let mut out = Vec::with_capacity(n);
    let mut digest = Sha256::digest(seed);
    for _ in 0..n {
        out.push(Fr::from_be_bytes_mod_order(&digest));
        digest = Sha256::digest(digest);
    }
    out
}

/// The 91 cipher round constants (seed `mimc`).
pub fn round_constants() -> Vec<Fr> {
    derive_constants(b"mimc", MIMC_ROUNDS)
}

/// IV for spend hashes: H(preimage, nullifier).
pub fn spend_iv() -> Fr {
    derive_constants(b"miximus.spend-hash", 1)[0]
}

/// IV for leaf commitments: H(nullifier, spend_hash).
pub fn leaf_iv() -> Fr {
    derive_constants(b"miximus.leaf-hash", 1)[0]
}

/// One IV per tree level, so the same children hash differently at
/// different heights.
pub fn merkle_ivs() -> Vec<Fr> {
    derive_constants(b"miximus.merkle-tree", TREE_DEPTH)
}

/// MiMC-e7 block cipher: encrypt `msg` under `key`.
pub fn mimc_e7(msg: Fr, key: Fr) -> Fr {
    let mut x = msg;
    for c in round_constants() {
        let t = x + key + c;
        let t2 = t.square();
        let t4 = t2.square();
        x = t4 * t2 * t;
    }
    x + key
}

/// Miyaguchi-Preneel hash of `inputs` chained from `iv`.
pub fn mimc_hash(iv: Fr, inputs: &[Fr]) -> Fr {
    let mut h = iv;
    for m in inputs {
        h = mimc_e7(*m, h) + h + m;
    }
    h
}

/// Hash two children at the given tree level.
pub fn merkle_node(level_iv: Fr, left: Fr, right: Fr) -> Fr {
    mimc_hash(level_iv, &[left, right])
}

/// spend_hash = H_spend(preimage, nullifier)
pub fn spend_hash(preimage: Fr, nullifier: Fr) -> Fr {
    mimc_hash(spend_iv(), &[preimage, nullifier])
}

/// leaf = H_leaf(nullifier, spend_hash)
pub fn leaf_commitment(note: &Note) -> Fr {
    let sh = spend_hash(note.preimage, note.nullifier);
    mimc_hash(leaf_iv(), &[note.nullifier, sh])
}

/// Walk an authentication path up from `leaf`, hashing with the IV of
/// each level.
pub fn merkle_root_from_path(leaf: Fr, path: &MerklePath) -> Fr {
    let ivs = merkle_ivs();
    let mut current = leaf;
    for i in 0..path.siblings.len() {
        current = if path.indices[i] {
            merkle_node(ivs[i], path.siblings[i], current)
        } else {
            merkle_node(ivs[i], current, path.siblings[i])
        };
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::UniformRand;
    use ark_std::test_rng;

    #[test]
    fn test_round_constant_count() {
        assert_eq!(round_constants().len(), MIMC_ROUNDS);
    }

    #[test]
    fn test_round_constants_distinct() {
        let cs = round_constants();
        for i in 1..cs.len() {
            assert_ne!(cs[i - 1], cs[i]);
        }
    }

    #[test]
    fn test_hash_deterministic() {
        let mut rng = test_rng();
        let a = Fr::rand(&mut rng);
        let b = Fr::rand(&mut rng);
        let iv = spend_iv();
        assert_eq!(mimc_hash(iv, &[a, b]), mimc_hash(iv, &[a, b]));
    }

    #[test]
    fn test_hash_order_matters() {
        let mut rng = test_rng();
        let a = Fr::rand(&mut rng);
        let b = Fr::rand(&mut rng);
        let iv = spend_iv();
        assert_ne!(mimc_hash(iv, &[a, b]), mimc_hash(iv, &[b, a]));
    }

    #[test]
    fn test_iv_domain_separation() {
        let mut rng = test_rng();
        let a = Fr::rand(&mut rng);
        let b = Fr::rand(&mut rng);
        assert_ne!(mimc_hash(spend_iv(), &[a, b]), mimc_hash(leaf_iv(), &[a, b]));
    }

    #[test]
    fn test_merkle_ivs_unique_per_level() {
        let ivs = merkle_ivs();
        assert_eq!(ivs.len(), TREE_DEPTH);
        for i in 0..ivs.len() {
            for j in (i + 1)..ivs.len() {
                assert_ne!(ivs[i], ivs[j], "levels {i} and {j} share an IV");
            }
        }
    }

    #[test]
    fn test_cipher_key_dependence() {
        let mut rng = test_rng();
        let m = Fr::rand(&mut rng);
        let k1 = Fr::rand(&mut rng);
        let k2 = Fr::rand(&mut rng);
        assert_ne!(mimc_e7(m, k1), mimc_e7(m, k2));
    }

    #[test]
    fn test_leaf_commitment_deterministic() {
        let mut rng = test_rng();
        let note = Note::new(&mut rng);
        assert_eq!(leaf_commitment(&note), leaf_commitment(&note));
    }

    #[test]
    fn test_path_direction_matters() {
        let mut rng = test_rng();
        let leaf = Fr::rand(&mut rng);
        let siblings: Vec<Fr> = (0..4).map(|_| Fr::rand(&mut rng)).collect();
        let as_left = MerklePath {
            siblings: siblings.clone(),
            indices: vec![false; 4],
        };
        let as_right = MerklePath {
            siblings,
            indices: vec![true; 4],
        };
        assert_ne!(
            merkle_root_from_path(leaf, &as_left),
            merkle_root_from_path(leaf, &as_right)
        );
    }

    #[test]
    fn test_different_notes_different_leaves() {
        let mut rng = test_rng();
        let n1 = Note::new(&mut rng);
        let n2 = Note::new(&mut rng);
        assert_ne!(leaf_commitment(&n1), leaf_commitment(&n2));
    }
}
