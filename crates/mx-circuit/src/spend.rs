use ark_bn254::Fr;
use ark_r1cs_std::{alloc::AllocVar, boolean::Boolean, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use mx_types::{MerklePath, TREE_DEPTH};

use crate::merkle_gadget::authenticate_merkle_path;
use crate::mimc_gadget::mimc_hash_var;

#[derive(Clone)]
pub struct SpendCircuit {
    // Private witnesses
    pub preimage: Option<Fr>,
    pub merkle_path: Option<MerklePath>,
    // Values behind the public inputs
    pub nullifier: Option<Fr>,
    pub external_hash: Option<Fr>,
}

impl SpendCircuit {
    /// Create a circuit with None witnesses (for setup)
    pub fn empty() -> Self {
        Self {
            preimage: None,
            merkle_path: None,
            nullifier: None,
            external_hash: None,
        }
    }
}

impl ConstraintSynthesizer<Fr> for SpendCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        // === Public inputs (3 Fr elements) ===
        // Order: root, nullifier, external_hash
        let root_pub = FpVar::new_input(cs.clone(), || {
            let preimage = self.preimage.ok_or(SynthesisError::AssignmentMissing)?;
            let nullifier = self.nullifier.ok_or(SynthesisError::AssignmentMissing)?;
            let path = self
                .merkle_path
                .as_ref()
                .ok_or(SynthesisError::AssignmentMissing)?;
            let note = mx_types::Note::with_parts(nullifier, preimage);
            let leaf = mx_mimc::leaf_commitment(&note);
            Ok(mx_mimc::merkle_root_from_path(leaf, path))
        })?;

        let nullifier_pub = FpVar::new_input(cs.clone(), || {
            self.nullifier.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // Bound into the statement, no constraints of its own.
        let _external_hash_pub = FpVar::new_input(cs.clone(), || {
            self.external_hash.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // === Private witnesses ===
        let preimage_var = FpVar::new_witness(cs.clone(), || {
            self.preimage.ok_or(SynthesisError::AssignmentMissing)
        })?;

        let mut path_vars: Vec<(FpVar<Fr>, Boolean<Fr>)> = Vec::with_capacity(TREE_DEPTH);
        for i in 0..TREE_DEPTH {
            let sibling = FpVar::new_witness(cs.clone(), || {
                let path = self
                    .merkle_path
                    .as_ref()
                    .ok_or(SynthesisError::AssignmentMissing)?;
                Ok(path.siblings[i])
            })?;
            let index_bit = Boolean::new_witness(cs.clone(), || {
                let path = self
                    .merkle_path
                    .as_ref()
                    .ok_or(SynthesisError::AssignmentMissing)?;
                Ok(path.indices[i])
            })?;
            path_vars.push((sibling, index_bit));
        }

        // === Constraint 1: spend hash ===
        // spend_hash = H_spend(preimage, nullifier)
        let spend_hash = mimc_hash_var(
            mx_mimc::spend_iv(),
            &[preimage_var, nullifier_pub.clone()],
        )?;

        // === Constraint 2: leaf commitment ===
        // leaf = H_leaf(nullifier, spend_hash)
        let leaf = mimc_hash_var(mx_mimc::leaf_iv(), &[nullifier_pub, spend_hash])?;

        // === Constraint 3: Merkle inclusion ===
        let ivs = mx_mimc::merkle_ivs();
        authenticate_merkle_path(&leaf, &path_vars, &ivs, &root_pub)?;

        Ok(())
    }
}
