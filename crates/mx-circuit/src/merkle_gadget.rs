use ark_bn254::Fr;
use ark_r1cs_std::{boolean::Boolean, fields::fp::FpVar, prelude::EqGadget};
use ark_relations::r1cs::SynthesisError;

use crate::mimc_gadget::mimc_hash_var;

/// Authenticate a Merkle path in-circuit.
/// `path` is a slice of (sibling, index_bit) where index_bit=true means the
/// walked node is the right child; `ivs` carries one hash IV per level.
pub fn authenticate_merkle_path(
    leaf: &FpVar<Fr>,
    path: &[(FpVar<Fr>, Boolean<Fr>)],
    ivs: &[Fr],
    root: &FpVar<Fr>,
) -> Result<(), SynthesisError> {
    let mut current = leaf.clone();

    for (level, (sibling, is_right)) in path.iter().enumerate() {
        // if is_right: hash(sibling, current), else: hash(current, sibling)
        let left = is_right.select(sibling, &current)?;
        let right = is_right.select(&current, sibling)?;
        current = mimc_hash_var(ivs[level], &[left, right])?;
    }

    current.enforce_equal(root)?;
    Ok(())
}
