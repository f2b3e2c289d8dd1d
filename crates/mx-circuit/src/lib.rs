pub mod merkle_gadget;
pub mod mimc_gadget;
pub mod spend;

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, PreparedVerifyingKey, ProvingKey, VerifyingKey};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystem};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};
use mx_types::{MerklePath, Note, Nullifier, TREE_DEPTH};

pub use spend::SpendCircuit;

/// Public inputs for a spend proof
pub struct PublicInputs {
    pub root: Fr,
    pub nullifier: Nullifier,
    pub external_hash: Fr,
}

impl PublicInputs {
    pub fn to_vec(&self) -> Vec<Fr> {
        vec![self.root, self.nullifier.0, self.external_hash]
    }
}

/// Run Groth16 trusted setup for the spend circuit
pub fn setup<R: RngCore + CryptoRng>(rng: &mut R) -> (ProvingKey<Bn254>, VerifyingKey<Bn254>) {
    let circuit = SpendCircuit::empty();
    Groth16::<Bn254>::circuit_specific_setup(circuit, rng).expect("setup failed")
}

/// Generate a Groth16 proof for spending a note in the pool
///
/// Panics if the authentication path does not span the full tree height.
pub fn prove<R: RngCore + CryptoRng>(
    pk: &ProvingKey<Bn254>,
    note: Note,
    merkle_path: MerklePath,
    external_hash: Fr,
    rng: &mut R,
) -> (ark_groth16::Proof<Bn254>, PublicInputs) {
    assert!(
        merkle_path.siblings.len() == TREE_DEPTH && merkle_path.indices.len() == TREE_DEPTH,
        "authentication path must cover all {TREE_DEPTH} tree levels"
    );

    // Compute public inputs natively
    let leaf = mx_mimc::leaf_commitment(&note);
    let root = mx_mimc::merkle_root_from_path(leaf, &merkle_path);
    let nullifier = note.nullifier;

    let circuit = SpendCircuit {
        preimage: Some(note.preimage),
        merkle_path: Some(merkle_path),
        nullifier: Some(nullifier),
        external_hash: Some(external_hash),
    };

    let proof = Groth16::<Bn254>::prove(pk, circuit, rng).expect("proving failed");

    let public_inputs = PublicInputs {
        root,
        nullifier: Nullifier(nullifier),
        external_hash,
    };

    (proof, public_inputs)
}

/// Verify a proof off-chain
pub fn verify_offchain(
    vk: &VerifyingKey<Bn254>,
    proof: &ark_groth16::Proof<Bn254>,
    public_inputs: &PublicInputs,
) -> bool {
    let pvk = PreparedVerifyingKey::from(vk.clone());
    Groth16::<Bn254>::verify_with_processed_vk(&pvk, &public_inputs.to_vec(), proof)
        .unwrap_or(false)
}

/// Count constraints in the spend circuit
pub fn constraint_count() -> usize {
    let cs = ConstraintSystem::<Fr>::new_ref();
    cs.set_optimization_goal(ark_relations::r1cs::OptimizationGoal::Constraints);
    cs.set_mode(ark_relations::r1cs::SynthesisMode::Setup);
    let circuit = SpendCircuit::empty();
    circuit
        .generate_constraints(cs.clone())
        .expect("constraint generation failed");
    cs.num_constraints()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use mx_types::{MerklePath, Note, Nullifier, TREE_DEPTH};

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn build_dummy_merkle_path(rng: &mut impl RngCore) -> MerklePath {
        let siblings: Vec<Fr> = (0..TREE_DEPTH).map(|_| Fr::rand(rng)).collect();
        let indices: Vec<bool> = (0..TREE_DEPTH).map(|i| i % 2 == 0).collect();
        MerklePath { siblings, indices }
    }

    fn test_scenario(rng: &mut impl RngCore) -> (Note, MerklePath, Fr) {
        let note = Note::new(rng);
        let path = build_dummy_merkle_path(rng);
        let external_hash = Fr::rand(rng);
        (note, path, external_hash)
    }

    #[test]
    fn test_valid_spend() {
        let mut rng = test_rng();
        let (note, path, ext) = test_scenario(&mut rng);

        let (pk, vk) = setup(&mut rng);
        let (proof, pi) = prove(&pk, note, path, ext, &mut rng);
        assert!(verify_offchain(&vk, &proof, &pi));
    }

    #[test]
    fn test_tampered_root() {
        let mut rng = test_rng();
        let (note, path, ext) = test_scenario(&mut rng);

        let (pk, vk) = setup(&mut rng);
        let (proof, mut pi) = prove(&pk, note, path, ext, &mut rng);
        pi.root = Fr::rand(&mut rng);
        assert!(!verify_offchain(&vk, &proof, &pi), "should fail: wrong root");
    }

    #[test]
    fn test_tampered_nullifier() {
        let mut rng = test_rng();
        let (note, path, ext) = test_scenario(&mut rng);

        let (pk, vk) = setup(&mut rng);
        let (proof, mut pi) = prove(&pk, note, path, ext, &mut rng);
        pi.nullifier = Nullifier(Fr::rand(&mut rng));
        assert!(
            !verify_offchain(&vk, &proof, &pi),
            "should fail: wrong nullifier"
        );
    }

    #[test]
    #[should_panic(expected = "authentication path must cover")]
    fn test_truncated_path_refused() {
        let mut rng = test_rng();
        let note = Note::new(&mut rng);
        let short = MerklePath {
            siblings: vec![Fr::rand(&mut rng); 5],
            indices: vec![false; 5],
        };

        let (pk, _vk) = setup(&mut rng);
        prove(&pk, note, short, Fr::rand(&mut rng), &mut rng);
    }

    #[test]
    fn test_tampered_external_hash() {
        let mut rng = test_rng();
        let (note, path, ext) = test_scenario(&mut rng);

        let (pk, vk) = setup(&mut rng);
        let (proof, mut pi) = prove(&pk, note, path, ext, &mut rng);
        // external_hash carries no constraints but is still bound into
        // the statement; changing it must invalidate the proof
        pi.external_hash = Fr::rand(&mut rng);
        assert!(
            !verify_offchain(&vk, &proof, &pi),
            "should fail: wrong external hash"
        );
    }

    #[test]
    fn test_constraint_count() {
        let count = constraint_count();
        println!("Spend circuit constraint count: {}", count);
        assert!(count < 40_000, "constraint count {} exceeds 40K limit", count);
        assert!(count > 5_000, "constraint count {} suspiciously low", count);
    }

    #[test]
    fn test_vk_input_arity() {
        let mut rng = test_rng();
        let (_pk, vk) = setup(&mut rng);
        // gamma_abc = 1 constant term + 3 public inputs
        assert_eq!(vk.gamma_abc_g1.len(), 4);
    }
}
