use std::path::Path;

use anyhow::Result;
use mx_circuit::PublicInputs;
use mx_deploy::{flatten, ProofRecord, VerificationKey};
use mx_types::Nullifier;

use crate::leaves::fr_string;
use crate::output;

pub fn run(vk_path: &Path, proof_path: &Path) -> Result<()> {
    let record = VerificationKey::load(vk_path)?;
    let flat = flatten(&record);
    // Decode through the same path the pool constructor uses
    let vk = mx_pool::decode_verifying_key(&flat.vk_flat, &flat.vk_flat_ic)?;

    let (proof, inputs) = ProofRecord::load(proof_path)?.to_arkworks()?;
    anyhow::ensure!(
        inputs.len() == 3,
        "expected 3 public inputs (root, nullifier, external_hash), got {}",
        inputs.len()
    );
    let pi = PublicInputs {
        root: inputs[0],
        nullifier: Nullifier(inputs[1]),
        external_hash: inputs[2],
    };

    if !mx_circuit::verify_offchain(&vk, &proof, &pi) {
        anyhow::bail!("proof invalid");
    }

    if output::is_json() {
        output::json_output(serde_json::json!({
            "valid": true,
            "root": fr_string(&pi.root),
            "nullifier": fr_string(&pi.nullifier.0),
        }));
    } else {
        output::success("proof valid");
        output::label("root", &fr_string(&pi.root));
        output::label("nullifier", &fr_string(&pi.nullifier.0));
    }
    Ok(())
}
