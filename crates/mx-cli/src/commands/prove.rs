use std::path::Path;

use anyhow::{Context, Result};
use ark_bn254::Bn254;
use ark_groth16::ProvingKey;
use ark_serialize::CanonicalDeserialize;
use mx_deploy::ProofRecord;
use mx_pool::MerkleTree;
use mx_types::Note;

use crate::commands::crypto_rng;
use crate::leaves::{self, fr_string, parse_fr};
use crate::output;

#[allow(clippy::too_many_arguments)]
pub fn run(
    pk_path: &Path,
    leaves_path: &Path,
    index: usize,
    nullifier: &str,
    preimage: &str,
    exthash: &str,
    out: &Path,
) -> Result<()> {
    let note = Note::with_parts(parse_fr(nullifier)?, parse_fr(preimage)?);
    let external_hash = parse_fr(exthash)?;

    let all = leaves::load(leaves_path)?;
    anyhow::ensure!(
        index < all.len(),
        "index {index} out of range, {} leaves known",
        all.len()
    );
    anyhow::ensure!(
        mx_mimc::leaf_commitment(&note) == all[index],
        "note does not match the leaf at index {index}"
    );

    let pk_bytes =
        std::fs::read(pk_path).with_context(|| format!("reading {}", pk_path.display()))?;
    // The proving key was produced locally by `genkeys`; skip the point
    // validation pass.
    let pk = ProvingKey::<Bn254>::deserialize_uncompressed_unchecked(&*pk_bytes)
        .context("decoding proving key")?;

    let mut tree = MerkleTree::new();
    for l in &all {
        tree.insert(*l).map_err(anyhow::Error::new)?;
    }
    let path = tree.proof(index);

    let sp = output::spinner("generating proof...");
    let mut rng = crypto_rng();
    let (proof, pi) = mx_circuit::prove(&pk, note, path, external_hash, &mut rng);
    sp.finish_and_clear();

    let record = ProofRecord::from_arkworks(&proof, &pi.to_vec());
    record.save(out)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "proof": out.display().to_string(),
            "root": fr_string(&pi.root),
            "nullifier": fr_string(&pi.nullifier.0),
            "external_hash": fr_string(&pi.external_hash),
        }));
    } else {
        output::success(&format!("proof written to {}", out.display()));
        output::label("root", &fr_string(&pi.root));
        output::label("nullifier", &fr_string(&pi.nullifier.0));
    }
    Ok(())
}
