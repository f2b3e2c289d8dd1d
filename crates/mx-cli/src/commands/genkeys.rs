use std::path::Path;

use anyhow::{Context, Result};
use ark_serialize::CanonicalSerialize;
use mx_deploy::VerificationKey;

use crate::commands::crypto_rng;
use crate::output;

pub fn run(pk_path: &Path, vk_path: &Path) -> Result<()> {
    let sp = output::spinner("running trusted setup...");
    let mut rng = crypto_rng();
    let (pk, vk) = mx_circuit::setup(&mut rng);
    sp.finish_and_clear();

    let mut pk_bytes = Vec::new();
    pk.serialize_uncompressed(&mut pk_bytes)
        .context("serializing proving key")?;
    std::fs::write(pk_path, &pk_bytes)
        .with_context(|| format!("writing {}", pk_path.display()))?;

    let record = VerificationKey::from_arkworks(&vk);
    record.save(vk_path)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "pk": pk_path.display().to_string(),
            "vk": vk_path.display().to_string(),
            "public_inputs": record.public_input_count(),
            "constraints": mx_circuit::constraint_count(),
        }));
    } else {
        output::success("keys written");
        output::label("pk", &pk_path.display().to_string());
        output::label("vk", &vk_path.display().to_string());
        output::warn("this setup is circuit-specific; regenerate after any circuit change");
    }
    Ok(())
}
