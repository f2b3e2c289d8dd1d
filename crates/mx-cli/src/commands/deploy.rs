use std::path::Path;

use anyhow::{Context, Result};
use ark_bn254::Fq;
use mx_deploy::{deploy_miximus, InMemoryPlatform};

use crate::output;

fn fq_strings(elements: &[Fq]) -> Vec<String> {
    elements.iter().map(|e| format!("{e}")).collect()
}

/// Sequence the deployment against the recording platform and print the
/// plan: addresses plus the exact constructor arguments the verifier
/// contract takes.
pub fn run(vk_path: &Path, out: Option<&Path>) -> Result<()> {
    let mut platform = InMemoryPlatform::new();
    let deployment = deploy_miximus(&mut platform, vk_path)?;

    let plan = serde_json::json!({
        "mimc": deployment.mimc.0,
        "verifier": deployment.verifier.0,
        "miximus": deployment.miximus.0,
        "vk_flat": fq_strings(&deployment.key.vk_flat),
        "vk_flat_IC": fq_strings(&deployment.key.vk_flat_ic),
    });

    if let Some(out) = out {
        std::fs::write(out, serde_json::to_string_pretty(&plan)?)
            .with_context(|| format!("writing {}", out.display()))?;
        output::info(&format!("plan written to {}", out.display()));
    }

    if output::is_json() {
        output::json_output(plan);
    } else {
        output::success("deployment plan ready");
        output::label("mimc", &deployment.mimc.0);
        output::label("verifier", &deployment.verifier.0);
        output::label("miximus", &deployment.miximus.0);
        output::label("vk_flat", &format!("{} elements", deployment.key.vk_flat.len()));
        output::label(
            "vk_flat_IC",
            &format!("{} elements", deployment.key.vk_flat_ic.len()),
        );
    }
    Ok(())
}
