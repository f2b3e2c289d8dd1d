//! Leaf-file persistence: the list of deposited commitments as decimal
//! strings, enough to rebuild the tree offline.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use ark_bn254::Fr;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default)]
struct LeavesFile {
    leaves: Vec<String>,
}

pub fn fr_string(fr: &Fr) -> String {
    format!("{fr}")
}

pub fn parse_fr(s: &str) -> Result<Fr> {
    let s = s.trim();
    if let Some(h) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let padded = if h.len() % 2 == 1 {
            format!("0{h}")
        } else {
            h.to_string()
        };
        let bytes = hex::decode(&padded).with_context(|| format!("bad hex `{s}`"))?;
        anyhow::ensure!(bytes.len() <= 32, "element `{s}` exceeds 32 bytes");
        Ok(ark_ff::PrimeField::from_be_bytes_mod_order(&bytes))
    } else {
        Fr::from_str(s).map_err(|_| anyhow::anyhow!("cannot parse field element `{s}`"))
    }
}

/// Load the leaf list; a missing file is an empty pool.
pub fn load(path: &Path) -> Result<Vec<Fr>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let file: LeavesFile =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    file.leaves.iter().map(|s| parse_fr(s)).collect()
}

pub fn save(path: &Path, leaves: &[Fr]) -> Result<()> {
    let file = LeavesFile {
        leaves: leaves.iter().map(fr_string).collect(),
    };
    let data = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, data).with_context(|| format!("writing {}", path.display()))
}
