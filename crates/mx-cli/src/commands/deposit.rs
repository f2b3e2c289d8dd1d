use std::path::Path;

use anyhow::Result;
use mx_pool::MerkleTree;
use mx_types::Note;

use crate::commands::crypto_rng;
use crate::leaves::{self, fr_string};
use crate::output;

pub fn run(leaves_path: &Path) -> Result<()> {
    let mut rng = crypto_rng();
    let note = Note::new(&mut rng);
    let leaf = mx_mimc::leaf_commitment(&note);

    let mut all = leaves::load(leaves_path)?;
    all.push(leaf);
    leaves::save(leaves_path, &all)?;
    let index = all.len() - 1;

    let mut tree = MerkleTree::new();
    for l in &all {
        tree.insert(*l).map_err(anyhow::Error::new)?;
    }
    let root = tree.root();

    if output::is_json() {
        output::json_output(serde_json::json!({
            "index": index,
            "leaf": fr_string(&leaf),
            "nullifier": fr_string(&note.nullifier),
            "preimage": fr_string(&note.preimage),
            "root": fr_string(&root.0),
        }));
    } else {
        output::success(&format!("leaf appended to {}", leaves_path.display()));
        output::label("index", &index.to_string());
        output::label("leaf", &fr_string(&leaf));
        output::label("nullifier", &fr_string(&note.nullifier));
        output::label("preimage", &fr_string(&note.preimage));
        output::label("root", &fr_string(&root.0));
        output::warn("keep the preimage secret; it authorizes the spend");
    }
    Ok(())
}
