mod commands;
mod leaves;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "miximus", about = "Shielded-pool tooling for Miximus")]
struct Cli {
    /// Emit machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run the trusted setup and write the proving/verification key artifacts
    Genkeys {
        /// Proving key output (arkworks uncompressed)
        #[arg(long, default_value = "miximus.pk.bin")]
        pk: PathBuf,
        /// Verification key output (JSON artifact)
        #[arg(long, default_value = "miximus.vk.json")]
        vk: PathBuf,
    },
    /// Flatten the verification key and print the deployment plan
    Deploy {
        #[arg(long, default_value = "miximus.vk.json")]
        vk: PathBuf,
        /// Also write the plan as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Create a note and append its leaf commitment to the leaf file
    Deposit {
        #[arg(long, default_value = "miximus.leaves.json")]
        leaves: PathBuf,
    },
    /// Prove a spend of a deposited note
    Prove {
        #[arg(long, default_value = "miximus.pk.bin")]
        pk: PathBuf,
        #[arg(long, default_value = "miximus.leaves.json")]
        leaves: PathBuf,
        /// Leaf index of the note being spent
        #[arg(long)]
        index: usize,
        /// Note nullifier (decimal or 0x-hex)
        #[arg(long)]
        nullifier: String,
        /// Spend preimage (decimal or 0x-hex)
        #[arg(long)]
        preimage: String,
        /// Hash of external parameters bound into the proof
        #[arg(long, default_value = "0")]
        exthash: String,
        #[arg(long, default_value = "miximus.proof.json")]
        out: PathBuf,
    },
    /// Verify a spend proof off-chain
    Verify {
        #[arg(long, default_value = "miximus.vk.json")]
        vk: PathBuf,
        #[arg(long, default_value = "miximus.proof.json")]
        proof: PathBuf,
    },
    /// Print the commitment tree depth
    TreeDepth,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    match cli.command {
        Cmd::Genkeys { pk, vk } => commands::genkeys::run(&pk, &vk)?,
        Cmd::Deploy { vk, out } => commands::deploy::run(&vk, out.as_deref())?,
        Cmd::Deposit { leaves } => commands::deposit::run(&leaves)?,
        Cmd::Prove {
            pk,
            leaves,
            index,
            nullifier,
            preimage,
            exthash,
            out,
        } => commands::prove::run(&pk, &leaves, index, &nullifier, &preimage, &exthash, &out)?,
        Cmd::Verify { vk, proof } => commands::verify::run(&vk, &proof)?,
        Cmd::TreeDepth => {
            if output::is_json() {
                output::json_output(serde_json::json!({ "tree_depth": mx_types::TREE_DEPTH }));
            } else {
                println!("{}", mx_types::TREE_DEPTH);
            }
        }
    }
    Ok(())
}
