// Copyright 2026 the Miximus developers
// Licensed under the Apache License, Version 2.0

//! mx-pool: the Miximus commitment/nullifier pool.
//!
//! Deposits append leaf commitments to a fixed-depth MiMC Merkle tree;
//! withdrawals present a Groth16 proof against any historical root and
//! burn a nullifier. The pool is constructed from the *flattened*
//! verification key, the same two sequences the deployer passes as
//! constructor arguments.

mod error;
mod pool;
mod tree;

pub use error::PoolError;
pub use pool::{decode_verifying_key, MiximusPool};
pub use tree::{verify_proof, MerkleTree};
