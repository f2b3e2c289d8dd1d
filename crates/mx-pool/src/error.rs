// Copyright 2026 the Miximus developers
// Licensed under the Apache License, Version 2.0

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("malformed verification key: {0}")]
    MalformedKey(String),

    #[error("tree is full")]
    TreeFull,

    #[error("unknown merkle root")]
    UnknownRoot,

    #[error("nullifier already spent")]
    NullifierSpent,

    #[error("proof verification failed")]
    InvalidProof,
}
