#![cfg_attr(not(feature = "std"), no_std)]

pub mod merkle;
pub mod note;
pub mod nullifier;

pub use merkle::{MerklePath, MerkleRoot, TREE_DEPTH};
pub use note::Note;
pub use nullifier::Nullifier;
