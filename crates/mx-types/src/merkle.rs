extern crate alloc;

use alloc::vec::Vec;
use ark_bn254::Fr;

/// Depth of the commitment tree (2^29 leaves).
pub const TREE_DEPTH: usize = 29;

#[derive(Clone, Debug)]
pub struct MerklePath {
    pub siblings: Vec<Fr>,
    /// true at level i means the walked node is the right child there.
    pub indices: Vec<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleRoot(pub Fr);
