use ark_bn254::Fr;

/// Public tag that burns a note when its spend proof is accepted. The
/// pool keys its spent-set on this, never on the raw field element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nullifier(pub Fr);
