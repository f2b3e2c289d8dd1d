use ark_bn254::Fr;
use ark_ff::UniformRand;
use ark_std::rand::Rng;

/// A shielded note: the nullifier tags the eventual spend, the preimage
/// stays secret until then. The leaf commitment is derived in `mx-mimc`.
#[derive(Clone, Debug)]
pub struct Note {
    pub nullifier: Fr,
    pub preimage: Fr,
}

impl Note {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            nullifier: Fr::rand(rng),
            preimage: Fr::rand(rng),
        }
    }

    pub fn with_parts(nullifier: Fr, preimage: Fr) -> Self {
        Self { nullifier, preimage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::test_rng;

    #[test]
    fn test_note_creation() {
        let mut rng = test_rng();
        let n1 = Note::new(&mut rng);
        let n2 = Note::new(&mut rng);
        // Fresh randomness per note
        assert_ne!(n1.nullifier, n2.nullifier);
        assert_ne!(n1.preimage, n2.preimage);
    }
}
