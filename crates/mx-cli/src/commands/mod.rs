pub mod deploy;
pub mod deposit;
pub mod genkeys;
pub mod prove;
pub mod verify;

use ark_std::rand::{rngs::StdRng, SeedableRng};

/// Fresh RNG for key and note generation, seeded from wall-clock
/// entropy mixed with the process id.
pub fn crypto_rng() -> StdRng {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    StdRng::seed_from_u64(now.as_nanos() as u64 ^ u64::from(std::process::id()))
}
