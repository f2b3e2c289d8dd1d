use ark_bn254::Fr;
use ark_r1cs_std::fields::{fp::FpVar, FieldVar};
use ark_relations::r1cs::SynthesisError;
use mx_mimc::round_constants;

/// In-circuit MiMC-e7 cipher. Each round costs four multiplications
/// (square, square, mul, mul) for the degree-7 S-box.
pub fn mimc_e7_var(msg: &FpVar<Fr>, key: &FpVar<Fr>) -> Result<FpVar<Fr>, SynthesisError> {
    let mut x = msg.clone();
    for c in round_constants() {
        let t = &x + key + FpVar::constant(c);
        let t2 = t.square()?;
        let t4 = t2.square()?;
        let t6 = &t4 * &t2;
        x = &t6 * &t;
    }
    Ok(x + key)
}

/// In-circuit Miyaguchi-Preneel chaining, matching `mx_mimc::mimc_hash`.
pub fn mimc_hash_var(iv: Fr, inputs: &[FpVar<Fr>]) -> Result<FpVar<Fr>, SynthesisError> {
    let mut h = FpVar::constant(iv);
    for m in inputs {
        let enc = mimc_e7_var(m, &h)?;
        h = &enc + &h + m;
    }
    Ok(h)
}
