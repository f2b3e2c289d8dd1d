// Copyright 2026 the Miximus developers
// Licensed under the Apache License, Version 2.0

//! The verification-key artifact: a typed record with fixed arity,
//! validated when the JSON is loaded rather than wherever it is used.
//!
//! Layout matches the key files the circuit tooling emits: `alpha` is a
//! G1 point as two field elements, `beta`/`gamma`/`delta` are G2 points
//! as two pairs, and `gammaABC` is one G1 point per public input plus a
//! constant term. Elements are decimal or `0x`-hex strings.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use ark_bn254::Fq;
use ark_ff::PrimeField;
use serde::Deserialize;
use serde_json::json;

use crate::error::ArtifactError;

/// Groth16 verification key over ALT_BN128, as carried by the artifact.
///
/// Invariant: `gamma_abc.len() == 1 + public_input_count()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationKey {
    pub alpha: [Fq; 2],
    pub beta: [[Fq; 2]; 2],
    pub gamma: [[Fq; 2]; 2],
    pub delta: [[Fq; 2]; 2],
    pub gamma_abc: Vec<[Fq; 2]>,
}

/// Parse a decimal or `0x`-hex field element.
pub(crate) fn parse_element<F: PrimeField>(s: &str) -> Result<F, String> {
    let s = s.trim();
    if let Some(h) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let padded = if h.len() % 2 == 1 {
            format!("0{h}")
        } else {
            h.to_string()
        };
        let bytes = hex::decode(&padded).map_err(|e| format!("bad hex `{s}`: {e}"))?;
        if bytes.len() > 32 {
            return Err(format!("element `{s}` exceeds 32 bytes"));
        }
        Ok(F::from_be_bytes_mod_order(&bytes))
    } else {
        F::from_str(s).map_err(|_| format!("cannot parse field element `{s}`"))
    }
}

pub(crate) fn element_string<F: PrimeField + Display>(f: &F) -> String {
    format!("{f}")
}

#[derive(Deserialize)]
struct RawKey {
    alpha: Option<Vec<String>>,
    beta: Option<Vec<Vec<String>>>,
    gamma: Option<Vec<Vec<String>>>,
    delta: Option<Vec<Vec<String>>>,
    #[serde(rename = "gammaABC")]
    gamma_abc: Option<Vec<Vec<String>>>,
}

fn malformed(msg: impl Into<String>) -> ArtifactError {
    ArtifactError::MalformedKey(msg.into())
}

fn parse_pair(field: &str, raw: &[String]) -> Result<[Fq; 2], ArtifactError> {
    if raw.len() != 2 {
        return Err(malformed(format!(
            "`{field}` must have 2 elements, got {}",
            raw.len()
        )));
    }
    let a = parse_element(&raw[0]).map_err(|e| malformed(format!("`{field}`: {e}")))?;
    let b = parse_element(&raw[1]).map_err(|e| malformed(format!("`{field}`: {e}")))?;
    Ok([a, b])
}

fn parse_pair_of_pairs(field: &str, raw: &[Vec<String>]) -> Result<[[Fq; 2]; 2], ArtifactError> {
    if raw.len() != 2 {
        return Err(malformed(format!(
            "`{field}` must have 2 rows, got {}",
            raw.len()
        )));
    }
    Ok([parse_pair(field, &raw[0])?, parse_pair(field, &raw[1])?])
}

impl VerificationKey {
    /// Read and validate the JSON artifact at `path`.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let data = std::fs::read_to_string(path).map_err(|source| {
            ArtifactError::MissingKeyFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json_str(&data)
    }

    pub fn from_json_str(data: &str) -> Result<Self, ArtifactError> {
        let raw: RawKey =
            serde_json::from_str(data).map_err(|e| malformed(format!("invalid JSON: {e}")))?;

        let alpha = raw.alpha.ok_or_else(|| malformed("missing field `alpha`"))?;
        let beta = raw.beta.ok_or_else(|| malformed("missing field `beta`"))?;
        let gamma = raw.gamma.ok_or_else(|| malformed("missing field `gamma`"))?;
        let delta = raw.delta.ok_or_else(|| malformed("missing field `delta`"))?;
        let gamma_abc = raw
            .gamma_abc
            .ok_or_else(|| malformed("missing field `gammaABC`"))?;
        if gamma_abc.is_empty() {
            return Err(malformed("`gammaABC` must be non-empty"));
        }

        Ok(Self {
            alpha: parse_pair("alpha", &alpha)?,
            beta: parse_pair_of_pairs("beta", &beta)?,
            gamma: parse_pair_of_pairs("gamma", &gamma)?,
            delta: parse_pair_of_pairs("delta", &delta)?,
            gamma_abc: gamma_abc
                .iter()
                .map(|p| parse_pair("gammaABC", p))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Number of public inputs the verifier expects (constant term excluded).
    pub fn public_input_count(&self) -> usize {
        self.gamma_abc.len() - 1
    }

    /// Build the record from an arkworks key (after trusted setup).
    /// G2 coordinates are carried as `[c0, c1]` per row.
    pub fn from_arkworks(vk: &ark_groth16::VerifyingKey<ark_bn254::Bn254>) -> Self {
        let g2 = |p: &ark_bn254::G2Affine| {
            [[p.x.c0, p.x.c1], [p.y.c0, p.y.c1]]
        };
        Self {
            alpha: [vk.alpha_g1.x, vk.alpha_g1.y],
            beta: g2(&vk.beta_g2),
            gamma: g2(&vk.gamma_g2),
            delta: g2(&vk.delta_g2),
            gamma_abc: vk.gamma_abc_g1.iter().map(|p| [p.x, p.y]).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let pair = |p: &[Fq; 2]| vec![element_string(&p[0]), element_string(&p[1])];
        let quad = |p: &[[Fq; 2]; 2]| vec![pair(&p[0]), pair(&p[1])];
        json!({
            "alpha": pair(&self.alpha),
            "beta": quad(&self.beta),
            "gamma": quad(&self.gamma),
            "delta": quad(&self.delta),
            "gammaABC": self.gamma_abc.iter().map(pair).collect::<Vec<_>>(),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        let data = serde_json::to_string_pretty(&self.to_json())
            .expect("vk json serialization cannot fail");
        std::fs::write(path, data).map_err(|source| ArtifactError::MissingKeyFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> String {
        r#"{
            "alpha": ["1", "2"],
            "beta": [["3", "4"], ["5", "6"]],
            "gamma": [["7", "8"], ["9", "10"]],
            "delta": [["11", "12"], ["13", "14"]],
            "gammaABC": [["15", "16"], ["17", "18"]]
        }"#
        .to_string()
    }

    #[test]
    fn parses_sample_key() {
        let vk = VerificationKey::from_json_str(&sample_json()).unwrap();
        assert_eq!(vk.alpha, [Fq::from(1u64), Fq::from(2u64)]);
        assert_eq!(vk.beta[1][0], Fq::from(5u64));
        assert_eq!(vk.gamma_abc.len(), 2);
        assert_eq!(vk.public_input_count(), 1);
    }

    #[test]
    fn missing_alpha_is_malformed() {
        let json = r#"{
            "beta": [["3", "4"], ["5", "6"]],
            "gamma": [["7", "8"], ["9", "10"]],
            "delta": [["11", "12"], ["13", "14"]],
            "gammaABC": [["15", "16"]]
        }"#;
        let err = VerificationKey::from_json_str(json).unwrap_err();
        assert!(matches!(err, ArtifactError::MalformedKey(_)), "{err}");
        assert!(err.to_string().contains("alpha"));
    }

    #[test]
    fn wrong_alpha_arity_is_malformed() {
        let json = sample_json().replace(r#""alpha": ["1", "2"]"#, r#""alpha": ["1"]"#);
        let err = VerificationKey::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ArtifactError::MalformedKey(_)), "{err}");
    }

    #[test]
    fn empty_gamma_abc_is_malformed() {
        let json = sample_json().replace(
            r#""gammaABC": [["15", "16"], ["17", "18"]]"#,
            r#""gammaABC": []"#,
        );
        let err = VerificationKey::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ArtifactError::MalformedKey(_)), "{err}");
    }

    #[test]
    fn hex_elements_accepted() {
        let json = sample_json().replace(r#""alpha": ["1", "2"]"#, r#""alpha": ["0x1", "0x02"]"#);
        let vk = VerificationKey::from_json_str(&json).unwrap();
        assert_eq!(vk.alpha, [Fq::from(1u64), Fq::from(2u64)]);
    }

    #[test]
    fn garbage_element_is_malformed() {
        let json = sample_json().replace(r#""2""#, r#""not-a-number""#);
        let err = VerificationKey::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ArtifactError::MalformedKey(_)), "{err}");
    }

    #[test]
    fn missing_file_error() {
        let err = VerificationKey::load(Path::new("/nonexistent/miximus.vk.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::MissingKeyFile { .. }), "{err}");
    }

    #[test]
    fn json_round_trip() {
        let vk = VerificationKey::from_json_str(&sample_json()).unwrap();
        let reparsed =
            VerificationKey::from_json_str(&serde_json::to_string(&vk.to_json()).unwrap()).unwrap();
        assert_eq!(vk, reparsed);
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vk.json");
        let vk = VerificationKey::from_json_str(&sample_json()).unwrap();
        vk.save(&path).unwrap();
        assert_eq!(VerificationKey::load(&path).unwrap(), vk);
    }
}
