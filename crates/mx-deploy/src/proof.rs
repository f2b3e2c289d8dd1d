// Copyright 2026 the Miximus developers
// Licensed under the Apache License, Version 2.0

//! Proof artifact: A/B/C plus the public inputs, in the same string
//! encoding as the key file, so provers and verifiers can exchange proofs
//! as plain JSON.

use std::path::Path;

use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;
use crate::vk::{element_string, parse_element};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProofRecord {
    pub a: Vec<String>,
    pub b: Vec<Vec<String>>,
    pub c: Vec<String>,
    pub input: Vec<String>,
}

fn malformed(msg: impl Into<String>) -> ArtifactError {
    ArtifactError::MalformedProof(msg.into())
}

fn g1_from(field: &str, raw: &[String]) -> Result<G1Affine, ArtifactError> {
    if raw.len() != 2 {
        return Err(malformed(format!("`{field}` must have 2 coordinates")));
    }
    let x: Fq = parse_element(&raw[0]).map_err(|e| malformed(format!("`{field}`: {e}")))?;
    let y: Fq = parse_element(&raw[1]).map_err(|e| malformed(format!("`{field}`: {e}")))?;
    let p = G1Affine::new_unchecked(x, y);
    if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(malformed(format!("`{field}` is not a valid G1 point")));
    }
    Ok(p)
}

fn g2_from(field: &str, raw: &[Vec<String>]) -> Result<G2Affine, ArtifactError> {
    if raw.len() != 2 || raw[0].len() != 2 || raw[1].len() != 2 {
        return Err(malformed(format!("`{field}` must be a 2x2 matrix")));
    }
    let coord = |s: &str| -> Result<Fq, ArtifactError> {
        parse_element(s).map_err(|e| malformed(format!("`{field}`: {e}")))
    };
    let x = Fq2::new(coord(&raw[0][0])?, coord(&raw[0][1])?);
    let y = Fq2::new(coord(&raw[1][0])?, coord(&raw[1][1])?);
    let p = G2Affine::new_unchecked(x, y);
    if !p.is_on_curve() || !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(malformed(format!("`{field}` is not a valid G2 point")));
    }
    Ok(p)
}

impl ProofRecord {
    pub fn from_arkworks(proof: &ark_groth16::Proof<Bn254>, public_inputs: &[Fr]) -> Self {
        let g1 = |p: &G1Affine| vec![element_string(&p.x), element_string(&p.y)];
        Self {
            a: g1(&proof.a),
            b: vec![
                vec![element_string(&proof.b.x.c0), element_string(&proof.b.x.c1)],
                vec![element_string(&proof.b.y.c0), element_string(&proof.b.y.c1)],
            ],
            c: g1(&proof.c),
            input: public_inputs.iter().map(element_string).collect(),
        }
    }

    pub fn to_arkworks(&self) -> Result<(ark_groth16::Proof<Bn254>, Vec<Fr>), ArtifactError> {
        let proof = ark_groth16::Proof {
            a: g1_from("a", &self.a)?,
            b: g2_from("b", &self.b)?,
            c: g1_from("c", &self.c)?,
        };
        let inputs = self
            .input
            .iter()
            .map(|s| parse_element(s).map_err(|e| malformed(format!("`input`: {e}"))))
            .collect::<Result<Vec<Fr>, _>>()?;
        Ok((proof, inputs))
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let data =
            std::fs::read_to_string(path).map_err(|source| ArtifactError::MissingKeyFile {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&data).map_err(|e| malformed(format!("invalid JSON: {e}")))
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        let data = serde_json::to_string_pretty(self).expect("proof json cannot fail");
        std::fs::write(path, data).map_err(|source| ArtifactError::MissingKeyFile {
            path: path.to_path_buf(),
            source,
        })
    }
}
