// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Physical Input
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{DIM_INPUTS, IDX_AGING_TEMP, IDX_AGING_TIME, IDX_PRE_COLD, IDX_SHT};
use crate::error::{CopperError, CopperResult};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

pub const FEATURE_NAMES: [&str; DIM_INPUTS] = [
    "Ni",
    "Si",
    "Mg",
    "Ti",
    "Cr",
    "Mn",
    "SHT_noSHT",
    "SHT_air",
    "SHT_water",
    "PreCold_no",
    "PreCold_yes",
    "AgingTemp",
    "AgingTime",
];

/// Solution heat treatment quenching choice. Encoded at indices 6, 7, 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Quenching {
    NoSht,
    #[default]
    Air,
    Water,
}

impl Quenching {
    pub const ALL: [Quenching; 3] = [Quenching::NoSht, Quenching::Air, Quenching::Water];

    /// Map a request-builder choice string. Anything other than
    /// "No SHT" or "Water" falls back to Air.
    pub fn from_choice(choice: &str) -> Self {
        match choice {
            "No SHT" => Quenching::NoSht,
            "Water" => Quenching::Water,
            _ => Quenching::Air,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quenching::NoSht => "No SHT",
            Quenching::Air => "Air",
            Quenching::Water => "Water",
        }
    }

    pub fn one_hot(self) -> [f64; 3] {
        match self {
            Quenching::NoSht => [1.0, 0.0, 0.0],
            Quenching::Air => [0.0, 1.0, 0.0],
            Quenching::Water => [0.0, 0.0, 1.0],
        }
    }

    /// Decode a one-hot triple; `None` unless exactly one entry is 1.
    pub fn from_one_hot(group: &[f64]) -> Option<Self> {
        match one_hot_index(group)? {
            0 => Some(Quenching::NoSht),
            1 => Some(Quenching::Air),
            2 => Some(Quenching::Water),
            _ => None,
        }
    }
}

/// Pre-cold deformation choice. Encoded at indices 9, 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PreColdDeform {
    No,
    #[default]
    Yes,
}

impl PreColdDeform {
    pub const ALL: [PreColdDeform; 2] = [PreColdDeform::No, PreColdDeform::Yes];

    /// "No" selects No; everything else is Yes.
    pub fn from_choice(choice: &str) -> Self {
        if choice == "No" {
            PreColdDeform::No
        } else {
            PreColdDeform::Yes
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PreColdDeform::No => "No",
            PreColdDeform::Yes => "Yes",
        }
    }

    pub fn one_hot(self) -> [f64; 2] {
        match self {
            PreColdDeform::No => [1.0, 0.0],
            PreColdDeform::Yes => [0.0, 1.0],
        }
    }

    pub fn from_one_hot(group: &[f64]) -> Option<Self> {
        match one_hot_index(group)? {
            0 => Some(PreColdDeform::No),
            1 => Some(PreColdDeform::Yes),
            _ => None,
        }
    }
}

/// Index of the single 1.0 entry, provided every other entry is exactly 0.0.
fn one_hot_index(group: &[f64]) -> Option<usize> {
    let mut hot = None;
    for (i, &v) in group.iter().enumerate() {
        if v == 1.0 {
            if hot.is_some() {
                return None;
            }
            hot = Some(i);
        } else if v != 0.0 {
            return None;
        }
    }
    hot
}

/// Alloying element contents in wt.%.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Composition {
    pub ni: f64,
    pub si: f64,
    pub mg: f64,
    pub ti: f64,
    pub cr: f64,
    pub mn: f64,
}

impl Composition {
    pub fn to_array(&self) -> [f64; 6] {
        [self.ni, self.si, self.mg, self.ti, self.cr, self.mn]
    }
}

/// Validated 13-entry physical feature vector.
///
/// Construction enforces: length 13, all entries finite, exactly-one-hot
/// SHT and pre-cold groups, non-negative aging temperature and time.
/// Anything holding a `PhysicalInput` can skip those checks.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalInput {
    values: Array1<f64>,
}

impl PhysicalInput {
    pub fn new(
        composition: Composition,
        quenching: Quenching,
        pre_cold: PreColdDeform,
        aging_temp: f64,
        aging_time: f64,
    ) -> CopperResult<Self> {
        let mut values = Vec::with_capacity(DIM_INPUTS);
        values.extend_from_slice(&composition.to_array());
        values.extend_from_slice(&quenching.one_hot());
        values.extend_from_slice(&pre_cold.one_hot());
        values.push(aging_temp);
        values.push(aging_time);
        Self::from_array(Array1::from_vec(values))
    }

    pub fn from_slice(values: &[f64]) -> CopperResult<Self> {
        Self::from_array(Array1::from_vec(values.to_vec()))
    }

    pub fn from_array(values: Array1<f64>) -> CopperResult<Self> {
        validate_inputs(values.view())?;
        Ok(Self { values })
    }

    /// Same material and process at a different aging time.
    pub fn with_aging_time(&self, aging_time: f64) -> CopperResult<Self> {
        let mut values = self.values.clone();
        values[IDX_AGING_TIME] = aging_time;
        Self::from_array(values)
    }

    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    pub fn composition(&self) -> Composition {
        let v = &self.values;
        Composition {
            ni: v[0],
            si: v[1],
            mg: v[2],
            ti: v[3],
            cr: v[4],
            mn: v[5],
        }
    }

    pub fn quenching(&self) -> Quenching {
        self.values
            .slice(ndarray::s![IDX_SHT])
            .as_slice()
            .and_then(Quenching::from_one_hot)
            .unwrap_or_default()
    }

    pub fn pre_cold(&self) -> PreColdDeform {
        self.values
            .slice(ndarray::s![IDX_PRE_COLD])
            .as_slice()
            .and_then(PreColdDeform::from_one_hot)
            .unwrap_or_default()
    }

    /// Aging temperature [degC].
    pub fn aging_temp(&self) -> f64 {
        self.values[IDX_AGING_TEMP]
    }

    /// Aging time [min].
    pub fn aging_time(&self) -> f64 {
        self.values[IDX_AGING_TIME]
    }
}

/// Check a raw feature vector against the `PhysicalInput` invariants.
///
/// Order: length, finiteness, one-hot groups, then non-negativity of the
/// aging parameters.
pub fn validate_inputs(values: ArrayView1<f64>) -> CopperResult<()> {
    if values.len() != DIM_INPUTS {
        return Err(CopperError::InvalidInput(format!(
            "expected {DIM_INPUTS} features, got {}",
            values.len()
        )));
    }
    if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(CopperError::InvalidInput(format!(
            "{} is not finite: {v}",
            FEATURE_NAMES[i]
        )));
    }

    let sht: Vec<f64> = values.slice(ndarray::s![IDX_SHT]).to_vec();
    if one_hot_index(&sht).is_none() {
        return Err(CopperError::InvalidInput(format!(
            "SHT group must be exactly one-hot, got {sht:?}"
        )));
    }
    let pre_cold: Vec<f64> = values.slice(ndarray::s![IDX_PRE_COLD]).to_vec();
    if one_hot_index(&pre_cold).is_none() {
        return Err(CopperError::InvalidInput(format!(
            "pre-cold deformation group must be exactly one-hot, got {pre_cold:?}"
        )));
    }

    if values[IDX_AGING_TEMP] < 0.0 {
        return Err(CopperError::NegativeParameter {
            name: "aging temperature",
            value: values[IDX_AGING_TEMP],
        });
    }
    if values[IDX_AGING_TIME] < 0.0 {
        return Err(CopperError::NegativeParameter {
            name: "aging time",
            value: values[IDX_AGING_TIME],
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cu_ni_si() -> Composition {
        Composition {
            ni: 3.04,
            si: 0.68,
            mg: 0.07,
            ti: 0.0,
            cr: 0.10,
            mn: 0.0,
        }
    }

    #[test]
    fn test_quenching_choice_mapping() {
        assert_eq!(Quenching::from_choice("No SHT"), Quenching::NoSht);
        assert_eq!(Quenching::from_choice("Water"), Quenching::Water);
        assert_eq!(Quenching::from_choice("Air"), Quenching::Air);
        assert_eq!(Quenching::from_choice("oil"), Quenching::Air);
        assert_eq!(Quenching::from_choice(""), Quenching::Air);
    }

    #[test]
    fn test_pre_cold_choice_mapping() {
        assert_eq!(PreColdDeform::from_choice("No"), PreColdDeform::No);
        assert_eq!(PreColdDeform::from_choice("Yes"), PreColdDeform::Yes);
        assert_eq!(PreColdDeform::from_choice("no"), PreColdDeform::Yes);
    }

    #[test]
    fn test_one_hot_groups_sum_to_one() {
        for (expected_idx, q) in Quenching::ALL.iter().enumerate() {
            let hot = q.one_hot();
            assert_eq!(hot.iter().sum::<f64>(), 1.0);
            assert_eq!(hot[expected_idx], 1.0);
            assert_eq!(Quenching::from_one_hot(&hot), Some(*q));
        }
        for (expected_idx, p) in PreColdDeform::ALL.iter().enumerate() {
            let hot = p.one_hot();
            assert_eq!(hot.iter().sum::<f64>(), 1.0);
            assert_eq!(hot[expected_idx], 1.0);
            assert_eq!(PreColdDeform::from_one_hot(&hot), Some(*p));
        }
    }

    #[test]
    fn test_input_layout() {
        let input =
            PhysicalInput::new(cu_ni_si(), Quenching::Water, PreColdDeform::No, 475.0, 60.0)
                .unwrap();
        let v = input.values();
        assert_eq!(v.len(), DIM_INPUTS);
        assert!((v[0] - 3.04).abs() < 1e-15);
        assert_eq!(v.slice(ndarray::s![6..11]).to_vec(), vec![0.0, 0.0, 1.0, 1.0, 0.0]);
        assert_eq!(input.aging_temp(), 475.0);
        assert_eq!(input.aging_time(), 60.0);
        assert_eq!(input.quenching(), Quenching::Water);
        assert_eq!(input.pre_cold(), PreColdDeform::No);
        assert_eq!(input.composition(), cu_ni_si());
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = PhysicalInput::from_slice(&[0.0; 12]).unwrap_err();
        match err {
            CopperError::InvalidInput(msg) => assert!(msg.contains("got 12"), "{msg}"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
        assert!(matches!(
            PhysicalInput::from_slice(&[0.0; 14]),
            Err(CopperError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut raw = [2.78, 0.8, 0.0, 0.0, 0.0, 0.5, 0.0, 1.0, 0.0, 0.0, 1.0, 500.0, 0.0];
        raw[2] = f64::NAN;
        let err = PhysicalInput::from_slice(&raw).unwrap_err();
        assert!(matches!(err, CopperError::InvalidInput(_)));
        assert!(err.to_string().contains("Mg"));

        raw[2] = 0.0;
        raw[12] = f64::INFINITY;
        assert!(matches!(
            PhysicalInput::from_slice(&raw),
            Err(CopperError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_broken_one_hot() {
        let two_hot = [2.78, 0.8, 0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 0.0, 0.0, 1.0, 500.0, 0.0];
        assert!(matches!(
            PhysicalInput::from_slice(&two_hot),
            Err(CopperError::InvalidInput(_))
        ));
        let cold_none = [2.78, 0.8, 0.0, 0.0, 0.0, 0.5, 0.0, 1.0, 0.0, 0.0, 0.0, 500.0, 0.0];
        assert!(matches!(
            PhysicalInput::from_slice(&cold_none),
            Err(CopperError::InvalidInput(_))
        ));
        let fractional = [2.78, 0.8, 0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 0.0, 0.0, 1.0, 500.0, 0.0];
        assert!(matches!(
            PhysicalInput::from_slice(&fractional),
            Err(CopperError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_negative_aging() {
        let err = PhysicalInput::new(cu_ni_si(), Quenching::Air, PreColdDeform::Yes, -1.0, 0.0)
            .unwrap_err();
        assert!(matches!(
            err,
            CopperError::NegativeParameter {
                name: "aging temperature",
                ..
            }
        ));
        let err = PhysicalInput::new(cu_ni_si(), Quenching::Air, PreColdDeform::Yes, 450.0, -5.0)
            .unwrap_err();
        assert!(matches!(
            err,
            CopperError::NegativeParameter {
                name: "aging time",
                ..
            }
        ));
    }

    #[test]
    fn test_with_aging_time_revalidates() {
        let input =
            PhysicalInput::new(cu_ni_si(), Quenching::Air, PreColdDeform::Yes, 450.0, 0.0)
                .unwrap();
        let later = input.with_aging_time(120.0).unwrap();
        assert_eq!(later.aging_time(), 120.0);
        assert_eq!(later.aging_temp(), 450.0);
        assert!(input.with_aging_time(-0.5).is_err());
    }
}
