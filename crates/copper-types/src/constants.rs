// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Physical input length:
/// [Ni, Si, Mg, Ti, Cr, Mn, SHT x3, pre-cold x2, aging temp, aging time]
pub const DIM_INPUTS: usize = 13;

/// Aging temperature and aging time.
pub const DIM_SURFACE_VARS: usize = 2;

/// Latent material state emitted by the embedding network.
pub const DIM_LATENT_VARS: usize = 6;

/// Composition + process one-hots, i.e. inputs minus surface variables.
pub const DIM_EMBEDDING_INPUT: usize = DIM_INPUTS - DIM_SURFACE_VARS;

/// Latent vector followed by the two surface variables.
pub const DIM_DICTIONARY_VAR: usize = DIM_LATENT_VARS + DIM_SURFACE_VARS;

/// Network head layout: [mean_cond, mean_hard, std_cond, std_hard].
pub const DIM_OUTPUTS: usize = 4;

pub const IDX_SHT: std::ops::Range<usize> = 6..9;
pub const IDX_PRE_COLD: std::ops::Range<usize> = 9..11;
pub const IDX_AGING_TEMP: usize = 11;
pub const IDX_AGING_TIME: usize = 12;

/// Per-feature divisors for indices 0..=11. Aging time is log-transformed instead.
pub const FEATURE_DIVISORS: [f64; DIM_INPUTS - 1] = [
    2.5,   // Ni
    0.5,   // Si
    0.05,  // Mg
    0.01,  // Ti
    0.1,   // Cr
    0.5,   // Mn
    1.0,   // SHT: no SHT
    1.0,   // SHT: air
    1.0,   // SHT: water
    1.0,   // pre-cold deform: no
    1.0,   // pre-cold deform: yes
    500.0, // aging temp [degC]
];

/// Electrical conductivity output scale [%IACS].
pub const CONDUCTIVITY_SCALE: f64 = 40.0;

/// Vickers hardness output scale [HV].
pub const HARDNESS_SCALE: f64 = 200.0;

/// Two-sided 95% normal quantile used for confidence bands.
pub const CONFIDENCE_Z_95: f64 = 1.96;
