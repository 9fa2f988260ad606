//! Particle species configured by this workspace.

use serde::{Deserialize, Serialize};

/// Hadron species for which process lists are wired.
///
/// The set is fixed: the anti-baryon family plus the proton. Particle
/// definitions themselves (mass tables, decay channels) belong to the host
/// toolkit; this identifier only keys process managers and wiring tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Species {
    /// Anti-proton.
    AntiProton,
    /// Anti-neutron.
    AntiNeutron,
    /// Anti-deuteron.
    AntiDeuteron,
    /// Anti-triton.
    AntiTriton,
    /// Anti-helium-3.
    AntiHelium3,
    /// Anti-alpha.
    AntiAlpha,
    /// Anti-lambda.
    AntiLambda,
    /// Anti-sigma(+).
    AntiSigmaPlus,
    /// Anti-sigma(-).
    AntiSigmaMinus,
    /// Anti-xi(0).
    AntiXiZero,
    /// Anti-xi(-).
    AntiXiMinus,
    /// Anti-omega(-).
    AntiOmegaMinus,
    /// Proton.
    Proton,
}

impl Species {
    /// Stable lowercase label used in summaries and error context.
    pub fn label(&self) -> &'static str {
        match self {
            Species::AntiProton => "anti-proton",
            Species::AntiNeutron => "anti-neutron",
            Species::AntiDeuteron => "anti-deuteron",
            Species::AntiTriton => "anti-triton",
            Species::AntiHelium3 => "anti-helium3",
            Species::AntiAlpha => "anti-alpha",
            Species::AntiLambda => "anti-lambda",
            Species::AntiSigmaPlus => "anti-sigma-plus",
            Species::AntiSigmaMinus => "anti-sigma-minus",
            Species::AntiXiZero => "anti-xi-zero",
            Species::AntiXiMinus => "anti-xi-minus",
            Species::AntiOmegaMinus => "anti-omega-minus",
            Species::Proton => "proton",
        }
    }

    /// PDG Monte Carlo numbering code. Anti-nuclei use the ten-digit
    /// nuclear code with negative sign.
    pub fn pdg_code(&self) -> i64 {
        match self {
            Species::AntiProton => -2212,
            Species::AntiNeutron => -2112,
            Species::AntiDeuteron => -1_000_010_020,
            Species::AntiTriton => -1_000_010_030,
            Species::AntiHelium3 => -1_000_020_030,
            Species::AntiAlpha => -1_000_020_040,
            Species::AntiLambda => -3122,
            Species::AntiSigmaPlus => -3222,
            Species::AntiSigmaMinus => -3112,
            Species::AntiXiZero => -3322,
            Species::AntiXiMinus => -3312,
            Species::AntiOmegaMinus => -3334,
            Species::Proton => 2212,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let all = [
            Species::AntiProton,
            Species::AntiNeutron,
            Species::AntiDeuteron,
            Species::AntiTriton,
            Species::AntiHelium3,
            Species::AntiAlpha,
            Species::AntiLambda,
            Species::AntiSigmaPlus,
            Species::AntiSigmaMinus,
            Species::AntiXiZero,
            Species::AntiXiMinus,
            Species::AntiOmegaMinus,
            Species::Proton,
        ];
        let mut labels: Vec<_> = all.iter().map(|s| s.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), all.len());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Species::AntiSigmaPlus).unwrap();
        assert_eq!(json, "\"anti-sigma-plus\"");
    }
}
