//! Classical flow-curve models.
//!
//! Each model is a parameter struct with literature defaults, implementing
//! [`FlowModel`]. Defaults follow the values used throughout the
//! accompanying bibliography examples; they are representative, not fitted.

use crate::model::FlowModel;
use rheo_core::Real;
use serde::{Deserialize, Serialize};

/// Newtonian fluid: stress proportional to shear rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Newtonian {
    /// Viscosity [Pa s]
    pub eta: Real,
}

impl Default for Newtonian {
    fn default() -> Self {
        Self { eta: 0.1 }
    }
}

impl FlowModel for Newtonian {
    fn name(&self) -> &'static str {
        "Newtonian"
    }

    fn formula(&self) -> &'static str {
        r"\sigma=\eta\cdot\dot\gamma"
    }

    fn stress(&self, shear_rate: Real) -> Real {
        self.eta * shear_rate
    }
}

/// Power-law (Ostwald-de Waele) fluid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLaw {
    /// Shear-thinning index (1 for Newtonian) []
    pub n: Real,
    /// Consistency index [Pa s^n]
    pub k: Real,
}

impl Default for PowerLaw {
    fn default() -> Self {
        Self { n: 0.5, k: 0.1 }
    }
}

impl FlowModel for PowerLaw {
    fn name(&self) -> &'static str {
        "Power-law"
    }

    fn formula(&self) -> &'static str {
        r"\sigma=K\cdot\dot\gamma^n"
    }

    fn stress(&self, shear_rate: Real) -> Real {
        self.k * shear_rate.powf(self.n)
    }
}

/// Bingham plastic: yield stress plus Newtonian background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bingham {
    /// Yield stress [Pa]
    pub ystress: Real,
    /// Background viscosity [Pa s]
    pub eta_bg: Real,
}

impl Default for Bingham {
    fn default() -> Self {
        Self {
            ystress: 1.0,
            eta_bg: 0.1,
        }
    }
}

impl FlowModel for Bingham {
    fn name(&self) -> &'static str {
        "Bingham"
    }

    fn formula(&self) -> &'static str {
        r"\sigma=\sigma_y+\eta_{bg}\cdot\dot\gamma"
    }

    fn stress(&self, shear_rate: Real) -> Real {
        self.ystress + self.eta_bg * shear_rate
    }
}

/// Three-component model for yield-stress fluids (Caggioni et al.).
///
/// Adds a square-root transition term between the yield plateau and the
/// Newtonian background, with the crossover set by the critical shear rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreeComponent {
    /// Yield stress [Pa]
    pub ystress: Real,
    /// Background viscosity [Pa s]
    pub eta_bg: Real,
    /// Critical shear rate [1/s]
    pub gammadot_crit: Real,
}

impl Default for ThreeComponent {
    fn default() -> Self {
        Self {
            ystress: 1.0,
            eta_bg: 0.1,
            gammadot_crit: 0.1,
        }
    }
}

impl FlowModel for ThreeComponent {
    fn name(&self) -> &'static str {
        "Three-component"
    }

    fn formula(&self) -> &'static str {
        r"\sigma=\sigma_y+\sigma_y\cdot(\dot\gamma/\dot\gamma_c)^{0.5}+\eta_{bg}\cdot\dot\gamma"
    }

    fn stress(&self, shear_rate: Real) -> Real {
        self.ystress
            + self.ystress * (shear_rate / self.gammadot_crit).powf(0.5)
            + self.eta_bg * shear_rate
    }
}

/// Herschel-Bulkley model: yield stress plus power-law background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HerschelBulkley {
    /// Yield stress [Pa]
    pub ystress: Real,
    /// Consistency index [Pa s^n]
    pub k: Real,
    /// Shear-thinning index []
    pub n: Real,
}

impl Default for HerschelBulkley {
    fn default() -> Self {
        Self {
            ystress: 1.0,
            k: 1.0,
            n: 0.5,
        }
    }
}

impl FlowModel for HerschelBulkley {
    fn name(&self) -> &'static str {
        "Herschel-Bulkley"
    }

    fn formula(&self) -> &'static str {
        r"\sigma=\sigma_y+K\cdot\dot\gamma^n"
    }

    fn stress(&self, shear_rate: Real) -> Real {
        self.ystress + self.k * shear_rate.powf(self.n)
    }
}

/// Casson model, common for blood and chocolate rheology.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Casson {
    /// Yield stress [Pa]
    pub ystress: Real,
    /// Background viscosity [Pa s]
    pub eta_bg: Real,
}

impl Default for Casson {
    fn default() -> Self {
        Self {
            ystress: 1.0,
            eta_bg: 0.1,
        }
    }
}

impl FlowModel for Casson {
    fn name(&self) -> &'static str {
        "Casson"
    }

    fn formula(&self) -> &'static str {
        r"\sigma=(\sigma_y^{0.5}+(\eta_{bg}\cdot\dot\gamma)^{0.5})^2"
    }

    fn stress(&self, shear_rate: Real) -> Real {
        let root = self.ystress.powf(0.5) + (self.eta_bg * shear_rate).powf(0.5);
        root * root
    }
}

/// Carreau model: shear-thinning viscosity with a low-shear plateau.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Carreau {
    /// Low-shear viscosity [Pa s]
    pub eta_0: Real,
    /// Critical shear rate [1/s]
    pub gammadot_crit: Real,
    /// Shear-thinning exponent []
    pub n: Real,
}

impl Default for Carreau {
    fn default() -> Self {
        Self {
            eta_0: 1.0,
            gammadot_crit: 1.0,
            n: 0.5,
        }
    }
}

impl FlowModel for Carreau {
    fn name(&self) -> &'static str {
        "Carreau"
    }

    fn formula(&self) -> &'static str {
        r"\sigma=\dot\gamma\cdot\eta_0\cdot(1+(\dot\gamma/\dot\gamma_c)^2)^{(n-1)/2}"
    }

    fn stress(&self, shear_rate: Real) -> Real {
        let thinning = (1.0 + (shear_rate / self.gammadot_crit).powi(2)).powf((self.n - 1.0) / 2.0);
        shear_rate * self.eta_0 * thinning
    }
}

/// Carreau-Yasuda model with distinct zero- and infinite-shear viscosities.
///
/// No literature defaults exist for this four-parameter form, so there is
/// no `Default` impl; construct it explicitly with [`CarreauYasuda::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarreauYasuda {
    /// Zero-shear viscosity [Pa s]
    pub mu_0: Real,
    /// Infinite-shear viscosity [Pa s]
    pub mu_inf: Real,
    /// Relaxation time [s]
    pub lambda_1: Real,
    /// Power-law index []
    pub n: Real,
}

impl CarreauYasuda {
    pub fn new(mu_0: Real, mu_inf: Real, lambda_1: Real, n: Real) -> Self {
        Self {
            mu_0,
            mu_inf,
            lambda_1,
            n,
        }
    }
}

impl FlowModel for CarreauYasuda {
    fn name(&self) -> &'static str {
        "Carreau-Yasuda"
    }

    fn formula(&self) -> &'static str {
        r"\sigma=\dot\gamma\cdot(\mu_\infty+(\mu_0-\mu_\infty)\cdot(1+(\lambda_1\dot\gamma)^2)^{(n-1)/2})"
    }

    fn stress(&self, shear_rate: Real) -> Real {
        let thinning = (1.0 + (self.lambda_1 * shear_rate).powi(2)).powf((self.n - 1.0) / 2.0);
        shear_rate * (self.mu_inf + (self.mu_0 - self.mu_inf) * thinning)
    }
}

/// Cross model: shear-thinning between two viscosity plateaus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cross {
    /// Infinite-shear viscosity [Pa s]
    pub eta_inf: Real,
    /// Zero-shear viscosity [Pa s]
    pub eta_0: Real,
    /// Shear-thinning index []
    pub n: Real,
    /// Critical shear rate [1/s]
    pub gammadot_crit: Real,
}

impl Default for Cross {
    fn default() -> Self {
        Self {
            eta_inf: 0.001,
            eta_0: 1.0,
            n: 0.5,
            gammadot_crit: 1.0,
        }
    }
}

impl FlowModel for Cross {
    fn name(&self) -> &'static str {
        "Cross"
    }

    fn formula(&self) -> &'static str {
        r"\sigma=\dot\gamma\cdot\eta_\infty+\dot\gamma\cdot(\eta_0-\eta_\infty)/(1+(\dot\gamma/\dot\gamma_c)^n)"
    }

    fn stress(&self, shear_rate: Real) -> Real {
        shear_rate * self.eta_inf
            + shear_rate * (self.eta_0 - self.eta_inf)
                / (1.0 + (shear_rate / self.gammadot_crit).powf(self.n))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rheo_core::{Tolerances, nearly_equal};

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        }
    }

    proptest! {
        #[test]
        fn herschel_bulkley_without_yield_is_powerlaw(
            x in 0.0_f64..1e3,
            k in 1e-3_f64..1e2,
            n in 0.05_f64..1.5,
        ) {
            let hb = HerschelBulkley { ystress: 0.0, k, n };
            let pl = PowerLaw { n, k };
            prop_assert!(nearly_equal(hb.stress(x), pl.stress(x), tol()));
        }

        #[test]
        fn bingham_without_yield_is_newtonian(x in 0.0_f64..1e3, eta in 1e-4_f64..1e2) {
            let bingham = Bingham { ystress: 0.0, eta_bg: eta };
            let newtonian = Newtonian { eta };
            prop_assert!(nearly_equal(bingham.stress(x), newtonian.stress(x), tol()));
        }

        #[test]
        fn cross_with_equal_plateaus_is_newtonian(x in 0.0_f64..1e3, eta in 1e-4_f64..1e2) {
            // the thinning term vanishes when eta_inf == eta_0
            let cross = Cross { eta_inf: eta, eta_0: eta, ..Cross::default() };
            prop_assert!(nearly_equal(cross.stress(x), eta * x, tol()));
        }
    }
}
