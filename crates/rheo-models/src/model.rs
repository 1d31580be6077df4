//! Flow-curve model trait.

use rheo_core::Real;

/// Trait for constitutive flow-curve models.
///
/// Implementations must be thread-safe (Send + Sync) since model values are
/// immutable after construction and may be evaluated from multiple threads.
///
/// A flow-curve model maps shear rate [1/s] to shear stress [Pa] through a
/// closed-form expression. The display formula is carried as data alongside
/// the callable so renderers can show the math without reflection tricks.
pub trait FlowModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &'static str;

    /// LaTeX display string of the model formula.
    fn formula(&self) -> &'static str;

    /// Shear stress [Pa] at the given shear rate [1/s].
    ///
    /// No input validation: domain violations (negative rates under
    /// fractional powers, division by a zero critical shear rate) yield
    /// NaN/inf per standard float semantics, never an error.
    fn stress(&self, shear_rate: Real) -> Real;

    /// Evaluate the flow curve over a shear-rate grid.
    ///
    /// Flow curves are conventionally sampled per decade of shear rate;
    /// [`rheo_core::geomspace`] builds such a grid.
    ///
    /// ```
    /// use rheo_core::geomspace;
    /// use rheo_models::{Carreau, FlowModel};
    ///
    /// let grid = geomspace(0.01, 100.0, 9);
    /// let curve = Carreau::default().stress_profile(&grid);
    /// assert_eq!(curve.len(), grid.len());
    /// ```
    fn stress_profile(&self, shear_rates: &[Real]) -> Vec<Real> {
        shear_rates.iter().map(|&x| self.stress(x)).collect()
    }

    /// Apparent viscosity [Pa s] at the given shear rate, σ/γ̇.
    ///
    /// At zero shear rate this is 0/0 for viscous models and σy/0 for
    /// yield-stress models; both propagate as NaN/inf.
    fn viscosity(&self, shear_rate: Real) -> Real {
        self.stress(shear_rate) / shear_rate
    }
}
