// Copyright 2024 The PECOS Developers
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License.You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use stab_core::{IndexableElement, SimRng};

use crate::clifford_gateable::{CliffordGateable, MeasurementResult};
use crate::quantum_simulator::QuantumSimulator;
use crate::tableau::Tableau;

/// A `TableauSim` backed by `ChaCha8Rng`, the convenience constructor most callers reach for.
#[expect(clippy::module_name_repetitions)]
pub type StdTableauSim = TableauSim<ChaCha8Rng>;

/// The stabilizer tableau simulator, generic over its RNG backend.
///
/// `TableauSim` owns a `Tableau` (the packed-bit CHP core) plus an `R: SimRng` used only to draw
/// the `coin` bit the tableau's `measure` routine needs for non-deterministic outcomes; the
/// tableau itself never touches randomness.
#[derive(Debug, Clone)]
pub struct TableauSim<R: SimRng> {
    tableau: Tableau,
    rng: R,
}

impl<R: SimRng> TableauSim<R> {
    /// Builds a new `n`-qubit simulator in the `|0...0>` state, seeding the RNG from entropy.
    ///
    /// # Panics
    /// Panics if the tableau's backing storage cannot be allocated (construction failure is not
    /// expected to be recoverable at circuit-construction time).
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            tableau: Tableau::new(n).expect("failed to allocate tableau"),
            rng: R::from_entropy(),
        }
    }

    /// Builds a new `n`-qubit simulator whose measurement coin is drawn from `rng`.
    ///
    /// # Panics
    /// Panics if the tableau's backing storage cannot be allocated.
    #[must_use]
    pub fn with_rng(n: usize, rng: R) -> Self {
        Self {
            tableau: Tableau::new(n).expect("failed to allocate tableau"),
            rng,
        }
    }

    /// Read-only access to the underlying tableau (for inspectors, property tests, or `gaussian`
    /// / `seed` based basis-state enumeration).
    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Mutable access to the underlying tableau.
    pub fn tableau_mut(&mut self) -> &mut Tableau {
        &mut self.tableau
    }

    /// Produces an independent deep copy of this simulator (and its RNG state).
    #[must_use]
    pub fn branch(&self) -> Self
    where
        R: Clone,
    {
        self.clone()
    }
}

impl<R: SimRng> QuantumSimulator for TableauSim<R> {
    fn reset(&mut self) -> &mut Self {
        let n = self.tableau.num_qubits();
        self.tableau = Tableau::new(n).expect("failed to allocate tableau");
        self
    }
}

impl<T: IndexableElement, R: SimRng> CliffordGateable<T> for TableauSim<R> {
    #[inline]
    fn h(&mut self, q: T) -> &mut Self {
        self.tableau.hadamard(q.to_index());
        self
    }

    #[inline]
    fn sz(&mut self, q: T) -> &mut Self {
        self.tableau.phase(q.to_index());
        self
    }

    #[inline]
    fn cx(&mut self, q1: T, q2: T) -> &mut Self {
        self.tableau.cnot(q1.to_index(), q2.to_index());
        self
    }

    #[inline]
    fn mz(&mut self, q: T) -> MeasurementResult {
        let coin = self.rng.gen::<f64>() < 0.5;
        self.tableau.measure(q.to_index(), false, coin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use stab_core::QubitId;

    #[test]
    fn bell_pair_via_clifford_gateable() {
        let mut sim = StdTableauSim::with_rng(2, ChaCha8Rng::seed_from_u64(7));
        sim.h(QubitId(0)).cx(QubitId(0), QubitId(1));
        let first = sim.mz(QubitId(0));
        let second = sim.mz(QubitId(1));
        assert_eq!(first.outcome, second.outcome);
        assert!(second.is_deterministic);
    }

    #[test]
    fn reset_returns_to_zero_state() {
        let mut sim = StdTableauSim::with_rng(1, ChaCha8Rng::seed_from_u64(1));
        sim.h(QubitId(0));
        sim.reset();
        let result = sim.mz(QubitId(0));
        assert!(!result.outcome);
        assert!(result.is_deterministic);
    }
}
