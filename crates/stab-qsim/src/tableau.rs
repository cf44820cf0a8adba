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

//! The stabilizer tableau: packed-bit storage and the CHP primitive operations.
//!
//! This module is a direct generalization of Aaronson & Gottesman's CHP algorithm
//! (<https://arxiv.org/abs/quant-ph/0406196>) to an arbitrary qubit count, following the reference
//! `chp.cpp` implementation word for word in its row/column arithmetic. The tableau tracks an
//! n-qubit stabilizer state as `2n` Pauli generators (`n` destabilizers followed by `n`
//! stabilizers) plus one scratch row, rather than a `2^n` amplitude vector.

use log::{debug, trace};
use stab_core::TableauError;

/// Bits packed per storage word.
const WORD_BITS: usize = 32;

/// Measurement outcome together with whether it was forced by the current stabilizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementResult {
    /// `true` for the `|1>` outcome, `false` for `|0>`.
    pub outcome: bool,
    /// `true` if the state was already in a Z eigenstate for this qubit.
    pub is_deterministic: bool,
}

impl MeasurementResult {
    /// Reconstructs the four-way `{0,1,2,3}` code used by the reference `measure` routine:
    /// 0/1 for a deterministic 0/1 outcome, 2/3 for a random 0/1 outcome.
    #[must_use]
    pub fn code(self) -> u8 {
        u8::from(self.outcome) + if self.is_deterministic { 0 } else { 2 }
    }
}

/// The stabilizer/destabilizer tableau of an n-qubit register.
///
/// Rows `0..n` are the destabilizer generators, rows `n..2n` are the stabilizer generators whose
/// joint +1 eigenspace is the tracked state, and row `2n` is a scratch row clobbered by
/// `row_swap`, determinate measurement, and `seed`. Column `j` of row `i`'s x/z matrices gives the
/// exponent of X/Z on qubit `j` in that row's Pauli operator; the pair encodes `I`, `X`, `Z`, or
/// `Y` (both bits set). Each matrix is one flat `Vec<u32>` of `stride * (2n + 1)` words rather
/// than an array of row pointers, one allocation per matrix instead of `2n + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tableau {
    n: usize,
    stride: usize,
    x: Vec<u32>,
    z: Vec<u32>,
    r: Vec<u8>,
}

impl Tableau {
    /// Builds the tableau of the `|0...0>` state on `n` qubits.
    ///
    /// # Errors
    /// Returns `TableauError::ResourceExhausted` if the backing storage cannot be allocated; no
    /// partially-built tableau is returned in that case.
    ///
    /// # Panics
    /// Debug builds assert `n >= 1` (contract violation otherwise, per the caller contract this
    /// kernel operates under).
    pub fn new(n: usize) -> Result<Self, TableauError> {
        debug_assert!(n >= 1, "tableau requires at least one qubit");
        let stride = n / WORD_BITS + 1;
        let rows = 2 * n + 1;
        let words = stride * rows;

        let mut x = Vec::new();
        let mut z = Vec::new();
        let mut r = Vec::new();
        x.try_reserve_exact(words)
            .map_err(|_| TableauError::ResourceExhausted)?;
        z.try_reserve_exact(words)
            .map_err(|_| TableauError::ResourceExhausted)?;
        r.try_reserve_exact(rows)
            .map_err(|_| TableauError::ResourceExhausted)?;
        x.resize(words, 0);
        z.resize(words, 0);
        r.resize(rows, 0);

        let mut tableau = Self { n, stride, x, z, r };
        for i in 0..n {
            tableau.set_x(i, i, true);
        }
        for i in n..2 * n {
            tableau.set_z(i, i - n, true);
        }
        trace!("initialized tableau for {n} qubits, stride {stride}");
        Ok(tableau)
    }

    /// Number of qubits this tableau tracks.
    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.n
    }

    /// Index of the scratch row (`2n`).
    #[must_use]
    fn scratch_row(&self) -> usize {
        2 * self.n
    }

    #[inline]
    fn word_offset(&self, row: usize, col: usize) -> (usize, u32) {
        (row * self.stride + col / WORD_BITS, 1 << (col % WORD_BITS))
    }

    #[inline]
    fn get_x(&self, row: usize, col: usize) -> bool {
        let (word, mask) = self.word_offset(row, col);
        self.x[word] & mask != 0
    }

    #[inline]
    fn get_z(&self, row: usize, col: usize) -> bool {
        let (word, mask) = self.word_offset(row, col);
        self.z[word] & mask != 0
    }

    #[inline]
    fn set_x(&mut self, row: usize, col: usize, value: bool) {
        let (word, mask) = self.word_offset(row, col);
        if value {
            self.x[word] |= mask;
        } else {
            self.x[word] &= !mask;
        }
    }

    #[inline]
    fn set_z(&mut self, row: usize, col: usize, value: bool) {
        let (word, mask) = self.word_offset(row, col);
        if value {
            self.z[word] |= mask;
        } else {
            self.z[word] &= !mask;
        }
    }

    #[inline]
    fn xor_x(&mut self, row: usize, col: usize, value: bool) {
        if value {
            let (word, mask) = self.word_offset(row, col);
            self.x[word] ^= mask;
        }
    }

    #[inline]
    fn xor_z(&mut self, row: usize, col: usize, value: bool) {
        if value {
            let (word, mask) = self.word_offset(row, col);
            self.z[word] ^= mask;
        }
    }

    /// Reads the x-matrix bit at `(row, col)`.
    ///
    /// # Panics
    /// Debug builds assert `row <= 2n` and `col < n`.
    #[must_use]
    pub fn peek_x(&self, row: usize, col: usize) -> bool {
        debug_assert!(row <= 2 * self.n && col < self.n);
        self.get_x(row, col)
    }

    /// Reads the z-matrix bit at `(row, col)`.
    ///
    /// # Panics
    /// Debug builds assert `row <= 2n` and `col < n`.
    #[must_use]
    pub fn peek_z(&self, row: usize, col: usize) -> bool {
        debug_assert!(row <= 2 * self.n && col < self.n);
        self.get_z(row, col)
    }

    /// Reads the phase bit of `row` (`false` = +1, `true` = -1).
    ///
    /// # Panics
    /// Debug builds assert `row <= 2n`.
    #[must_use]
    pub fn peek_r(&self, row: usize) -> bool {
        debug_assert!(row <= 2 * self.n);
        self.r[row] != 0
    }

    // ---- row primitives (spec.md 4.2) ----

    /// Copies row `k` into row `i`.
    fn row_copy(&mut self, i: usize, k: usize) {
        if i == k {
            return;
        }
        let (i_start, k_start) = (i * self.stride, k * self.stride);
        let stride = self.stride;
        self.x.copy_within(k_start..k_start + stride, i_start);
        self.z.copy_within(k_start..k_start + stride, i_start);
        self.r[i] = self.r[k];
    }

    /// Swaps rows `i` and `k` via the scratch row.
    fn row_swap(&mut self, i: usize, k: usize) {
        let scratch = self.scratch_row();
        self.row_copy(scratch, k);
        self.row_copy(k, i);
        self.row_copy(i, scratch);
    }

    /// Sets row `i` to the canonical generator `X_b` (`b < n`) or `Z_{b-n}` (`n <= b < 2n`).
    fn row_set(&mut self, i: usize, b: usize) {
        let start = i * self.stride;
        let stride = self.stride;
        self.x[start..start + stride].fill(0);
        self.z[start..start + stride].fill(0);
        self.r[i] = 0;
        if b < self.n {
            self.set_x(i, b, true);
        } else {
            self.set_z(i, b - self.n, true);
        }
    }

    /// Phase power `e` (`i^e`) obtained by left-multiplying row `i` by row `k`.
    ///
    /// Accumulates a signed count over all `n` columns before reducing mod 4, matching `chp.cpp`'s
    /// `long e` accumulator rather than reducing per column.
    fn clifford_phase(&self, i: usize, k: usize) -> u8 {
        let mut e: i64 = 0;
        for j in 0..self.n {
            let (xi, zi) = (self.get_x(i, j), self.get_z(i, j));
            let (xk, zk) = (self.get_x(k, j), self.get_z(k, j));
            match (xk, zk) {
                (true, false) => {
                    // row k is X on this column
                    if xi && zi {
                        e += 1; // XY = iZ
                    } else if !xi && zi {
                        e -= 1; // XZ = -iY
                    }
                }
                (true, true) => {
                    // row k is Y on this column
                    if !xi && zi {
                        e += 1; // YZ = iX
                    } else if xi && !zi {
                        e -= 1; // YX = -iZ
                    }
                }
                (false, true) => {
                    // row k is Z on this column
                    if xi && !zi {
                        e += 1; // ZX = iY
                    } else if xi && zi {
                        e -= 1; // ZY = -iX
                    }
                }
                (false, false) => {}
            }
        }
        e += i64::from(self.r[i]) + i64::from(self.r[k]);
        e.rem_euclid(4) as u8
    }

    /// Left-multiplies row `i` by row `k`: `row_i <- row_k * row_i`, phases combined.
    fn row_mult(&mut self, i: usize, k: usize) {
        let e = self.clifford_phase(i, k);
        debug_assert!(e == 0 || e == 2, "Clifford evolution keeps phases in {{0, 2}}");
        self.r[i] = e / 2;
        for word in 0..self.stride {
            self.x[i * self.stride + word] ^= self.x[k * self.stride + word];
            self.z[i * self.stride + word] ^= self.z[k * self.stride + word];
        }
    }

    // ---- Clifford gates (spec.md 4.3) ----

    /// Applies CNOT with control `b` and target `c`.
    ///
    /// # Panics
    /// Debug builds assert `b != c` and both are in `[0, n)`.
    pub fn cnot(&mut self, b: usize, c: usize) {
        debug_assert!(b < self.n && c < self.n && b != c);
        for i in 0..2 * self.n {
            let (xb, zc) = (self.get_x(i, b), self.get_z(i, c));
            self.xor_x(i, c, xb);
            self.xor_z(i, b, zc);
            let (xc, zb) = (self.get_x(i, c), self.get_z(i, b));
            if xb && zc && (xc == zb) {
                self.r[i] ^= 1;
            }
        }
        trace!("cnot({b}, {c})");
    }

    /// Applies a Hadamard gate to qubit `b`.
    ///
    /// # Panics
    /// Debug builds assert `b < n`.
    pub fn hadamard(&mut self, b: usize) {
        debug_assert!(b < self.n);
        for i in 0..2 * self.n {
            let (xb, zb) = (self.get_x(i, b), self.get_z(i, b));
            if xb != zb {
                self.set_x(i, b, zb);
                self.set_z(i, b, xb);
            }
            if xb && zb {
                self.r[i] ^= 1;
            }
        }
        trace!("hadamard({b})");
    }

    /// Applies a phase (S) gate to qubit `b`.
    ///
    /// # Panics
    /// Debug builds assert `b < n`.
    pub fn phase(&mut self, b: usize) {
        debug_assert!(b < self.n);
        for i in 0..2 * self.n {
            let (xb, zb) = (self.get_x(i, b), self.get_z(i, b));
            if xb && zb {
                self.r[i] ^= 1;
            }
            self.xor_z(i, b, xb);
        }
        trace!("phase({b})");
    }

    // ---- measurement (spec.md 4.4) ----

    /// Measures qubit `b` in the computational basis.
    ///
    /// `coin` supplies the single bit of randomness the kernel needs when the outcome is not
    /// forced by the current stabilizer state; it is the caller's responsibility to have drawn it
    /// from an RNG (or a fixed test value). When `suppress_determinate` is `true` and the outcome
    /// turns out to be deterministic, the tableau is left untouched and the returned
    /// `MeasurementResult::outcome` is a placeholder the caller must ignore.
    ///
    /// # Panics
    /// Debug builds assert `b < n`.
    pub fn measure(&mut self, b: usize, suppress_determinate: bool, coin: bool) -> MeasurementResult {
        debug_assert!(b < self.n);
        let n = self.n;

        let mut pivot = None;
        for p in n..2 * n {
            if self.get_x(p, b) {
                pivot = Some(p);
                break;
            }
        }

        if let Some(s) = pivot {
            let d = s - n;
            self.row_copy(d, s);
            self.row_set(s, b + n);
            self.r[s] = u8::from(coin);
            for i in 0..2 * n {
                if i != d && self.get_x(i, b) {
                    self.row_mult(i, d);
                }
            }
            let outcome = self.r[s] != 0;
            debug!("measure({b}) random, outcome={outcome}");
            return MeasurementResult {
                outcome,
                is_deterministic: false,
            };
        }

        if suppress_determinate {
            return MeasurementResult {
                outcome: false,
                is_deterministic: true,
            };
        }

        let mut m = 0;
        while m < n && !self.get_x(m, b) {
            m += 1;
        }
        debug_assert!(m < n, "symplectic invariant guarantees a destabilizer pivot exists");
        let scratch = self.scratch_row();
        self.row_copy(scratch, m + n);
        for i in m + 1..n {
            if self.get_x(i, b) {
                self.row_mult(scratch, i + n);
            }
        }
        let outcome = self.r[scratch] != 0;
        debug!("measure({b}) deterministic, outcome={outcome}");
        MeasurementResult {
            outcome,
            is_deterministic: true,
        }
    }

    // ---- Gaussian reduction & seed (spec.md 4.5-4.6) ----

    /// Rewrites the stabilizer half into quasi-upper-triangular form (destabilizers are permuted
    /// and combined in lockstep to preserve I1-I2). Returns `g`, the number of X/Y-pivoted rows;
    /// `2^g` is the number of computational-basis states with nonzero amplitude in the state.
    pub fn gaussian_reduce(&mut self) -> usize {
        let n = self.n;
        let mut i = n;

        for j in 0..n {
            let found = (i..2 * n).find(|&k| self.get_x(k, j));
            if let Some(k) = found {
                self.row_swap(i, k);
                self.row_swap(i - n, k - n);
                for k2 in i + 1..2 * n {
                    if self.get_x(k2, j) {
                        self.row_mult(k2, i);
                        self.row_mult(i - n, k2 - n);
                    }
                }
                i += 1;
            }
        }
        let g = i - n;

        for j in 0..n {
            let found = (i..2 * n).find(|&k| self.get_z(k, j));
            if let Some(k) = found {
                self.row_swap(i, k);
                self.row_swap(i - n, k - n);
                for k2 in i + 1..2 * n {
                    if self.get_z(k2, j) {
                        self.row_mult(k2, i);
                        self.row_mult(i - n, k2 - n);
                    }
                }
                i += 1;
            }
        }
        g
    }

    /// Writes into the scratch row a Pauli `P` such that `P|0...0>` is a nonzero-amplitude basis
    /// state of the current stabilizer state. Precondition: `gaussian_reduce` was just called and
    /// returned `g`.
    pub fn seed(&mut self, g: usize) {
        let n = self.n;
        let scratch = self.scratch_row();
        let start = scratch * self.stride;
        let stride = self.stride;
        self.x[start..start + stride].fill(0);
        self.z[start..start + stride].fill(0);
        self.r[scratch] = 0;

        for i in (n + g..2 * n).rev() {
            let mut f = 2 * u32::from(self.r[i]);
            let mut min = 0usize;
            for j in (0..n).rev() {
                if self.get_z(i, j) {
                    min = j;
                    if self.get_x(scratch, j) {
                        f = (f + 2) % 4;
                    }
                }
            }
            if f == 2 {
                self.xor_x(scratch, min, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(n: usize) -> Tableau {
        Tableau::new(n).expect("allocation should not fail in tests")
    }

    #[test]
    fn initialize_is_zero_state() {
        let t = fresh(3);
        for i in 0..3 {
            assert!(t.peek_x(i, i));
            assert!(t.peek_z(3 + i, i));
        }
        for row in 0..=6 {
            assert!(!t.peek_r(row));
        }
    }

    #[test]
    fn z_on_zero_is_deterministic_zero() {
        let mut t = fresh(1);
        let result = t.measure(0, false, false);
        assert_eq!(result.code(), 0);
    }

    #[test]
    fn hadamard_then_measure_is_random() {
        let mut t = fresh(1);
        t.hadamard(0);
        let first = t.measure(0, false, true);
        assert_eq!(first.code(), 3);
        let second = t.measure(0, false, false);
        assert_eq!(second.code(), 1);
    }

    #[test]
    fn bell_pair_measurement_correlates() {
        let mut t = fresh(2);
        t.hadamard(0);
        t.cnot(0, 1);
        let first = t.measure(0, false, true);
        assert_eq!(first.code(), 3);
        let second = t.measure(1, false, false);
        assert_eq!(second.code(), 1);
    }

    #[test]
    fn phase_squared_is_z_preserves_zero() {
        let mut t = fresh(1);
        t.phase(0);
        t.phase(0);
        let result = t.measure(0, false, false);
        assert_eq!(result.code(), 0);
    }

    #[test]
    fn ghz_state_measurement() {
        let mut t = fresh(3);
        t.hadamard(0);
        t.cnot(0, 1);
        t.cnot(1, 2);
        assert_eq!(t.measure(0, false, false).code(), 2);
        assert_eq!(t.measure(1, false, false).code(), 0);
        assert_eq!(t.measure(2, false, false).code(), 0);

        let mut t2 = fresh(3);
        t2.hadamard(0);
        t2.cnot(0, 1);
        t2.cnot(1, 2);
        assert_eq!(t2.measure(0, false, true).code(), 3);
        assert_eq!(t2.measure(1, false, false).code(), 1);
        assert_eq!(t2.measure(2, false, false).code(), 1);
    }

    #[test]
    fn hadamard_is_self_inverse() {
        let base = fresh(4);
        let mut t = fresh(4);
        for b in 0..4 {
            t.hadamard(b);
            t.hadamard(b);
        }
        assert_eq!(t, base);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = fresh(2);
        let clone = original.clone();
        original.hadamard(0);
        original.cnot(0, 1);
        assert_ne!(original, clone);
        assert_eq!(clone, fresh(2));
    }

    #[test]
    fn gaussian_reduce_is_nondecreasing_pivot() {
        let mut t = fresh(3);
        t.hadamard(0);
        t.cnot(0, 1);
        t.cnot(1, 2);
        let g = t.gaussian_reduce();
        let n = t.num_qubits();
        let mut last = None;
        for row in n..n + g {
            let pivot = (0..n).find(|&j| t.peek_x(row, j)).expect("X/Y pivot row must have one");
            if let Some(prev) = last {
                assert!(pivot > prev);
            }
            last = Some(pivot);
        }
        let mut last_z = None;
        for row in n + g..2 * n {
            let pivot = (0..n).find(|&j| t.peek_z(row, j)).expect("Z pivot row must have one");
            if let Some(prev) = last_z {
                assert!(pivot > prev);
            }
            last_z = Some(pivot);
        }
    }

    #[test]
    fn seed_produces_a_stabilized_basis_state() {
        let mut t = fresh(2);
        t.hadamard(0);
        t.cnot(0, 1);
        let g = t.gaussian_reduce();
        t.seed(g);
        let n = t.num_qubits();
        // the Bell pair has two equally-weighted basis states: |00> and |11>
        assert_eq!(t.peek_x(2 * n, 0), t.peek_x(2 * n, 1));
    }
}
