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

/// Base trait for quantum simulators.
///
/// This trait defines the minimal interface every simulator in this crate implements, whether it
/// tracks a stabilizer tableau or some other quantum-mechanical state representation.
pub trait QuantumSimulator {
    /// Resets the simulator to its initial configuration (the `|0...0>` stabilizer state for a
    /// tableau-backed simulator).
    ///
    /// # Returns
    /// * `&mut Self` - Returns self for method chaining
    fn reset(&mut self) -> &mut Self;
}
