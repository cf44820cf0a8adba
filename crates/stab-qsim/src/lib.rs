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

pub mod clifford_gateable;
pub mod prelude;
pub mod quantum_simulator;
pub mod tableau;
pub mod tableau_sim;

pub use clifford_gateable::{CliffordGateable, MeasurementResult};
pub use quantum_simulator::QuantumSimulator;
pub use tableau::Tableau;
pub use tableau_sim::{StdTableauSim, TableauSim};
