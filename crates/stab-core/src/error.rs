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

use std::error::Error;
use std::fmt;

/// Failure modes a tableau construction can report.
///
/// Argument-range contract violations (n == 0, qubit index out of range, b == c for `cnot`) are
/// not represented here: they are `debug_assert!`s, not recoverable errors, per the caller
/// contract the tableau operates under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableauError {
    /// Backing storage for the x/z matrices or the phase vector could not be allocated.
    ResourceExhausted,
}

impl fmt::Display for TableauError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableauError::ResourceExhausted => {
                write!(f, "failed to allocate tableau storage")
            }
        }
    }
}

impl Error for TableauError {}
