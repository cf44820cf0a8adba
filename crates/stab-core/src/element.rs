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

/// A type that can stand in for a qubit index in `CliffordGateable`.
///
/// Gate methods are generic over `T: IndexableElement` rather than hard-coded to `usize` so a
/// caller can pass a newtype (`QubitId`) or a bare `usize` interchangeably; the tableau only ever
/// needs the `usize` column it maps to.
pub trait IndexableElement: Copy {
    /// Converts this element to the `usize` column index it addresses in the tableau.
    fn to_index(&self) -> usize;

    /// Builds an element from a `usize` column index.
    fn from_index(value: usize) -> Self;
}

impl IndexableElement for usize {
    #[inline]
    fn to_index(&self) -> usize {
        *self
    }

    #[inline]
    fn from_index(value: usize) -> Self {
        value
    }
}
