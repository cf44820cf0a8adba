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

use rand::{RngCore, SeedableRng};

/// Marker trait for the RNG backends a simulator may be generic over.
///
/// The tableau itself never touches an RNG (spec: randomness is injected by the caller as a
/// `coin` bool); this trait only bounds the RNG type `TableauSim<R>` carries to supply that coin.
pub trait SimRng: RngCore + SeedableRng {}

impl<T: RngCore + SeedableRng> SimRng for T {}
