/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared handle to the binding table's generation counter.
///
/// The binding table advances the counter whenever any binding changes; routers read
/// it before validating a cached pass. Readers always observe a non-decreasing value.
/// A read is a point-in-time check: a change that lands right after it is caught by
/// the next message's validation.
#[derive(Debug, Clone, Default)]
pub struct BindingsVersion(Arc<AtomicU64>);

impl BindingsVersion {
    /// A counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A counter starting at `version`.
    #[must_use]
    pub fn starting_at(version: u64) -> Self {
        Self(Arc::new(AtomicU64::new(version)))
    }

    /// The current generation.
    #[inline]
    #[must_use]
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// Moves to the next generation and returns it.
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }
}
