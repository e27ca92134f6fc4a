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

/// Verdict on whether a routing pass may be reused for the next message.
///
/// Starts as `Unknown`. Once `NotReusable` has been recorded the verdict latches: a
/// later positive claim is ignored, since a negative verdict means the routing outcome
/// depended on the message itself and not only on address, routing type and bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reusability {
    /// No verdict recorded since the last clear.
    #[default]
    Unknown,
    /// The last pass may be reused, subject to address, type and version checks.
    Reusable,
    /// The last pass must not be reused. Sticky until cleared.
    NotReusable,
}

impl Reusability {
    /// Applies a new verdict. `NotReusable` never transitions back to `Reusable`.
    #[inline]
    #[must_use]
    pub const fn transition(self, reusable: bool) -> Self {
        match (self, reusable) {
            (Self::NotReusable, _) | (_, false) => Self::NotReusable,
            (_, true) => Self::Reusable,
        }
    }

    /// True only for [`Reusability::Reusable`].
    #[inline]
    #[must_use]
    pub const fn is_reusable(self) -> bool {
        matches!(self, Self::Reusable)
    }

    /// True once a negative verdict has latched.
    #[inline]
    #[must_use]
    pub const fn is_poisoned(self) -> bool {
        matches!(self, Self::NotReusable)
    }
}
