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
use std::fmt::Debug;

use acton_ern::Ern;

/// Opaque handle to the unit of work a publish runs in.
///
/// The routing context stores and replaces the handle but never calls into it; the
/// enqueue stage consults it separately. The id is only used in log fields.
pub trait Transaction: Debug + Send + Sync {
    /// Identity of the transaction.
    fn id(&self) -> &Ern;
}
