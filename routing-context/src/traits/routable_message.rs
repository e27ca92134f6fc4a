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

use crate::message::Address;

/// A message that can be routed through a [`RoutingContext`](crate::common::RoutingContext).
///
/// The only thing the context needs from a message is its own destination, used when
/// no address was set explicitly on the context.
pub trait RoutableMessage: Debug + Send + Sync {
    /// The address carried by the message, if any.
    fn address(&self) -> Option<Address>;
}
