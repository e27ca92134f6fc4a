//! Value types that flow through a routing pass.
//!
//! *   [`Address`]: The name of a destination that queues bind to.
//! *   [`RoutingType`]: Delivery discipline applied to an address.
//! *   [`MessageReference`]: A message paired with the queue it was routed to.
//! *   [`DispatchError`]: Raised when a reference cannot be handed to its queue.

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

// --- Public Re-exports ---
pub use address::Address;
pub use dispatch_error::DispatchError;
pub use message_reference::MessageReference;
pub use routing_type::RoutingType;

// --- Submodules ---

/// Defines [`Address`].
mod address;
/// Defines [`DispatchError`].
mod dispatch_error;
/// Defines [`MessageReference`].
mod message_reference;
/// Defines [`RoutingType`].
mod routing_type;
