//! Defines the interfaces of the broker components the routing context works with.
//!
//! The context never owns queue storage, message payloads or transactions; it only
//! holds shared handles to them. This module provides:
//!
//! *   [`Queue`]: A destination the router binds to an address. Exposes its identity,
//!     its durability and tail insertion of a [`MessageReference`](crate::message::MessageReference).
//! *   [`RoutableMessage`]: The message being routed; supplies the fallback address.
//! *   [`Transaction`]: An opaque handle to the enclosing unit of work.

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

use std::sync::Arc;

// --- Public Re-exports ---
pub use queue::Queue;
pub use routable_message::RoutableMessage;
pub use transaction::Transaction;

/// Shared handle to a queue, as stored in route listings.
pub type QueueRef = Arc<dyn Queue>;

/// Shared handle to a routed message.
pub type MessageRef = Arc<dyn RoutableMessage>;

/// Shared handle to a transaction.
pub type TransactionRef = Arc<dyn Transaction>;

// --- Submodules ---

/// Defines the [`Queue`] trait.
mod queue;
/// Defines the [`RoutableMessage`] trait.
mod routable_message;
/// Defines the [`Transaction`] trait.
mod transaction;
