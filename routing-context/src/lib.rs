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

#![forbid(unsafe_code)]
#![forbid(missing_docs)] // Keep this to enforce coverage

//! # Routing Context
//!
//! Per-publish bookkeeping used by a message broker while it delivers one
//! message to the queues bound to one or more addresses.
//!
//! ## Key Concepts
//!
//! - **Context (`RoutingContext`)**: Records, per address, which durable and
//!   non-durable queues received the message and which of them were already
//!   acknowledged. It is cleared and reused across routing passes.
//! - **Binding reuse**: After a pass the router declares whether the computed
//!   queue set may be reused (`set_reusable`), tagged with the binding-table
//!   version it saw. The next message validates the cached set with
//!   `is_reusable_for` before skipping resolution. A negative verdict latches.
//! - **Dispatch (`ReferenceDispatcher`)**: Hands routed references to their
//!   queues either inline (`DirectDispatcher`) or through a Tokio worker
//!   (`DeferredDispatcher`).
//! - **Pooling (`RoutingContextPool`)**: Checkout/return guard that keeps
//!   contexts off the allocator on the hot path.
//! - **Traits**: `Queue`, `RoutableMessage` and `Transaction` describe the
//!   broker components the context collaborates with.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use routing_context::prelude::*;
//!
//! let mut context = RoutingContext::new(None);
//! context.set_address(Some(Address::from("orders")));
//! context.set_routing_type(Some(RoutingType::Anycast));
//! context.add_queue(&Address::from("orders"), queue.clone());
//! context.set_reusable(true, bindings.current());
//!
//! // next message
//! if !context.is_reusable_for(&*message, bindings.current()) {
//!     context.clear();
//!     // resolve bindings again
//! }
//! ```

/// Routing context, listings, dispatch, pooling and configuration.
pub(crate) mod common;

/// Value types passed through the routing context.
pub(crate) mod message;

/// Interfaces of the broker components the context collaborates with.
pub(crate) mod traits;

/// A prelude module for conveniently importing the most commonly used items.
///
/// # Re-exports
///
/// ## External Crates
/// *   [`acton_ern::Ern`](https://docs.rs/acton-ern): Identifier type for queues and transactions.
///
/// ## Core Types
/// *   [`crate::common::RoutingContext`]: The per-pass routing bookkeeping structure.
/// *   [`crate::common::RouteContextList`]: Queue listing for a single address.
/// *   [`crate::common::Reusability`]: Tri-state reuse verdict.
/// *   [`crate::common::BindingsVersion`]: Shared binding-table generation counter.
/// *   [`crate::common::ReferenceDispatcher`]: Capability used to hand references to queues.
/// *   [`crate::common::DirectDispatcher`]: Inline dispatch.
/// *   [`crate::common::DeferredDispatcher`]: Dispatch through a Tokio worker.
/// *   [`crate::common::RoutingContextPool`]: Pool of reusable contexts.
/// *   [`crate::common::PooledContext`]: Checked-out context guard.
/// *   [`crate::common::RoutingConfig`]: Crate configuration.
/// *   [`crate::message::Address`]: Destination address.
/// *   [`crate::message::RoutingType`]: Anycast or multicast delivery.
/// *   [`crate::message::MessageReference`]: A message bound to one queue.
/// *   [`crate::message::DispatchError`]: Failure to hand off a reference.
/// *   [`crate::traits::Queue`]: Destination queue interface.
/// *   [`crate::traits::RoutableMessage`]: Message interface.
/// *   [`crate::traits::Transaction`]: Opaque transaction handle.
pub mod prelude {
    // External crate re-exports
    pub use acton_ern::Ern;

    // Core types
    pub use crate::common::config::{
        DispatchConfig, ListingConfig, PoolConfig, RoutingConfig, CONFIG,
    };
    pub use crate::common::{
        BindingsVersion, DeferredDispatcher, DirectDispatcher, PooledContext,
        ReferenceDispatcher, Reusability, RouteContextList, RoutingContext, RoutingContextPool,
    };
    pub use crate::message::{Address, DispatchError, MessageReference, RoutingType};
    pub use crate::traits::{MessageRef, Queue, QueueRef, RoutableMessage, Transaction, TransactionRef};
}
