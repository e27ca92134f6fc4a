//! Core runtime pieces of the routing context.
//!
//! # Key Re-exported Components:
//!
//! *   [`RoutingContext`]: Per-pass bookkeeping and the binding-reuse protocol.
//! *   [`RouteContextList`]: Durable, non-durable and acknowledged queues of one address.
//! *   [`Reusability`]: Latching reuse verdict.
//! *   [`BindingsVersion`]: Shared binding-table generation counter.
//! *   [`ReferenceDispatcher`], [`DirectDispatcher`], [`DeferredDispatcher`]: Hand-off of
//!     routed references to queues.
//! *   [`RoutingContextPool`], [`PooledContext`]: Checkout/return of reusable contexts.
//! *   [`RoutingConfig`](config::RoutingConfig): Configuration loaded from XDG locations.

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
pub use bindings_version::BindingsVersion;
pub use context_pool::{PooledContext, RoutingContextPool};
pub use dispatch::{DeferredDispatcher, DirectDispatcher, ReferenceDispatcher};
pub use reusability::Reusability;
pub use route_context_list::RouteContextList;
pub use routing_context::RoutingContext;

// --- Submodules ---

/// Defines [`BindingsVersion`].
mod bindings_version;
/// Defines the [`RoutingContextPool`].
mod context_pool;
/// Defines the dispatch capability and its implementations.
mod dispatch;
/// Defines [`Reusability`].
mod reusability;
/// Defines [`RouteContextList`].
mod route_context_list;
/// Defines [`RoutingContext`].
mod routing_context;
/// Defines the configuration system.
pub mod config;
