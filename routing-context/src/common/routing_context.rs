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

use std::collections::HashMap;
use std::sync::Arc;

use static_assertions::assert_impl_all;
use tracing::{instrument, trace};

use crate::common::config::{RoutingConfig, CONFIG};
use crate::common::{ReferenceDispatcher, Reusability, RouteContextList};
use crate::message::{Address, DispatchError, MessageReference, RoutingType};
use crate::traits::{Queue, QueueRef, RoutableMessage, TransactionRef};

/// Bookkeeping for one routing pass: which queues, under which addresses, received
/// the message being published.
///
/// The router owns a context exclusively while it resolves bindings and enqueues.
/// A context is meant to be [`clear`](Self::clear)ed and reused rather than rebuilt;
/// the address, routing type and transaction survive a clear and are reassigned by the
/// caller for each pass.
///
/// # Binding reuse
///
/// Resolving an address to its bound queues costs more than enqueuing. After a pass the
/// router calls [`set_reusable`](Self::set_reusable) with its verdict and the binding
/// table version it resolved against. Before routing the next message it calls
/// [`is_reusable_for`](Self::is_reusable_for); when that returns `true` the listings of
/// the previous pass can be used verbatim.
#[derive(Debug)]
pub struct RoutingContext {
    /// Per-address queue listings, created on first touch.
    listings: HashMap<Address, RouteContextList>,
    /// The unit of work this pass runs in, if any.
    transaction: Option<TransactionRef>,
    /// Queues added across all listings since the last clear.
    queue_count: usize,
    /// Address explicitly set for this pass.
    address: Option<Address>,
    /// Address captured when reusability was last declared.
    previous_address: Option<Address>,
    /// Routing type applied in this pass.
    routing_type: Option<RoutingType>,
    /// Routing type captured when reusability was last declared.
    previous_routing_type: Option<RoutingType>,
    /// Reuse verdict; latches at `NotReusable`.
    reusable: Reusability,
    /// Binding table version captured when reusability was last declared.
    previous_bindings_version: u64,
    /// Initial capacity of the queue vectors in new listings.
    listing_capacity: usize,
}

assert_impl_all!(RoutingContext: Send, Sync);

impl Default for RoutingContext {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RoutingContext {
    /// Creates an empty context bound to `transaction`, sized from the global [`CONFIG`].
    #[must_use]
    pub fn new(transaction: Option<TransactionRef>) -> Self {
        Self::with_config(transaction, &CONFIG)
    }

    /// Creates an empty context bound to `transaction`, sized from `config`.
    #[must_use]
    pub fn with_config(transaction: Option<TransactionRef>, config: &RoutingConfig) -> Self {
        Self {
            listings: HashMap::new(),
            transaction,
            queue_count: 0,
            address: None,
            previous_address: None,
            routing_type: None,
            previous_routing_type: None,
            reusable: Reusability::Unknown,
            previous_bindings_version: 0,
            listing_capacity: config.listing.initial_queue_capacity,
        }
    }

    /// True when the last recorded verdict is `Reusable`.
    ///
    /// This only reflects the flag; use [`is_reusable_for`](Self::is_reusable_for) to
    /// decide whether routing can actually be skipped.
    #[inline]
    #[must_use]
    pub const fn is_reusable(&self) -> bool {
        self.reusable.is_reusable()
    }

    /// The current reuse verdict.
    #[inline]
    #[must_use]
    pub const fn reusability(&self) -> Reusability {
        self.reusable
    }

    /// Binding table version captured by the last [`set_reusable`](Self::set_reusable).
    #[inline]
    #[must_use]
    pub const fn previous_bindings_version(&self) -> u64 {
        self.previous_bindings_version
    }

    /// Address captured by the last [`set_reusable`](Self::set_reusable).
    #[inline]
    #[must_use]
    pub const fn previous_address(&self) -> Option<&Address> {
        self.previous_address.as_ref()
    }

    /// Routing type captured by the last [`set_reusable`](Self::set_reusable).
    #[inline]
    #[must_use]
    pub const fn previous_routing_type(&self) -> Option<RoutingType> {
        self.previous_routing_type
    }

    /// Records whether this pass may be reused and the binding table version it saw.
    ///
    /// The current address and routing type are snapshotted along with `version` on
    /// every call. The verdict itself latches: once the context has been marked not
    /// reusable, passing `true` leaves it not reusable until [`clear`](Self::clear).
    #[instrument(level = "trace", skip(self))]
    pub fn set_reusable(&mut self, reusable: bool, version: u64) -> &mut Self {
        self.previous_bindings_version = version;
        self.previous_address.clone_from(&self.address);
        self.previous_routing_type = self.routing_type;
        let next = self.reusable.transition(reusable);
        if reusable && next.is_poisoned() {
            trace!("Ignoring reusable verdict, context already marked not reusable");
        }
        self.reusable = next;
        self
    }

    /// Marks the context not reusable without touching the snapshot.
    ///
    /// Routers call this mid-pass when they notice the outcome depends on the message
    /// (filters, grouping, duplicate detection).
    pub fn mark_not_reusable(&mut self) -> &mut Self {
        self.reusable = Reusability::NotReusable;
        self
    }

    /// Whether the previous pass can stand in for routing the next message.
    ///
    /// True only when all of the following hold:
    /// - the verdict is `Reusable`,
    /// - at least one queue was added (an empty result is always recomputed so newly
    ///   bound queues are picked up),
    /// - the context's current address is set and equals the snapshotted address,
    /// - the current routing type equals the snapshotted one,
    /// - `version` equals the snapshotted binding table version.
    ///
    /// The comparison is between the current address and the snapshot, so a router that
    /// reassigns the address before validating sees a miss. `_message` is not consulted.
    #[must_use]
    pub fn is_reusable_for(&self, _message: &dyn RoutableMessage, version: u64) -> bool {
        let address_matches = matches!(
            (&self.address, &self.previous_address),
            (Some(current), Some(previous)) if current == previous
        );
        let reusable = self.reusable.is_reusable()
            && self.queue_count > 0
            && address_matches
            && self.previous_routing_type == self.routing_type
            && self.previous_bindings_version == version;
        trace!(
            address = ?self.address,
            version,
            previous_version = self.previous_bindings_version,
            reusable,
            "Validated cached bindings"
        );
        reusable
    }

    /// Resets listings, queue count, snapshot version and reuse verdict.
    ///
    /// Address, routing type and transaction are left as they are.
    #[instrument(level = "trace", skip(self))]
    pub fn clear(&mut self) {
        trace!(queue_count = self.queue_count, listings = self.listings.len(), "Clearing routing context");
        self.listings.clear();
        self.queue_count = 0;
        self.previous_bindings_version = 0;
        self.reusable = Reusability::Unknown;
    }

    /// Adds `queue` under `address`, filed by the queue's durability.
    ///
    /// The listing is created on first use. Adding the same queue twice lists it twice.
    pub fn add_queue(&mut self, address: &Address, queue: QueueRef) {
        trace!(%address, queue = %queue.id(), durable = queue.is_durable(), "Adding queue");
        self.context_listing(address).push(queue);
        self.queue_count += 1;
    }

    /// Adds `queue` under `address` and marks it as already acknowledged there.
    pub fn add_queue_with_ack(&mut self, address: &Address, queue: QueueRef) {
        let listing = self.context_listing(address);
        listing.add_acked_queue(queue.as_ref());
        listing.push(queue);
        self.queue_count += 1;
    }

    /// Whether `queue` was added with an acknowledgement under `address`.
    ///
    /// Returns `false` for an address that has no listing; no listing is created.
    #[must_use]
    pub fn is_already_acked(&self, address: &Address, queue: &dyn Queue) -> bool {
        self.listings
            .get(address)
            .is_some_and(|listing| listing.is_already_acked(queue))
    }

    /// Appends each reference to the tail of its own queue, in input order.
    ///
    /// With `direct` set the queues admit the references straight into their delivery
    /// path; otherwise each queue is free to schedule delivery.
    pub fn process_references<I>(&self, refs: I, direct: bool)
    where
        I: IntoIterator<Item = MessageReference>,
    {
        for reference in refs {
            let queue = Arc::clone(reference.queue());
            queue.add_tail(reference, direct);
        }
    }

    /// Hands each reference, in input order, to `dispatcher`.
    ///
    /// Stops at the first reference the dispatcher refuses and returns its error;
    /// references already handed over stay delivered.
    pub fn process_references_with<I>(
        &self,
        refs: I,
        dispatcher: &dyn ReferenceDispatcher,
    ) -> Result<(), DispatchError>
    where
        I: IntoIterator<Item = MessageReference>,
    {
        for reference in refs {
            dispatcher.dispatch(reference)?;
        }
        Ok(())
    }

    /// Sets the address for the next pass.
    pub fn set_address(&mut self, address: Option<Address>) {
        self.address = address;
    }

    /// Sets the routing type for the next pass.
    pub fn set_routing_type(&mut self, routing_type: Option<RoutingType>) {
        self.routing_type = routing_type;
    }

    /// The explicit address if one was set, otherwise the message's own address.
    ///
    /// `None` when neither is present.
    #[must_use]
    pub fn address_for(&self, message: &dyn RoutableMessage) -> Option<Address> {
        match &self.address {
            Some(address) => Some(address.clone()),
            None => message.address(),
        }
    }

    /// The explicitly set address.
    #[inline]
    #[must_use]
    pub const fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// The routing type of the current pass.
    #[inline]
    #[must_use]
    pub const fn routing_type(&self) -> Option<RoutingType> {
        self.routing_type
    }

    /// The listing for `address`, created empty if this is the first touch.
    pub fn context_listing(&mut self, address: &Address) -> &mut RouteContextList {
        let capacity = self.listing_capacity;
        self.listings
            .entry(address.clone())
            .or_insert_with(|| RouteContextList::with_capacity(capacity))
    }

    /// The transaction this pass runs in.
    #[inline]
    #[must_use]
    pub const fn transaction(&self) -> Option<&TransactionRef> {
        self.transaction.as_ref()
    }

    /// Replaces the transaction handle.
    pub fn set_transaction(&mut self, transaction: Option<TransactionRef>) {
        trace!(transaction = ?transaction.as_ref().map(|tx| tx.id().to_string()), "Binding transaction");
        self.transaction = transaction;
    }

    /// Non-durable queues added under `address`. Creates the listing if absent.
    pub fn non_durable_queues(&mut self, address: &Address) -> &[QueueRef] {
        self.context_listing(address).non_durable_queues()
    }

    /// Durable queues added under `address`. Creates the listing if absent.
    pub fn durable_queues(&mut self, address: &Address) -> &[QueueRef] {
        self.context_listing(address).durable_queues()
    }

    /// Queues added across all addresses since the last clear.
    #[inline]
    #[must_use]
    pub const fn queue_count(&self) -> usize {
        self.queue_count
    }

    /// All listings touched since the last clear.
    #[inline]
    #[must_use]
    pub const fn listings(&self) -> &HashMap<Address, RouteContextList> {
        &self.listings
    }
}
