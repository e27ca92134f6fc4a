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
use std::collections::HashSet;

use acton_ern::Ern;

use crate::traits::{Queue, QueueRef};

/// Queues a message was routed to under a single address.
///
/// Queues are kept in insertion order, split by durability. Acknowledged queues are
/// tracked by id so a queue credited once is not credited again when the same message
/// is routed to it through another path.
#[derive(Debug, Default, Clone)]
pub struct RouteContextList {
    /// Queues whose copy of the message must survive a restart.
    durable_queues: Vec<QueueRef>,
    /// Queues whose copy of the message may be lost on restart.
    non_durable_queues: Vec<QueueRef>,
    /// Ids of queues already acknowledged for the current message.
    acked_queues: HashSet<Ern>,
}

impl RouteContextList {
    /// Creates an empty listing whose queue vectors are pre-sized to `capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            durable_queues: Vec::with_capacity(capacity),
            non_durable_queues: Vec::with_capacity(capacity),
            acked_queues: HashSet::new(),
        }
    }

    /// Number of durable queues in this listing.
    #[inline]
    #[must_use]
    pub fn number_of_durable_queues(&self) -> usize {
        self.durable_queues.len()
    }

    /// Number of non-durable queues in this listing.
    #[inline]
    #[must_use]
    pub fn number_of_non_durable_queues(&self) -> usize {
        self.non_durable_queues.len()
    }

    /// Durable queues, in the order they were added.
    #[inline]
    #[must_use]
    pub fn durable_queues(&self) -> &[QueueRef] {
        &self.durable_queues
    }

    /// Non-durable queues, in the order they were added.
    #[inline]
    #[must_use]
    pub fn non_durable_queues(&self) -> &[QueueRef] {
        &self.non_durable_queues
    }

    /// Total queues in this listing.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.durable_queues.len() + self.non_durable_queues.len()
    }

    /// True when no queue has been added under this address.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.durable_queues.is_empty() && self.non_durable_queues.is_empty()
    }

    /// Records that `queue` has already been acknowledged for the current message.
    pub fn add_acked_queue(&mut self, queue: &dyn Queue) {
        self.acked_queues.insert(queue.id().clone());
    }

    /// Whether `queue` was registered through [`add_acked_queue`](Self::add_acked_queue).
    #[inline]
    #[must_use]
    pub fn is_already_acked(&self, queue: &dyn Queue) -> bool {
        self.acked_queues.contains(queue.id())
    }

    /// Files `queue` by its durability flag. Only the context calls this, so that its
    /// queue count stays in step with the listings.
    pub(crate) fn push(&mut self, queue: QueueRef) {
        if queue.is_durable() {
            self.durable_queues.push(queue);
        } else {
            self.non_durable_queues.push(queue);
        }
    }
}
