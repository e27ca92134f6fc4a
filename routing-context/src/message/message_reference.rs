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
use derive_new::new;

use crate::traits::{MessageRef, QueueRef};

/// A routed message paired with the queue that will hold it.
///
/// References are produced by the enqueue stage, one per destination queue, and
/// handed to [`RoutingContext::process_references`](crate::common::RoutingContext::process_references).
#[derive(new, Clone, Debug)]
pub struct MessageReference {
    /// The message being delivered.
    message: MessageRef,
    /// The queue the reference belongs to.
    queue: QueueRef,
}

impl MessageReference {
    /// The message carried by this reference.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &MessageRef {
        &self.message
    }

    /// The queue that owns this reference.
    #[inline]
    #[must_use]
    pub fn queue(&self) -> &QueueRef {
        &self.queue
    }
}
