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

use crate::message::MessageReference;

/// A destination queue as seen by the routing context.
///
/// Implementations own their storage and delivery path; the context only reads the
/// durability flag when filing the queue into a listing, compares identities when
/// tracking acknowledgements, and calls [`add_tail`](Queue::add_tail) when routed
/// references are processed.
///
/// `add_tail` takes `&self`, so implementations use interior mutability for their
/// message buffers. The same queue handle may be listed under several addresses.
pub trait Queue: Debug + Send + Sync {
    /// The queue's identity. Two handles with equal ids are the same queue.
    fn id(&self) -> &Ern;

    /// Whether messages routed to this queue must survive a broker restart.
    fn is_durable(&self) -> bool;

    /// Appends `reference` to the tail of the queue.
    ///
    /// With `direct` set the reference is admitted straight into the queue's delivery
    /// path on the calling task; otherwise the queue may schedule delivery later.
    fn add_tail(&self, reference: MessageReference, direct: bool);
}
