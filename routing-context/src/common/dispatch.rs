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

//! Hand-off of routed references to their queues.
//!
//! The routing context does not know about schedulers. Callers pass a
//! [`ReferenceDispatcher`] to
//! [`RoutingContext::process_references_with`](crate::common::RoutingContext::process_references_with)
//! and pick inline or deferred delivery by the dispatcher they supply.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, instrument, trace};

use crate::common::config::DispatchConfig;
use crate::message::{DispatchError, MessageReference};

/// Capability that places a routed reference on its queue.
pub trait ReferenceDispatcher: Send + Sync {
    /// Hands `reference` to its queue, now or later depending on the implementation.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the reference could not be accepted.
    fn dispatch(&self, reference: MessageReference) -> Result<(), DispatchError>;
}

/// Appends references on the calling task, in direct mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectDispatcher;

impl ReferenceDispatcher for DirectDispatcher {
    fn dispatch(&self, reference: MessageReference) -> Result<(), DispatchError> {
        let queue = Arc::clone(reference.queue());
        queue.add_tail(reference, true);
        Ok(())
    }
}

/// Appends references from a background Tokio task, in submission order.
///
/// Dispatch is fire-and-forget: `dispatch` returns once the reference is queued for the
/// worker. A single worker drains the channel, so references keep their relative order
/// across all queues.
#[derive(Debug)]
pub struct DeferredDispatcher {
    sender: mpsc::UnboundedSender<MessageReference>,
    cancellation_token: CancellationToken,
    worker: JoinHandle<()>,
    drain_on_shutdown: bool,
}

impl DeferredDispatcher {
    /// Starts the worker on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    #[must_use]
    pub fn start(config: &DispatchConfig) -> Self {
        Self::start_on(&Handle::current(), config)
    }

    /// Starts the worker on `handle`.
    #[instrument(skip(handle))]
    pub fn start_on(handle: &Handle, config: &DispatchConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let cancellation_token = CancellationToken::new();
        let worker = handle.spawn(Self::run(receiver, cancellation_token.clone()));
        debug!("Deferred dispatcher started");
        Self {
            sender,
            cancellation_token,
            worker,
            drain_on_shutdown: config.drain_on_shutdown,
        }
    }

    async fn run(
        mut receiver: mpsc::UnboundedReceiver<MessageReference>,
        cancellation_token: CancellationToken,
    ) {
        loop {
            tokio::select! {
                biased;
                () = cancellation_token.cancelled() => {
                    trace!("Deferred dispatcher cancelled, dropping pending references");
                    break;
                }
                next = receiver.recv() => {
                    let Some(reference) = next else {
                        trace!("Deferred dispatcher drained");
                        break;
                    };
                    let queue = Arc::clone(reference.queue());
                    trace!(queue = %queue.id(), "Deferred add_tail");
                    queue.add_tail(reference, false);
                }
            }
        }
    }

    /// Stops the worker and waits for it to exit.
    ///
    /// With `drain_on_shutdown` the worker first delivers everything already submitted;
    /// otherwise pending references are dropped.
    #[instrument(skip_all)]
    pub async fn shutdown(self) {
        let Self {
            sender,
            cancellation_token,
            worker,
            drain_on_shutdown,
        } = self;
        debug!(drain = drain_on_shutdown, "Stopping deferred dispatcher");
        if !drain_on_shutdown {
            cancellation_token.cancel();
        }
        drop(sender);
        if let Err(e) = worker.await {
            error!("Deferred dispatcher worker failed: {e}");
        }
        debug!("Deferred dispatcher stopped");
    }
}

impl ReferenceDispatcher for DeferredDispatcher {
    fn dispatch(&self, reference: MessageReference) -> Result<(), DispatchError> {
        self.sender.send(reference)?;
        Ok(())
    }
}
