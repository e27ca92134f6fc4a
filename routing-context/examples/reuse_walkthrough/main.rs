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

//! Routes a stream of messages through a single pooled context, reusing the resolved
//! queue set until the bindings change, then delivers through a deferred dispatcher.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use routing_context::prelude::*;
use tracing::info;

#[derive(Debug)]
struct CountingQueue {
    id: Ern,
    durable: bool,
    received: AtomicUsize,
}

impl CountingQueue {
    fn new(name: &str, durable: bool) -> anyhow::Result<Arc<Self>> {
        Ok(Arc::new(Self {
            id: Ern::with_root(name)?,
            durable,
            received: AtomicUsize::new(0),
        }))
    }
}

impl Queue for CountingQueue {
    fn id(&self) -> &Ern {
        &self.id
    }

    fn is_durable(&self) -> bool {
        self.durable
    }

    fn add_tail(&self, _reference: MessageReference, _direct: bool) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }
}

#[derive(Debug)]
struct Order(Address);

impl RoutableMessage for Order {
    fn address(&self) -> Option<Address> {
        Some(self.0.clone())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let version = BindingsVersion::new();
    let orders = Address::from("orders");
    let fulfilment = CountingQueue::new("fulfilment", true)?;
    let audit = CountingQueue::new("audit", false)?;
    let mut bindings: HashMap<Address, Vec<QueueRef>> = HashMap::new();
    bindings.entry(orders.clone()).or_default().push(fulfilment.clone());
    version.advance();

    let pool = RoutingContextPool::new(&RoutingConfig::default());
    let dispatcher = DeferredDispatcher::start(&DispatchConfig::default());
    let mut context = pool.checkout(None);
    let mut resolutions = 0;

    for n in 0..10 {
        if n == 5 {
            bindings.entry(orders.clone()).or_default().push(audit.clone());
            version.advance();
        }

        let message: MessageRef = Arc::new(Order(orders.clone()));
        let current = version.current();
        context.set_address(message.address());
        context.set_routing_type(Some(RoutingType::Multicast));

        if !context.is_reusable_for(message.as_ref(), current) {
            context.clear();
            if let Some(address) = context.address().cloned() {
                for queue in bindings.get(&address).into_iter().flatten() {
                    context.add_queue(&address, queue.clone());
                }
            }
            context.set_reusable(true, current);
            resolutions += 1;
        }

        let refs: Vec<MessageReference> = context
            .listings()
            .values()
            .flat_map(|listing| listing.durable_queues().iter().chain(listing.non_durable_queues()))
            .map(|queue| MessageReference::new(message.clone(), queue.clone()))
            .collect();
        context.process_references_with(refs, &dispatcher)?;
    }

    drop(context);
    dispatcher.shutdown().await;

    info!(
        resolutions,
        fulfilment = fulfilment.received.load(Ordering::Relaxed),
        audit = audit.received.load(Ordering::Relaxed),
        idle_contexts = pool.idle_count(),
        "Routing finished"
    );
    Ok(())
}
