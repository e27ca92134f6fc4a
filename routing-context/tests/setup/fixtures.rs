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
#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use routing_context::prelude::*;

/// One `add_tail` call as seen by a [`RecordingQueue`].
#[derive(Debug, Clone)]
pub struct Delivery {
    pub queue: String,
    pub message: MessageRef,
    pub direct: bool,
}

impl Delivery {
    /// True when this delivery put `message` on the queue called `queue`.
    pub fn is(&self, queue: &str, message: &MessageRef) -> bool {
        self.queue == queue && Arc::ptr_eq(&self.message, message)
    }
}

/// Log shared by several queues so cross-queue ordering can be asserted.
pub type DeliveryLog = Arc<Mutex<Vec<Delivery>>>;

pub fn delivery_log() -> DeliveryLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Queue that records every reference appended to it.
#[derive(Debug)]
pub struct RecordingQueue {
    id: Ern,
    name: String,
    durable: bool,
    log: DeliveryLog,
}

impl RecordingQueue {
    pub fn new(name: &str, durable: bool, log: &DeliveryLog) -> Arc<Self> {
        Arc::new(Self {
            id: Ern::with_root(name).unwrap(),
            name: name.to_string(),
            durable,
            log: Arc::clone(log),
        })
    }

    pub fn durable(name: &str, log: &DeliveryLog) -> QueueRef {
        Self::new(name, true, log)
    }

    pub fn non_durable(name: &str, log: &DeliveryLog) -> QueueRef {
        Self::new(name, false, log)
    }
}

impl Queue for RecordingQueue {
    fn id(&self) -> &Ern {
        &self.id
    }

    fn is_durable(&self) -> bool {
        self.durable
    }

    fn add_tail(&self, reference: MessageReference, direct: bool) {
        self.log.lock().push(Delivery {
            queue: self.name.clone(),
            message: Arc::clone(reference.message()),
            direct,
        });
    }
}

/// A published message with an optional address.
#[derive(Debug)]
pub struct TestMessage {
    pub address: Option<Address>,
}

impl TestMessage {
    pub fn to(address: &str) -> MessageRef {
        Arc::new(Self {
            address: Some(Address::from(address)),
        })
    }

    pub fn unaddressed() -> MessageRef {
        Arc::new(Self { address: None })
    }
}

impl RoutableMessage for TestMessage {
    fn address(&self) -> Option<Address> {
        self.address.clone()
    }
}

/// Transaction handle that only carries an id.
#[derive(Debug)]
pub struct TestTransaction {
    id: Ern,
}

impl TestTransaction {
    pub fn named(name: &str) -> TransactionRef {
        Arc::new(Self {
            id: Ern::with_root(name).unwrap(),
        })
    }
}

impl Transaction for TestTransaction {
    fn id(&self) -> &Ern {
        &self.id
    }
}
