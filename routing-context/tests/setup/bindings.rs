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

use std::collections::HashMap;

use routing_context::prelude::*;

/// In-memory binding table: address to bound queues, with a generation counter that
/// advances on every change.
#[derive(Debug, Default)]
pub struct BindingTable {
    bindings: HashMap<Address, Vec<QueueRef>>,
    version: BindingsVersion,
}

impl BindingTable {
    pub fn bind(&mut self, address: &str, queue: QueueRef) {
        self.bindings
            .entry(Address::from(address))
            .or_default()
            .push(queue);
        self.version.advance();
    }

    pub fn unbind_all(&mut self, address: &str) {
        self.bindings.remove(address);
        self.version.advance();
    }

    pub fn queues(&self, address: &Address) -> &[QueueRef] {
        self.bindings.get(address).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn version(&self) -> &BindingsVersion {
        &self.version
    }
}

/// Router that resolves bindings into a context unless the previous pass can be reused.
#[derive(Debug, Default)]
pub struct TestRouter {
    pub table: BindingTable,
    pub resolutions: usize,
}

impl TestRouter {
    /// Routes `message`; returns `true` when the cached pass was reused.
    ///
    /// `message_dependent` simulates a filter or grouping decision that ties this pass
    /// to the message itself.
    pub fn route(
        &mut self,
        context: &mut RoutingContext,
        message: &MessageRef,
        routing_type: RoutingType,
        message_dependent: bool,
    ) -> bool {
        let version = self.table.version().current();
        context.set_address(message.address());
        context.set_routing_type(Some(routing_type));
        if context.is_reusable_for(message.as_ref(), version) {
            return true;
        }

        context.clear();
        if let Some(address) = context.address().cloned() {
            for queue in self.table.queues(&address) {
                context.add_queue(&address, queue.clone());
            }
        }
        if message_dependent {
            context.mark_not_reusable();
        }
        self.resolutions += 1;
        context.set_reusable(true, version);
        false
    }
}
