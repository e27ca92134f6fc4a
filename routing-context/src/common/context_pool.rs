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

use std::ops::{Deref, DerefMut};

use parking_lot::Mutex;
use tracing::{instrument, trace};

use crate::common::config::{RoutingConfig, CONFIG};
use crate::common::RoutingContext;
use crate::traits::TransactionRef;

/// Pool of idle routing contexts.
///
/// Contexts are checked out with [`checkout`](Self::checkout) and return to the pool when
/// the [`PooledContext`] guard drops. The guard holds its context exclusively, so the
/// single-owner discipline of a routing pass holds while the pool is shared.
#[derive(Debug)]
pub struct RoutingContextPool {
    idle: Mutex<Vec<RoutingContext>>,
    config: RoutingConfig,
}

impl Default for RoutingContextPool {
    fn default() -> Self {
        Self::new(&CONFIG)
    }
}

impl RoutingContextPool {
    /// Creates an empty pool governed by `config`.
    #[must_use]
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(config.pool.max_idle_contexts)),
            config: config.clone(),
        }
    }

    /// Takes an idle context, or builds one, and binds it to `transaction`.
    #[instrument(level = "trace", skip_all)]
    pub fn checkout(&self, transaction: Option<TransactionRef>) -> PooledContext<'_> {
        let pooled = self.idle.lock().pop();
        let mut context = match pooled {
            Some(context) => {
                trace!("Reusing pooled routing context");
                context
            }
            None => {
                trace!("Pool empty, building routing context");
                RoutingContext::with_config(None, &self.config)
            }
        };
        context.set_transaction(transaction);
        PooledContext {
            pool: self,
            context,
        }
    }

    /// Number of contexts waiting in the pool.
    #[must_use]
    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    fn give_back(&self, mut context: RoutingContext) {
        if self.config.pool.clear_on_return {
            context.clear();
        }
        let mut idle = self.idle.lock();
        if idle.len() < self.config.pool.max_idle_contexts {
            idle.push(context);
        } else {
            trace!(idle = idle.len(), "Pool full, discarding routing context");
        }
    }
}

/// A routing context checked out of a [`RoutingContextPool`].
///
/// Dereferences to [`RoutingContext`]. Returns the context to its pool on drop.
#[derive(Debug)]
pub struct PooledContext<'a> {
    pool: &'a RoutingContextPool,
    context: RoutingContext,
}

impl Deref for PooledContext<'_> {
    type Target = RoutingContext;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

impl DerefMut for PooledContext<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.context
    }
}

impl Drop for PooledContext<'_> {
    fn drop(&mut self) {
        // placeholder from the pool's own config; an empty HashMap does not allocate
        let placeholder = RoutingContext::with_config(None, &self.pool.config);
        let context = std::mem::replace(&mut self.context, placeholder);
        self.pool.give_back(context);
    }
}
