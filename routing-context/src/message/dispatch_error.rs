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
use acton_ern::Ern;

use crate::message::MessageReference;

/// Errors raised when a routed reference cannot be handed to its queue.
#[derive(Debug)]
pub enum DispatchError {
    /// The deferred dispatch worker has stopped; carries the id of the queue the
    /// rejected reference was destined for.
    WorkerClosed(Ern),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::WorkerClosed(queue) => {
                write!(f, "Dispatch worker closed, reference for queue {queue} dropped")
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Converts a failed hand-off to the deferred worker into a `DispatchError`.
impl From<tokio::sync::mpsc::error::SendError<MessageReference>> for DispatchError {
    fn from(err: tokio::sync::mpsc::error::SendError<MessageReference>) -> Self {
        DispatchError::WorkerClosed(err.0.queue().id().clone())
    }
}
