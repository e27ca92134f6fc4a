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

//! Checks the log output of the context's lifecycle operations.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use routing_context::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::setup::*;

mod setup;

/// Writer that keeps everything written to it in memory.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_log(f: impl FnOnce()) -> String {
    let captured = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(captured.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

/// Tests that binding a transaction logs its id.
#[test]
fn test_set_transaction_logs_transaction_id() {
    let transaction = TestTransaction::named("tx_logged");
    let id = transaction.id().to_string();
    let output = with_captured_log(|| {
        let mut context = RoutingContext::with_config(None, &RoutingConfig::default());
        context.set_transaction(Some(transaction.clone()));
    });

    let line = output
        .lines()
        .find(|line| line.contains("Binding transaction"))
        .unwrap_or_default();
    assert!(line.contains(&id), "transaction id missing from: {output}");
}

/// Tests that `clear` runs inside its own span.
#[test]
fn test_clear_is_instrumented() {
    let output = with_captured_log(|| {
        let mut context = RoutingContext::with_config(None, &RoutingConfig::default());
        context.clear();
    });

    let line = output
        .lines()
        .find(|line| line.contains("Clearing routing context"))
        .unwrap_or_default();
    assert!(line.contains("clear"), "clear span missing from: {output}");
}
