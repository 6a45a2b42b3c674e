//! Routes `tracing` events from the core crates to the browser console.
//!
//! Uses the `fmt` subscriber with a writer that buffers one formatted event
//! and hands it to `gloo-console` at the matching level when dropped.

use gloo_console as console;
use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(text) = event_text(&self.buf) else {
            return;
        };
        if self.level == Level::ERROR {
            console::error!(text);
        } else if self.level == Level::WARN {
            console::warn!(text);
        } else if self.level == Level::INFO {
            console::log!(text);
        } else {
            console::debug!(text);
        }
    }
}

/// Formatted event text without the trailing newline; `None` when empty.
fn event_text(buf: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buf);
    let text = text.trim_end();
    (!text.is_empty()).then(|| text.to_owned())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Install the console subscriber. Timestamps are off: `SystemTime` is
/// unavailable on `wasm32-unknown-unknown`.
pub fn init(max_level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .try_init();
    if let Err(err) = installed {
        console::warn!(format!("tracing subscriber not installed: {err}"));
    }
}
