use std::io::{self, Write};

use tokio::task::{self, JoinHandle};
use tracing::{Span, Subscriber, subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt};

/// Compose a bunyan-formatted subscriber writing to `sink`.
///
/// `RUST_LOG` wins over `env_filter` when it is set.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name, LineSpaced(sink)))
}

// Must only be called once per process.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    LogTracer::init().expect("Failed to set logger");
    subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

/// Runs `f` on the blocking pool inside the caller's span.
pub fn spawn_blocking_with_tracing<F, R>(f: F) -> JoinHandle<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let current_span = Span::current();
    task::spawn_blocking(move || current_span.in_scope(f))
}

/// Puts a blank line between records so the JSON is readable in a terminal.
struct LineSpaced<M>(M);

struct LineSpacedWriter<W>(W);

impl<W: Write> Write for LineSpacedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write_all(buf)?;
        self.0.write_all(b"\n")?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<'a, M> MakeWriter<'a> for LineSpaced<M>
where
    M: MakeWriter<'a> + 'a,
{
    type Writer = LineSpacedWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        LineSpacedWriter(self.0.make_writer())
    }
}
