#![allow(dead_code)]

use taglog::infrastructure::MemorySink;
use taglog::Registry;

/// Registry over an in-memory sink, output switched on
pub fn enabled_registry() -> (Registry, MemorySink) {
    let sink = MemorySink::new();
    let registry = Registry::new(sink.clone());
    registry.enable();
    (registry, sink)
}

/// Registry over an in-memory sink, as constructed (output off)
pub fn fresh_registry() -> (Registry, MemorySink) {
    let sink = MemorySink::new();
    (Registry::new(sink.clone()), sink)
}

/// Subscriber that runs a callback for every event, e.g. to log back into
/// a registry from inside a diagnostic
pub struct CallbackSubscriber<F> {
    callback: F,
}

impl<F> CallbackSubscriber<F>
where
    F: Fn() + Send + Sync + 'static,
{
    pub fn new(callback: F) -> Self {
        CallbackSubscriber { callback }
    }
}

impl<F> tracing::Subscriber for CallbackSubscriber<F>
where
    F: Fn() + Send + Sync + 'static,
{
    fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        tracing::span::Id::from_u64(1)
    }

    fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

    fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}

    fn event(&self, _event: &tracing::Event<'_>) {
        (self.callback)();
    }

    fn enter(&self, _span: &tracing::span::Id) {}

    fn exit(&self, _span: &tracing::span::Id) {}
}

/// Run `work` on another thread; false if it has not finished in time
pub fn finishes_in_time<W>(work: W) -> bool
where
    W: FnOnce() + Send + 'static,
{
    let (done_tx, done_rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        work();
        let _ = done_tx.send(());
    });
    done_rx
        .recv_timeout(std::time::Duration::from_secs(5))
        .is_ok()
}
