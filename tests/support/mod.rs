//! Shared test support: a capturing `tracing` layer for counting and
//! inspecting emitted deprecation warnings.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

use movewarn::DEPRECATION_TARGET;

/// One captured deprecation warning.
#[derive(Debug, Clone, Default)]
pub struct CapturedWarning {
    pub message: String,
    pub category: String,
    pub stacklevel: u64,
}

/// A `tracing` layer that records every event emitted under the
/// deprecation target.
#[derive(Clone, Default)]
pub struct WarningCapture {
    warnings: Arc<Mutex<Vec<CapturedWarning>>>,
}

impl WarningCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<CapturedWarning> {
        self.warnings.lock().unwrap().clone()
    }

    /// Run `f` with this capture installed as the thread-default subscriber.
    pub fn scoped<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = Registry::default().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl<S: Subscriber> Layer<S> for WarningCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != DEPRECATION_TARGET {
            return;
        }
        let mut warning = CapturedWarning::default();
        event.record(&mut FieldCollector(&mut warning));
        self.warnings.lock().unwrap().push(warning);
    }
}

struct FieldCollector<'a>(&'a mut CapturedWarning);

impl Visit for FieldCollector<'_> {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "stacklevel" {
            self.0.stacklevel = value;
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.0.message = value.to_string(),
            "category" => self.0.category = value.to_string(),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.0.message = format!("{value:?}"),
            "category" => self.0.category = format!("{value:?}"),
            "stacklevel" => {
                if let Ok(parsed) = format!("{value:?}").parse() {
                    self.0.stacklevel = parsed;
                }
            }
            _ => {}
        }
    }
}

/// Capture the warnings emitted while running `f`.
pub fn capture_warnings<R>(f: impl FnOnce() -> R) -> (Vec<CapturedWarning>, R) {
    let capture = WarningCapture::new();
    let result = capture.scoped(f);
    (capture.warnings(), result)
}
