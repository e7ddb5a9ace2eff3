#![cfg(feature = "tracing")]

use option_result::{Maybe, Outcome};
use std::{
    fmt, panic,
    sync::{Arc, Mutex},
};
use tracing::{
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_subscriber::{layer::Context, prelude::*, Layer, Registry};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<(Level, String)>>>);

impl Recorder {
    fn events(&self) -> Vec<(Level, String)> {
        self.0.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

#[derive(Default)]
struct Message(String);

impl Visit for Message {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = Message::default();
        event.record(&mut message);
        if let Ok(mut events) = self.0.lock() {
            events.push((*event.metadata().level(), message.0));
        }
    }
}

fn record<R>(f: impl FnOnce() -> R + panic::UnwindSafe) -> Vec<(Level, String)> {
    let recorder = Recorder::default();
    let subscriber = Registry::default().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, || panic::catch_unwind(f));
    assert!(result.is_err());
    recorder.events()
}

#[test]
fn unwrap_on_none_logs_one_error() {
    let events = record(|| Maybe::<i32>::None.unwrap());
    assert_eq!(
        events,
        [(
            Level::ERROR,
            "called `Maybe::unwrap()` on a `None` value".to_string()
        )]
    );
}

#[test]
fn unwrap_on_err_logs_the_error_payload() {
    let events = record(|| Outcome::<i32, &str>::Err("bad").unwrap());
    assert_eq!(
        events,
        [(
            Level::ERROR,
            r#"called `Outcome::unwrap()` on an `Err` value: "bad""#.to_string()
        )]
    );
}

#[test]
fn successful_unwrap_logs_nothing() {
    let recorder = Recorder::default();
    let subscriber = Registry::default().with(recorder.clone());
    let value = tracing::subscriber::with_default(subscriber, || Maybe::Some(4).unwrap());
    assert_eq!(value, 4);
    assert!(recorder.events().is_empty());
}
