use serde_derive::Serialize;
use std::{
    collections::HashMap,
    fmt,
    fs::File,
    io::Write,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};
use tracing::{field, span, subscriber::Subscriber, Event, Id, Metadata};
use wff::trace::*;

/// Thread safe json logger that writes one `EventRecord` per line into a given log file.
pub struct JsonLogger {
    log_file: Mutex<File>,
    next_id: AtomicU64,
    spans: Mutex<HashMap<u64, SpanRecord>>,
    current: Mutex<Vec<u64>>,
}

impl JsonLogger {
    pub fn new(log_file: File) -> Self {
        Self {
            log_file: Mutex::new(log_file),
            next_id: AtomicU64::new(1),
            spans: Mutex::new(HashMap::new()),
            current: Mutex::new(Vec::new()),
        }
    }

    fn write(&self, record: &EventRecord) {
        if let (Ok(line), Ok(mut file)) = (serde_json::to_string(record), self.log_file.lock()) {
            let _ = writeln!(file, "{}", line);
        }
    }
}

impl Subscriber for JsonLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn new_span(&self, span: &span::Attributes) -> Id {
        let mut recorder = Recorder::default();
        span.record(&mut recorder);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut spans) = self.spans.lock() {
            spans.insert(
                id,
                SpanRecord {
                    name: span.metadata().name().to_owned(),
                    query: recorder.query,
                    atoms: recorder.atoms,
                },
            );
        }
        Id::from_u64(id)
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::default();
        event.record(&mut recorder);

        let span = self
            .current
            .lock()
            .ok()
            .and_then(|current| current.last().copied())
            .and_then(|id| {
                self.spans
                    .lock()
                    .ok()
                    .and_then(|spans| spans.get(&id).cloned())
            });

        if let Some(event_type) = recorder.event.take() {
            match event_type.as_ref() {
                VERDICT | WITNESS | NORMALIZE => self.write(&EventRecord {
                    event: event_type,
                    level: event.metadata().level().to_string(),
                    span,
                    fields: recorder,
                }),
                _ => (),
            }
        }
    }

    fn enter(&self, span: &Id) {
        if let Ok(mut current) = self.current.lock() {
            current.push(span.into_u64());
        }
    }

    fn exit(&self, span: &Id) {
        if let Ok(mut current) = self.current.lock() {
            if current.last() == Some(&span.into_u64()) {
                current.pop();
            }
        }
    }

    fn try_close(&self, span: Id) -> bool {
        if let Ok(mut spans) = self.spans.lock() {
            spans.remove(&span.into_u64());
        }
        true
    }
}

/// The span in which an event happened, such as the analysis query that produced a verdict.
#[derive(Serialize, Clone)]
struct SpanRecord {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    atoms: Option<u64>,
}

/// A line of the log.
#[derive(Serialize)]
struct EventRecord {
    event: String,
    level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<SpanRecord>,
    #[serde(flatten)]
    fields: Recorder,
}

/// Generic trace visitor to collect the fields emitted by the library.
#[derive(Serialize, Default)]
struct Recorder {
    #[serde(skip)]
    event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    other: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    atoms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clauses: Option<u64>,
}

impl field::Visit for Recorder {
    fn record_u64(&mut self, field: &field::Field, value: u64) {
        match field.name() {
            ATOMS_FIELD => self.atoms = Some(value),
            CLAUSES_FIELD => self.clauses = Some(value),
            _ => (),
        }
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        if field.name() == RESULT_FIELD {
            self.result = Some(value);
        }
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        match field.name() {
            EVENT_FIELD => self.event = Some(value.to_owned()),
            QUERY_FIELD => self.query = Some(value.to_owned()),
            FORM_FIELD => self.form = Some(value.to_owned()),
            _ => (),
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        match field.name() {
            FORMULA_FIELD => self.formula = Some(format!("{:?}", value)),
            OTHER_FIELD => self.other = Some(format!("{:?}", value)),
            ASSIGNMENT_FIELD => self.assignment = Some(format!("{:?}", value)),
            _ => (),
        }
    }
}
