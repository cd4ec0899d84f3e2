use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex},
};

use tracing::{
    field::{Field, Visit},
    span, Event, Id, Subscriber,
};
use tracing_subscriber::{layer::Context, registry::LookupSpan, Layer};

#[derive(Debug, Clone)]
pub struct RecordedSpan {
    pub index: usize,
    pub name: &'static str,
    pub parent: Option<usize>,
    pub fields: BTreeMap<String, String>,
    pub closed: usize,
}

impl RecordedSpan {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

#[derive(Default)]
struct CollectorState {
    spans: Vec<RecordedSpan>,
    // Span ids are reused by the registry once closed, so they map to the live entry only.
    live: HashMap<u64, usize>,
    events: Vec<BTreeMap<String, String>>,
}

/// Layer recording every span (with its parent and close count) and every event.
#[derive(Clone, Default)]
pub struct RecordingLayer {
    state: Arc<Mutex<CollectorState>>,
}

impl RecordingLayer {
    pub fn spans(&self) -> Vec<RecordedSpan> {
        self.state.lock().expect("recording layer lock").spans.clone()
    }

    pub fn spans_named(&self, name: &str) -> Vec<RecordedSpan> {
        self.spans()
            .into_iter()
            .filter(|span| span.name == name)
            .collect()
    }

    pub fn events(&self) -> Vec<BTreeMap<String, String>> {
        self.state
            .lock()
            .expect("recording layer lock")
            .events
            .clone()
    }

    /// Events carrying `key` with the given value.
    pub fn events_with(&self, key: &str, value: &str) -> Vec<BTreeMap<String, String>> {
        self.events()
            .into_iter()
            .filter(|event| event.get(key).map(String::as_str) == Some(value))
            .collect()
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: BTreeMap<String, String>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: String) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        attrs.record(&mut visitor);

        let parent_id = ctx
            .span(id)
            .and_then(|span| span.parent())
            .map(|parent| parent.id().into_u64());

        let mut state = self.state.lock().expect("recording layer lock");
        let parent = parent_id.and_then(|parent_id| state.live.get(&parent_id).copied());
        let index = state.spans.len();
        state.spans.push(RecordedSpan {
            index,
            name: attrs.metadata().name(),
            parent,
            fields: visitor.fields,
            closed: 0,
        });
        state.live.insert(id.into_u64(), index);
    }

    fn on_record(&self, id: &Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        values.record(&mut visitor);

        let mut state = self.state.lock().expect("recording layer lock");
        if let Some(index) = state.live.get(&id.into_u64()).copied() {
            state.spans[index].fields.extend(visitor.fields);
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        self.state
            .lock()
            .expect("recording layer lock")
            .events
            .push(visitor.fields);
    }

    fn on_close(&self, id: Id, _ctx: Context<'_, S>) {
        let mut state = self.state.lock().expect("recording layer lock");
        if let Some(index) = state.live.remove(&id.into_u64()) {
            state.spans[index].closed += 1;
        }
    }
}
