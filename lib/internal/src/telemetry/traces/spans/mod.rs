//! Spans are created through small wrapper structs (see `endpoint` and `resolver`) rather
//! than ad-hoc `tracing` calls.
//!
//! The wrappers fix span names and attributes, and provide focused helpers for
//! recording outcomes. Span names are static, the dynamic operation name goes
//! into `otel.name`, which the OpenTelemetry layer uses as the exported span name.
//!
//! Attribute keys live in `attributes` as `const` values.
pub const TARGET_NAME: &str = "traced-graphql";

pub mod attributes;
pub mod endpoint;
pub mod kind;
pub mod resolver;

