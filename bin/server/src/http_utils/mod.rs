pub mod metrics;
pub mod probes;
