pub mod logging;
pub mod trace_server;
