pub mod openapi;
pub mod server;
pub mod tracing;
