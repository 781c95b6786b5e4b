pub mod feedback;
pub mod http_tracing;
pub mod render;
pub mod tracing;
