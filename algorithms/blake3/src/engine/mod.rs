//! Execution engine: hardware dispatch for chunk compression.

pub mod dispatcher;

pub use dispatcher::get_active_backend_name;
