//! Flutter-facing FFI surface for LifePager core.

pub mod api;
