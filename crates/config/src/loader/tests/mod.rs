//! Tests for configuration loading and path safety.
//!
//! Invariants:
//! - Tests that touch the file system work inside a `tempfile` directory and
//!   pass relative paths resolved against it.
