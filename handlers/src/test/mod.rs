//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! Tests interact with handlers via public and pub(crate) APIs.

mod common;
mod chain_test;
mod translate_handler_test;
