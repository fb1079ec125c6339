//! Shared contracts between the browser client and the summarization backend.
//!
//! Everything in this crate is plain data plus the validation rules the
//! client enforces before touching the network, so it compiles and tests on
//! the host without any wasm toolchain.

pub mod api;
pub mod chat;
pub mod document;
