// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

uniffi::setup_scaffolding!();

pub mod api;
pub mod ffi;
mod trace_init;

pub use han_core::{hangul, sink, table, translit, utf8};
