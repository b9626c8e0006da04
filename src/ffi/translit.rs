use std::ffi::{c_char, c_int};

use han_core::sink::BoundedSink;
use han_core::translit::{romanize, transliterate_ru};
use han_core::{unicode, utf8};
use tracing::debug;

use super::{capacity, ffi_guard, to_c_len};

// --- Transliteration FFI ---
//
// Both entry points use the export names and stdcall convention that
// existing hosts import, so they can load this library unchanged.

/// Romanize the NUL-terminated UTF-8 string `input` into `out`, a buffer of
/// `out_len` bytes.
///
/// The result is truncated to `out_len - 1` bytes (never inside a UTF-8
/// sequence) and NUL-terminated. Returns the byte length of the complete
/// romanization, which exceeds `out_len - 1` when the output was truncated,
/// or -1 if `input` is null or `out` is null with a positive `out_len`.
#[no_mangle]
pub extern "system" fn k2e(input: *const c_char, out: *mut c_char, out_len: c_int) -> c_int {
    ffi_guard!(-1;
        bytes: input_bytes = input,
        buf: out_buf = (out as *mut u8, capacity(out_len)),
    );
    let romanized = romanize(input_bytes);
    let sink = BoundedSink::new(out_buf);
    let cut = utf8::sequence_boundary(&romanized, sink.content_capacity());
    let written = sink.write_terminated_at(&romanized, cut);
    if written.truncated() {
        debug!(
            written = written.written,
            logical = written.logical,
            "k2e output truncated"
        );
    }
    to_c_len(written.logical)
}

/// Transliterate the NUL-terminated UTF-8 string `input` into Cyrillic,
/// written to `out` as NUL-terminated UTF-16.
///
/// `out_len` is the buffer size in **bytes**; the buffer holds
/// `out_len / 2` code units. Truncation never splits a surrogate pair.
/// Returns the length of the complete transliteration in code units, or -1
/// if `input` is null or `out` is null with a positive capacity.
#[no_mangle]
pub extern "system" fn k2r(input: *const c_char, out: *mut u16, out_len: c_int) -> c_int {
    ffi_guard!(-1;
        bytes: input_bytes = input,
        buf: out_buf = (out, capacity(out_len) / 2),
    );
    let units: Vec<u16> = transliterate_ru(input_bytes).encode_utf16().collect();
    let sink = BoundedSink::new(out_buf);
    let cut = unicode::utf16_boundary(&units, sink.content_capacity());
    let written = sink.write_terminated_at(&units, cut);
    if written.truncated() {
        debug!(
            written = written.written,
            logical = written.logical,
            "k2r output truncated"
        );
    }
    to_c_len(written.logical)
}
