// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// triespell-ffi: C-compatible FFI layer for the triespell Dictionary.
//
// Exposes the load / check / size / unload lifecycle over an opaque handle,
// so C callers hold their dictionary explicitly instead of through a global.
//
// Memory management rules:
// - Opaque `Dictionary` pointer: created by `triespell_new`, freed by
//   `triespell_free` (which also unloads).
// - Error strings written to `error_out`: caller frees with `triespell_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use triespell::Dictionary;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new, unloaded dictionary handle.
#[unsafe(no_mangle)]
pub extern "C" fn triespell_new() -> *mut Dictionary {
    Box::into_raw(Box::new(Dictionary::new()))
}

/// Free a handle created by `triespell_new`, releasing any loaded words.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn triespell_free(handle: *mut Dictionary) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Dictionary operations ───────────────────────────────────────

/// Load the word list at `path` into the dictionary.
///
/// Returns `true` on success. On failure, if `error_out` is non-NULL, it
/// receives a heap-allocated error string that the caller must free with
/// `triespell_free_str`. Loading an already loaded dictionary fails.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn triespell_load(
    handle: *mut Dictionary,
    path: *const c_char,
    error_out: *mut *mut c_char,
) -> bool {
    let Some(dict) = (unsafe { handle.as_mut() }) else {
        set_error(error_out, "handle is null");
        return false;
    };
    let Some(path) = cstr_to_str(path) else {
        set_error(error_out, "path is null or not valid UTF-8");
        return false;
    };
    match dict.load(path) {
        Ok(()) => true,
        Err(e) => {
            set_error(error_out, &e.to_string());
            false
        }
    }
}

/// Check whether a word is in the dictionary.
/// Returns 1 for correct, 0 for misspelled, -1 if `handle` or `word` is NULL.
///
/// A word that is not valid UTF-8 holds bytes outside the dictionary
/// alphabet, so it is reported as misspelled.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn triespell_check(handle: *const Dictionary, word: *const c_char) -> c_int {
    let Some(dict) = (unsafe { handle.as_ref() }) else {
        return -1;
    };
    if word.is_null() {
        return -1;
    }
    match unsafe { CStr::from_ptr(word) }.to_str() {
        Ok(word) if dict.check(word) => 1,
        _ => 0,
    }
}

/// Number of distinct words loaded; 0 for a NULL or unloaded handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn triespell_size(handle: *const Dictionary) -> usize {
    unsafe { handle.as_ref() }.map_or(0, Dictionary::size)
}

/// Release every loaded word. The handle stays valid and may be loaded again.
/// Returns `false` if the handle is NULL or nothing was loaded.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn triespell_unload(handle: *mut Dictionary) -> bool {
    unsafe { handle.as_mut() }.is_some_and(Dictionary::unload)
}

/// Free a heap-allocated C string returned by triespell functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn triespell_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = CString::new(msg).unwrap_or_default().into_raw();
        }
    }
}
