// glsym/src/library.rs
//
//! The seam between the batch loader and a platform's symbol sources.

use std::os::raw::c_void;

/// Access to an OpenGL shared library and its lookup strategies.
///
/// Each platform backend implements the two raw lookup strategies; the
/// combined [`resolve`](GlLibrary::resolve) logic is shared and identical
/// everywhere. Lookups never fail loudly: a null address means "not found".
pub trait GlLibrary {
    /// Opens the library if it isn't open yet.
    ///
    /// Idempotent: the handle is acquired at most once per process, and
    /// repeated calls return the cached outcome. Returns false only if no
    /// candidate library could be opened.
    fn open(&self) -> bool;

    /// Queries the windowing system's proc-address function, if the platform
    /// has one.
    ///
    /// The result is returned as-is and may be one of the reserved failure
    /// values some drivers hand back for missing extensions; callers go
    /// through [`resolve`](GlLibrary::resolve), which filters those.
    fn vendor_proc_address(&self, name: &str) -> *const c_void;

    /// Plain dynamic-symbol lookup by name in the library handle.
    fn static_symbol(&self, name: &str) -> *const c_void;

    /// Resolves a single entry point: vendor query first, then dynamic
    /// lookup for anything the vendor function couldn't (or wouldn't)
    /// provide.
    fn resolve(&self, name: &str) -> *const c_void {
        let address = self.vendor_proc_address(name);
        if !is_reserved_address(address) {
            return address;
        }
        self.static_symbol(name)
    }
}

/// Whether `address` is one of the values `wglGetProcAddress` returns for a
/// missing extension: null, the historically reserved pointers 1 through 3,
/// or all-bits-set.
///
/// This set is fixed by the platform API. Forwarding any of these as a
/// callable address would crash on the first call, so they are treated as
/// "not found" and trigger the dynamic-lookup fallback instead.
pub(crate) fn is_reserved_address(address: *const c_void) -> bool {
    matches!(address as usize, 0..=3 | usize::MAX)
}
