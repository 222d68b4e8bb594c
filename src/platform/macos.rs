// glsym/src/platform/macos.rs
//
//! macOS backend: dlopen of the OpenGL framework.
//!
//! There is no windowing-system proc-address query on this GL stack; every
//! entry point, extensions included, is visible to plain `dlsym`.

use libc::{dlopen, dlsym, RTLD_LAZY, RTLD_LOCAL};
use log::{debug, error};
use std::ffi::CString;
use std::os::raw::c_void;
use std::ptr;
use std::sync::LazyLock;

use crate::library::GlLibrary;

struct GlLibraryWrapper(*mut c_void);

unsafe impl Send for GlLibraryWrapper {}
unsafe impl Sync for GlLibraryWrapper {}

static GL_LIBRARY: LazyLock<Option<GlLibraryWrapper>> = LazyLock::new(|| {
    let candidates = [
        c"/System/Library/Frameworks/OpenGL.framework/OpenGL",
        c"libGL.dylib",
    ];
    for path in candidates {
        let handle = unsafe { dlopen(path.as_ptr(), RTLD_LAZY | RTLD_LOCAL) };
        if !handle.is_null() {
            debug!("opened {:?}", path);
            return Some(GlLibraryWrapper(handle));
        }
    }
    error!("unable to open the OpenGL framework");
    None
});

/// The process-wide system OpenGL library.
pub struct SystemLibrary;

impl GlLibrary for SystemLibrary {
    fn open(&self) -> bool {
        GL_LIBRARY.is_some()
    }

    fn vendor_proc_address(&self, _name: &str) -> *const c_void {
        ptr::null()
    }

    fn static_symbol(&self, name: &str) -> *const c_void {
        match &*GL_LIBRARY {
            Some(library) => {
                let name = CString::new(name).unwrap();
                unsafe { dlsym(library.0, name.as_ptr()).cast_const() }
            }
            None => ptr::null(),
        }
    }
}
