// glsym/src/platform/windows.rs
//
//! WGL-flavored backend: opengl32.dll plus `wglGetProcAddress`.

use log::{debug, error};
use std::ffi::CString;
use std::mem;
use std::os::raw::{c_char, c_void};
use std::ptr;
use std::sync::LazyLock;
use winapi::shared::minwindef::HMODULE;
use winapi::um::libloaderapi;

use crate::library::GlLibrary;

type WglGetProcAddressFn = unsafe extern "system" fn(*const c_char) -> *const c_void;

struct GlLibraryWrapper {
    module: HMODULE,
    wgl_get_proc_address: Option<WglGetProcAddressFn>,
}

unsafe impl Send for GlLibraryWrapper {}
unsafe impl Sync for GlLibraryWrapper {}

static GL_LIBRARY: LazyLock<Option<GlLibraryWrapper>> = LazyLock::new(|| unsafe {
    // The context-creating window normally has opengl32.dll mapped already;
    // only load it ourselves if that isn't the case.
    let mut module = libloaderapi::GetModuleHandleA(c"opengl32.dll".as_ptr());
    if module.is_null() {
        module = libloaderapi::LoadLibraryA(c"opengl32.dll".as_ptr());
    }
    if module.is_null() {
        error!("unable to open opengl32.dll");
        return None;
    }
    let address = libloaderapi::GetProcAddress(module, c"wglGetProcAddress".as_ptr());
    let wgl_get_proc_address = if address.is_null() {
        None
    } else {
        Some(mem::transmute::<_, WglGetProcAddressFn>(address))
    };
    debug!("opened opengl32.dll");
    Some(GlLibraryWrapper {
        module,
        wgl_get_proc_address,
    })
});

/// The process-wide system OpenGL library.
pub struct SystemLibrary;

impl GlLibrary for SystemLibrary {
    fn open(&self) -> bool {
        GL_LIBRARY.is_some()
    }

    fn vendor_proc_address(&self, name: &str) -> *const c_void {
        let library = match &*GL_LIBRARY {
            Some(library) => library,
            None => return ptr::null(),
        };
        match library.wgl_get_proc_address {
            Some(wgl_get_proc_address) => {
                let name = CString::new(name).unwrap();
                unsafe { wgl_get_proc_address(name.as_ptr()) }
            }
            None => ptr::null(),
        }
    }

    fn static_symbol(&self, name: &str) -> *const c_void {
        match &*GL_LIBRARY {
            Some(library) => {
                let name = CString::new(name).unwrap();
                unsafe { libloaderapi::GetProcAddress(library.module, name.as_ptr()).cast() }
            }
            None => ptr::null(),
        }
    }
}
