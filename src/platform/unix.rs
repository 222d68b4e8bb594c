// glsym/src/platform/unix.rs
//
//! GLX-flavored backend: dlopen of libGL plus `glXGetProcAddress`.

use libc::{dlopen, dlsym, RTLD_LAZY, RTLD_LOCAL};
use log::{debug, error};
use std::ffi::CString;
use std::mem;
use std::os::raw::c_void;
use std::ptr;
use std::sync::LazyLock;

use crate::library::GlLibrary;

type GlxGetProcAddressFn = unsafe extern "C" fn(*const u8) -> *const c_void;

struct GlLibraryWrapper {
    handle: *mut c_void,
    glx_get_proc_address: Option<GlxGetProcAddressFn>,
}

unsafe impl Send for GlLibraryWrapper {}
unsafe impl Sync for GlLibraryWrapper {}

static GL_LIBRARY: LazyLock<Option<GlLibraryWrapper>> = LazyLock::new(|| {
    // libGL.so.1 is the usual runtime SONAME; the unversioned name is only
    // present with the development packages installed.
    for soname in [c"libGL.so.1", c"libGL.so"] {
        let handle = unsafe { dlopen(soname.as_ptr(), RTLD_LAZY | RTLD_LOCAL) };
        if handle.is_null() {
            continue;
        }
        let glx_get_proc_address = unsafe {
            let mut address = dlsym(handle, c"glXGetProcAddressARB".as_ptr());
            if address.is_null() {
                address = dlsym(handle, c"glXGetProcAddress".as_ptr());
            }
            if address.is_null() {
                None
            } else {
                Some(mem::transmute::<*mut c_void, GlxGetProcAddressFn>(address))
            }
        };
        debug!("opened {:?}", soname);
        return Some(GlLibraryWrapper {
            handle,
            glx_get_proc_address,
        });
    }
    error!("unable to open the system OpenGL shared object");
    None
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
        match library.glx_get_proc_address {
            Some(glx_get_proc_address) => {
                let name = CString::new(name).unwrap();
                unsafe { glx_get_proc_address(name.as_ptr().cast()) }
            }
            None => ptr::null(),
        }
    }

    fn static_symbol(&self, name: &str) -> *const c_void {
        match &*GL_LIBRARY {
            Some(library) => {
                let name = CString::new(name).unwrap();
                unsafe { dlsym(library.handle, name.as_ptr()).cast_const() }
            }
            None => ptr::null(),
        }
    }
}
