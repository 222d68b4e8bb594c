// glsym/src/tests.rs

use std::cell::RefCell;
use std::collections::HashMap;
use std::os::raw::c_void;
use std::ptr;

use serial_test::serial;

use crate::gl::types::{GLbitfield, GLenum, GLint, GLsizei};
use crate::gl::{Gl, COLOR_BUFFER_BIT, ENTRY_POINT_NAMES, NO_ERROR};
use crate::library::GlLibrary;
use crate::platform::SystemLibrary;

extern "system" fn stub_clear(_mask: GLbitfield) {}

extern "system" fn stub_viewport(_x: GLint, _y: GLint, _width: GLsizei, _height: GLsizei) {}

extern "system" fn stub_get_error() -> GLenum {
    NO_ERROR
}

/// A scripted library backend: symbol tables are plain maps, and every
/// vendor query is recorded so tests can observe resolution order.
#[derive(Default)]
struct FakeLibrary {
    open_ok: bool,
    vendor: HashMap<&'static str, usize>,
    symbols: HashMap<&'static str, usize>,
    queries: RefCell<Vec<String>>,
}

impl FakeLibrary {
    fn with_all_symbols() -> FakeLibrary {
        let mut library = FakeLibrary {
            open_ok: true,
            ..FakeLibrary::default()
        };
        for (index, name) in ENTRY_POINT_NAMES.iter().enumerate() {
            library.symbols.insert(name, fake_address(index));
        }
        library
    }
}

fn fake_address(index: usize) -> usize {
    0x1000 + index * 0x10
}

impl GlLibrary for FakeLibrary {
    fn open(&self) -> bool {
        self.open_ok
    }

    fn vendor_proc_address(&self, name: &str) -> *const c_void {
        self.queries.borrow_mut().push(name.to_owned());
        match self.vendor.get(name) {
            Some(&address) => address as *const c_void,
            None => ptr::null(),
        }
    }

    fn static_symbol(&self, name: &str) -> *const c_void {
        match self.symbols.get(name) {
            Some(&address) => address as *const c_void,
            None => ptr::null(),
        }
    }
}

#[test]
fn reserved_vendor_addresses_fall_back_to_dynamic_lookup() {
    for sentinel in [0, 1, 2, 3, usize::MAX] {
        let mut library = FakeLibrary {
            open_ok: true,
            ..FakeLibrary::default()
        };
        library.vendor.insert("glClear", sentinel);
        library.symbols.insert("glClear", 0xbeef0);

        let address = library.resolve("glClear");
        assert_eq!(
            address as usize, 0xbeef0,
            "sentinel {:#x} must not be forwarded",
            sentinel
        );
    }
}

#[test]
fn reserved_vendor_address_without_fallback_is_null() {
    for sentinel in [0, 1, 2, 3, usize::MAX] {
        let mut library = FakeLibrary {
            open_ok: true,
            ..FakeLibrary::default()
        };
        library.vendor.insert("glClear", sentinel);

        assert!(library.resolve("glClear").is_null());
    }
}

#[test]
fn valid_vendor_address_wins_over_dynamic_lookup() {
    let mut library = FakeLibrary {
        open_ok: true,
        ..FakeLibrary::default()
    };
    library.vendor.insert("glGenBuffers", 0xaaaa0);
    library.symbols.insert("glGenBuffers", 0xbbbb0);

    assert_eq!(library.resolve("glGenBuffers") as usize, 0xaaaa0);
}

#[test]
fn dynamic_lookup_covers_symbols_the_vendor_cannot_see() {
    let mut library = FakeLibrary {
        open_ok: true,
        ..FakeLibrary::default()
    };
    library.symbols.insert("glViewport", 0xcafe0);

    assert_eq!(library.resolve("glViewport") as usize, 0xcafe0);
}

#[test]
fn missing_library_loads_nothing() {
    let library = FakeLibrary {
        open_ok: false,
        ..FakeLibrary::with_all_symbols()
    };

    let mut gl = Gl::new();
    assert!(!gl.load_all_with(&library));
    assert_eq!(gl.missing_count(), ENTRY_POINT_NAMES.len());
    assert!(!gl.Clear.is_loaded());
    assert!(!gl.GetString.is_loaded());
    assert!(!gl.DrawElements.is_loaded());
    assert!(library.queries.borrow().is_empty());
}

#[test]
fn single_missing_entry_point_is_non_fatal() {
    let mut library = FakeLibrary::with_all_symbols();
    library.symbols.remove("glDrawElements");

    let mut gl = Gl::new();
    assert!(!gl.load_all_with(&library));
    assert_eq!(gl.missing_entry_points(), &["glDrawElements"][..]);
    assert!(!gl.DrawElements.is_loaded());
    assert!(gl.Clear.is_loaded());
    assert!(gl.DrawArrays.is_loaded());
    assert!(gl.TexImage2D.is_loaded());
}

#[test]
fn complete_table_loads() {
    let library = FakeLibrary::with_all_symbols();

    let mut gl = Gl::new();
    assert!(gl.load_all_with(&library));
    assert_eq!(gl.missing_count(), 0);
    assert!(gl.Clear.is_loaded());
    assert!(gl.GenVertexArrays.is_loaded());
    assert!(gl.DrawElements.is_loaded());
}

#[test]
fn loading_twice_leaves_the_table_unchanged() {
    let library = FakeLibrary::with_all_symbols();

    let mut gl = Gl::new();
    assert!(gl.load_all_with(&library));
    let clear = gl.Clear.address();
    let draw_elements = gl.DrawElements.address();

    assert!(gl.load_all_with(&library));
    assert_eq!(gl.Clear.address(), clear);
    assert_eq!(gl.DrawElements.address(), draw_elements);
    assert_eq!(gl.missing_count(), 0);
}

#[test]
fn entry_points_resolve_in_declared_order() {
    let library = FakeLibrary::with_all_symbols();

    let mut gl = Gl::new();
    gl.load_all_with(&library);

    let queries = library.queries.borrow();
    let expected: Vec<String> = ENTRY_POINT_NAMES.iter().map(|name| name.to_string()).collect();
    assert_eq!(*queries, expected);
}

#[test]
fn reduced_backend_reports_the_rest_as_missing() {
    let mut library = FakeLibrary {
        open_ok: true,
        ..FakeLibrary::default()
    };
    library.symbols.insert("glClear", stub_clear as usize);
    library.symbols.insert("glViewport", stub_viewport as usize);
    library.symbols.insert("glGetError", stub_get_error as usize);

    let mut gl = Gl::new();
    assert!(!gl.load_all_with(&library));
    assert_eq!(gl.missing_count(), ENTRY_POINT_NAMES.len() - 3);

    // The resolved subset stays callable.
    assert!(gl.Clear.is_loaded());
    assert!(gl.Viewport.is_loaded());
    assert!(gl.GetError.is_loaded());
    unsafe {
        gl.Clear(COLOR_BUFFER_BIT);
        gl.Viewport(0, 0, 64, 64);
        assert_eq!(gl.GetError(), NO_ERROR);
    }
    assert!(!gl.GenBuffers.is_loaded());
}

#[test]
#[should_panic(expected = "not loaded")]
fn calling_an_unloaded_entry_point_panics() {
    let gl = Gl::new();
    unsafe {
        gl.Clear(COLOR_BUFFER_BIT);
    }
}

#[test]
#[serial]
fn system_library_open_is_idempotent() {
    // Whether or not this machine has a GL library, a second open must
    // report the same cached outcome.
    let first = SystemLibrary.open();
    let second = SystemLibrary.open();
    assert_eq!(first, second);
}

#[test]
#[serial]
fn system_loading_is_deterministic() {
    let mut first = Gl::new();
    let first_result = first.load_all();

    let mut second = Gl::new();
    let second_result = second.load_all();

    assert_eq!(first_result, second_result);
    assert_eq!(first.missing_entry_points(), second.missing_entry_points());
}
