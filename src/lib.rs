// glsym/src/lib.rs
//
//! `glsym` is a cross-platform, low-level OpenGL entry-point loader.
//!
//! OpenGL functions are not statically linked; they have to be resolved by
//! name at runtime against whatever driver the system provides. This crate
//! opens the system's GL library once per process, resolves a fixed table of
//! entry points through the platform's proc-address machinery, and reports
//! what resolved:
//!
//! * On Windows, `opengl32.dll` is located (or loaded) and extension entry
//!   points are queried through `wglGetProcAddress`, whose reserved failure
//!   values are filtered out before falling back to `GetProcAddress`.
//! * On macOS, the OpenGL framework is `dlopen`ed and every entry point is
//!   visible to plain `dlsym`.
//! * On Linux and other Unixes, libGL is `dlopen`ed by its runtime SONAME
//!   and extension entry points are queried through `glXGetProcAddress`,
//!   falling back to `dlsym`.
//!
//! Loading never panics and never aborts: the result is a boolean plus a
//! list of whatever didn't resolve, so a host can decide for itself whether
//! a partially-loaded table is usable. Entry points that may legitimately be
//! absent (the vertex-array-object functions on older stacks) are gated
//! behind per-slot [`is_loaded`](gl::FnPtr::is_loaded) checks.
//!
//! ```no_run
//! use glsym::Gl;
//!
//! let mut gl = Gl::new();
//! if !gl.load_all() {
//!     eprintln!("missing entry points: {:?}", gl.missing_entry_points());
//! }
//! unsafe {
//!     gl.ClearColor(0.1, 0.1, 0.1, 1.0);
//!     gl.Clear(glsym::gl::COLOR_BUFFER_BIT);
//! }
//! ```
//!
//! `load_all` must be called after a GL context has been made current on the
//! calling thread, and before any other thread reads the table.

pub mod gl;
pub mod library;
pub mod platform;

pub use crate::gl::Gl;
pub use crate::library::GlLibrary;
pub use crate::platform::SystemLibrary;

#[cfg(test)]
mod tests;
