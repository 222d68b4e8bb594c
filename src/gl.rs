// glsym/src/gl.rs
//
//! The entry-point table and its batch loader.

#![allow(non_snake_case)]

use log::{error, warn};
use std::mem;
use std::os::raw::c_void;
use std::ptr;

use crate::library::GlLibrary;
use crate::platform::SystemLibrary;

use self::types::*;

/// Scalar types shared by the entry-point prototypes.
pub mod types {
    use std::os::raw::{
        c_char, c_double, c_float, c_int, c_schar, c_short, c_uchar, c_uint, c_ushort, c_void,
    };

    pub type GLenum = c_uint;
    pub type GLboolean = c_uchar;
    pub type GLbitfield = c_uint;
    pub type GLvoid = c_void;
    pub type GLbyte = c_schar;
    pub type GLshort = c_short;
    pub type GLint = c_int;
    pub type GLsizei = c_int;
    pub type GLubyte = c_uchar;
    pub type GLushort = c_ushort;
    pub type GLuint = c_uint;
    pub type GLfloat = c_float;
    pub type GLdouble = c_double;
    pub type GLsizeiptr = isize;
    pub type GLintptr = isize;
    pub type GLchar = c_char;
}

pub const FALSE: GLboolean = 0;
pub const TRUE: GLboolean = 1;
pub const NO_ERROR: GLenum = 0;

pub const COLOR_BUFFER_BIT: GLbitfield = 0x0000_4000;
pub const TRIANGLES: GLenum = 0x0004;
pub const TRIANGLE_STRIP: GLenum = 0x0005;
pub const TRIANGLE_FAN: GLenum = 0x0006;

pub const BLEND: GLenum = 0x0BE2;
pub const SRC_ALPHA: GLenum = 0x0302;
pub const ONE_MINUS_SRC_ALPHA: GLenum = 0x0303;

pub const ARRAY_BUFFER: GLenum = 0x8892;
pub const ELEMENT_ARRAY_BUFFER: GLenum = 0x8893;
pub const STATIC_DRAW: GLenum = 0x88E4;
pub const FLOAT: GLenum = 0x1406;
pub const UNSIGNED_BYTE: GLenum = 0x1401;

pub const TEXTURE_2D: GLenum = 0x0DE1;
pub const TEXTURE0: GLenum = 0x84C0;
pub const TEXTURE_MIN_FILTER: GLenum = 0x2801;
pub const TEXTURE_MAG_FILTER: GLenum = 0x2800;
pub const TEXTURE_WRAP_S: GLenum = 0x2802;
pub const TEXTURE_WRAP_T: GLenum = 0x2803;
pub const CLAMP_TO_EDGE: GLenum = 0x812F;
pub const LINEAR: GLenum = 0x2601;
pub const NEAREST: GLenum = 0x2600;
pub const RGB: GLenum = 0x1907;
pub const RGBA: GLenum = 0x1908;

pub const VERTEX_SHADER: GLenum = 0x8B31;
pub const FRAGMENT_SHADER: GLenum = 0x8B30;
pub const COMPILE_STATUS: GLenum = 0x8B81;
pub const LINK_STATUS: GLenum = 0x8B82;
pub const INFO_LOG_LENGTH: GLenum = 0x8B84;

/// Every required entry point, in load order.
pub const ENTRY_POINT_NAMES: [&str; 44] = [
    "glClear",
    "glClearColor",
    "glViewport",
    "glEnable",
    "glDisable",
    "glBlendFunc",
    "glGetError",
    "glGetString",
    "glGenBuffers",
    "glBindBuffer",
    "glBufferData",
    "glDeleteBuffers",
    "glGenVertexArrays",
    "glBindVertexArray",
    "glDeleteVertexArrays",
    "glVertexAttribPointer",
    "glEnableVertexAttribArray",
    "glDisableVertexAttribArray",
    "glCreateShader",
    "glShaderSource",
    "glCompileShader",
    "glGetShaderiv",
    "glGetShaderInfoLog",
    "glDeleteShader",
    "glCreateProgram",
    "glAttachShader",
    "glLinkProgram",
    "glGetProgramiv",
    "glGetProgramInfoLog",
    "glUseProgram",
    "glDeleteProgram",
    "glGetUniformLocation",
    "glUniform1i",
    "glUniformMatrix4fv",
    "glUniform4f",
    "glGetAttribLocation",
    "glGenTextures",
    "glBindTexture",
    "glTexImage2D",
    "glTexParameteri",
    "glDeleteTextures",
    "glActiveTexture",
    "glDrawArrays",
    "glDrawElements",
];

/// One slot of the resolved table: an entry-point address, or null if the
/// entry point is unavailable on this system.
#[derive(Clone, Copy)]
pub struct FnPtr {
    f: *const c_void,
    is_loaded: bool,
}

// Slot addresses are written by the batch loader before any sharing and are
// immutable afterwards.
unsafe impl Send for FnPtr {}
unsafe impl Sync for FnPtr {}

impl FnPtr {
    const UNRESOLVED: FnPtr = FnPtr {
        f: ptr::null(),
        is_loaded: false,
    };

    fn new(address: *const c_void) -> FnPtr {
        FnPtr {
            f: address,
            is_loaded: !address.is_null(),
        }
    }

    /// Whether this entry point resolved.
    ///
    /// Optional entry points (the vertex-array-object functions on older
    /// stacks) must be checked here before their calling methods are used.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// The resolved address; null if the entry point is unavailable.
    #[inline]
    pub fn address(&self) -> *const c_void {
        self.f
    }

    #[inline]
    fn entry(&self) -> *const c_void {
        if !self.is_loaded {
            missing_entry_point()
        }
        self.f
    }
}

#[cold]
fn missing_entry_point() -> ! {
    panic!("called an OpenGL entry point that was not loaded")
}

/// The resolved entry-point table.
///
/// Construct one with [`Gl::new`], call [`Gl::load_all`] once after making a
/// GL context current, then hand the table out by reference. Each slot can
/// be inspected with `gl.Name.is_loaded()` and called with `gl.Name(...)`.
#[derive(Clone)]
pub struct Gl {
    pub Clear: FnPtr,
    pub ClearColor: FnPtr,
    pub Viewport: FnPtr,
    pub Enable: FnPtr,
    pub Disable: FnPtr,
    pub BlendFunc: FnPtr,
    pub GetError: FnPtr,
    pub GetString: FnPtr,
    pub GenBuffers: FnPtr,
    pub BindBuffer: FnPtr,
    pub BufferData: FnPtr,
    pub DeleteBuffers: FnPtr,
    pub GenVertexArrays: FnPtr,
    pub BindVertexArray: FnPtr,
    pub DeleteVertexArrays: FnPtr,
    pub VertexAttribPointer: FnPtr,
    pub EnableVertexAttribArray: FnPtr,
    pub DisableVertexAttribArray: FnPtr,
    pub CreateShader: FnPtr,
    pub ShaderSource: FnPtr,
    pub CompileShader: FnPtr,
    pub GetShaderiv: FnPtr,
    pub GetShaderInfoLog: FnPtr,
    pub DeleteShader: FnPtr,
    pub CreateProgram: FnPtr,
    pub AttachShader: FnPtr,
    pub LinkProgram: FnPtr,
    pub GetProgramiv: FnPtr,
    pub GetProgramInfoLog: FnPtr,
    pub UseProgram: FnPtr,
    pub DeleteProgram: FnPtr,
    pub GetUniformLocation: FnPtr,
    pub Uniform1i: FnPtr,
    pub UniformMatrix4fv: FnPtr,
    pub Uniform4f: FnPtr,
    pub GetAttribLocation: FnPtr,
    pub GenTextures: FnPtr,
    pub BindTexture: FnPtr,
    pub TexImage2D: FnPtr,
    pub TexParameteri: FnPtr,
    pub DeleteTextures: FnPtr,
    pub ActiveTexture: FnPtr,
    pub DrawArrays: FnPtr,
    pub DrawElements: FnPtr,
    missing: Vec<&'static str>,
}

impl Default for Gl {
    fn default() -> Gl {
        Gl::new()
    }
}

impl Gl {
    /// An empty table with every entry point unresolved.
    pub fn new() -> Gl {
        Gl {
            Clear: FnPtr::UNRESOLVED,
            ClearColor: FnPtr::UNRESOLVED,
            Viewport: FnPtr::UNRESOLVED,
            Enable: FnPtr::UNRESOLVED,
            Disable: FnPtr::UNRESOLVED,
            BlendFunc: FnPtr::UNRESOLVED,
            GetError: FnPtr::UNRESOLVED,
            GetString: FnPtr::UNRESOLVED,
            GenBuffers: FnPtr::UNRESOLVED,
            BindBuffer: FnPtr::UNRESOLVED,
            BufferData: FnPtr::UNRESOLVED,
            DeleteBuffers: FnPtr::UNRESOLVED,
            GenVertexArrays: FnPtr::UNRESOLVED,
            BindVertexArray: FnPtr::UNRESOLVED,
            DeleteVertexArrays: FnPtr::UNRESOLVED,
            VertexAttribPointer: FnPtr::UNRESOLVED,
            EnableVertexAttribArray: FnPtr::UNRESOLVED,
            DisableVertexAttribArray: FnPtr::UNRESOLVED,
            CreateShader: FnPtr::UNRESOLVED,
            ShaderSource: FnPtr::UNRESOLVED,
            CompileShader: FnPtr::UNRESOLVED,
            GetShaderiv: FnPtr::UNRESOLVED,
            GetShaderInfoLog: FnPtr::UNRESOLVED,
            DeleteShader: FnPtr::UNRESOLVED,
            CreateProgram: FnPtr::UNRESOLVED,
            AttachShader: FnPtr::UNRESOLVED,
            LinkProgram: FnPtr::UNRESOLVED,
            GetProgramiv: FnPtr::UNRESOLVED,
            GetProgramInfoLog: FnPtr::UNRESOLVED,
            UseProgram: FnPtr::UNRESOLVED,
            DeleteProgram: FnPtr::UNRESOLVED,
            GetUniformLocation: FnPtr::UNRESOLVED,
            Uniform1i: FnPtr::UNRESOLVED,
            UniformMatrix4fv: FnPtr::UNRESOLVED,
            Uniform4f: FnPtr::UNRESOLVED,
            GetAttribLocation: FnPtr::UNRESOLVED,
            GenTextures: FnPtr::UNRESOLVED,
            BindTexture: FnPtr::UNRESOLVED,
            TexImage2D: FnPtr::UNRESOLVED,
            TexParameteri: FnPtr::UNRESOLVED,
            DeleteTextures: FnPtr::UNRESOLVED,
            ActiveTexture: FnPtr::UNRESOLVED,
            DrawArrays: FnPtr::UNRESOLVED,
            DrawElements: FnPtr::UNRESOLVED,
            missing: Vec::new(),
        }
    }

    /// Resolves every required entry point against the system OpenGL
    /// library.
    ///
    /// Call once, after making a GL context current on this thread. Returns
    /// true iff everything resolved. On a partial failure the table keeps
    /// whatever did resolve, and [`missing_entry_points`](Gl::missing_entry_points)
    /// lists the rest.
    pub fn load_all(&mut self) -> bool {
        self.load_all_with(&SystemLibrary)
    }

    /// Like [`load_all`](Gl::load_all), resolving against an explicit
    /// library backend.
    pub fn load_all_with<L: GlLibrary>(&mut self, library: &L) -> bool {
        if !library.open() {
            error!("no OpenGL library could be opened; nothing was loaded");
            *self = Gl::new();
            self.missing = ENTRY_POINT_NAMES.to_vec();
            return false;
        }

        let mut missing: Vec<&'static str> = Vec::new();
        {
            let mut bind = |slot: &mut FnPtr, name: &'static str| {
                let address = library.resolve(name);
                if address.is_null() {
                    warn!("unresolved OpenGL entry point {}", name);
                    missing.push(name);
                }
                *slot = FnPtr::new(address);
            };

            bind(&mut self.Clear, "glClear");
            bind(&mut self.ClearColor, "glClearColor");
            bind(&mut self.Viewport, "glViewport");
            bind(&mut self.Enable, "glEnable");
            bind(&mut self.Disable, "glDisable");
            bind(&mut self.BlendFunc, "glBlendFunc");
            bind(&mut self.GetError, "glGetError");
            bind(&mut self.GetString, "glGetString");
            bind(&mut self.GenBuffers, "glGenBuffers");
            bind(&mut self.BindBuffer, "glBindBuffer");
            bind(&mut self.BufferData, "glBufferData");
            bind(&mut self.DeleteBuffers, "glDeleteBuffers");
            bind(&mut self.GenVertexArrays, "glGenVertexArrays");
            bind(&mut self.BindVertexArray, "glBindVertexArray");
            bind(&mut self.DeleteVertexArrays, "glDeleteVertexArrays");
            bind(&mut self.VertexAttribPointer, "glVertexAttribPointer");
            bind(&mut self.EnableVertexAttribArray, "glEnableVertexAttribArray");
            bind(&mut self.DisableVertexAttribArray, "glDisableVertexAttribArray");
            bind(&mut self.CreateShader, "glCreateShader");
            bind(&mut self.ShaderSource, "glShaderSource");
            bind(&mut self.CompileShader, "glCompileShader");
            bind(&mut self.GetShaderiv, "glGetShaderiv");
            bind(&mut self.GetShaderInfoLog, "glGetShaderInfoLog");
            bind(&mut self.DeleteShader, "glDeleteShader");
            bind(&mut self.CreateProgram, "glCreateProgram");
            bind(&mut self.AttachShader, "glAttachShader");
            bind(&mut self.LinkProgram, "glLinkProgram");
            bind(&mut self.GetProgramiv, "glGetProgramiv");
            bind(&mut self.GetProgramInfoLog, "glGetProgramInfoLog");
            bind(&mut self.UseProgram, "glUseProgram");
            bind(&mut self.DeleteProgram, "glDeleteProgram");
            bind(&mut self.GetUniformLocation, "glGetUniformLocation");
            bind(&mut self.Uniform1i, "glUniform1i");
            bind(&mut self.UniformMatrix4fv, "glUniformMatrix4fv");
            bind(&mut self.Uniform4f, "glUniform4f");
            bind(&mut self.GetAttribLocation, "glGetAttribLocation");
            bind(&mut self.GenTextures, "glGenTextures");
            bind(&mut self.BindTexture, "glBindTexture");
            bind(&mut self.TexImage2D, "glTexImage2D");
            bind(&mut self.TexParameteri, "glTexParameteri");
            bind(&mut self.DeleteTextures, "glDeleteTextures");
            bind(&mut self.ActiveTexture, "glActiveTexture");
            bind(&mut self.DrawArrays, "glDrawArrays");
            bind(&mut self.DrawElements, "glDrawElements");
        }
        self.missing = missing;

        if self.missing.is_empty() {
            true
        } else {
            error!(
                "{} of {} OpenGL entry points failed to resolve",
                self.missing.len(),
                ENTRY_POINT_NAMES.len()
            );
            false
        }
    }

    /// Number of required entry points that did not resolve.
    #[inline]
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// The unresolved entry-point names, in load order.
    #[inline]
    pub fn missing_entry_points(&self) -> &[&'static str] {
        &self.missing
    }

    #[inline]
    pub unsafe fn Clear(&self, mask: GLbitfield) {
        mem::transmute::<_, extern "system" fn(GLbitfield)>(self.Clear.entry())(mask)
    }

    #[inline]
    pub unsafe fn ClearColor(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        mem::transmute::<_, extern "system" fn(GLfloat, GLfloat, GLfloat, GLfloat)>(
            self.ClearColor.entry(),
        )(red, green, blue, alpha)
    }

    #[inline]
    pub unsafe fn Viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        mem::transmute::<_, extern "system" fn(GLint, GLint, GLsizei, GLsizei)>(
            self.Viewport.entry(),
        )(x, y, width, height)
    }

    #[inline]
    pub unsafe fn Enable(&self, cap: GLenum) {
        mem::transmute::<_, extern "system" fn(GLenum)>(self.Enable.entry())(cap)
    }

    #[inline]
    pub unsafe fn Disable(&self, cap: GLenum) {
        mem::transmute::<_, extern "system" fn(GLenum)>(self.Disable.entry())(cap)
    }

    #[inline]
    pub unsafe fn BlendFunc(&self, sfactor: GLenum, dfactor: GLenum) {
        mem::transmute::<_, extern "system" fn(GLenum, GLenum)>(self.BlendFunc.entry())(
            sfactor, dfactor,
        )
    }

    #[inline]
    pub unsafe fn GetError(&self) -> GLenum {
        mem::transmute::<_, extern "system" fn() -> GLenum>(self.GetError.entry())()
    }

    #[inline]
    pub unsafe fn GetString(&self, name: GLenum) -> *const GLubyte {
        mem::transmute::<_, extern "system" fn(GLenum) -> *const GLubyte>(self.GetString.entry())(
            name,
        )
    }

    #[inline]
    pub unsafe fn GenBuffers(&self, n: GLsizei, buffers: *mut GLuint) {
        mem::transmute::<_, extern "system" fn(GLsizei, *mut GLuint)>(self.GenBuffers.entry())(
            n, buffers,
        )
    }

    #[inline]
    pub unsafe fn BindBuffer(&self, target: GLenum, buffer: GLuint) {
        mem::transmute::<_, extern "system" fn(GLenum, GLuint)>(self.BindBuffer.entry())(
            target, buffer,
        )
    }

    #[inline]
    pub unsafe fn BufferData(
        &self,
        target: GLenum,
        size: GLsizeiptr,
        data: *const c_void,
        usage: GLenum,
    ) {
        mem::transmute::<_, extern "system" fn(GLenum, GLsizeiptr, *const c_void, GLenum)>(
            self.BufferData.entry(),
        )(target, size, data, usage)
    }

    #[inline]
    pub unsafe fn DeleteBuffers(&self, n: GLsizei, buffers: *const GLuint) {
        mem::transmute::<_, extern "system" fn(GLsizei, *const GLuint)>(self.DeleteBuffers.entry())(
            n, buffers,
        )
    }

    #[inline]
    pub unsafe fn GenVertexArrays(&self, n: GLsizei, arrays: *mut GLuint) {
        mem::transmute::<_, extern "system" fn(GLsizei, *mut GLuint)>(self.GenVertexArrays.entry())(
            n, arrays,
        )
    }

    #[inline]
    pub unsafe fn BindVertexArray(&self, array: GLuint) {
        mem::transmute::<_, extern "system" fn(GLuint)>(self.BindVertexArray.entry())(array)
    }

    #[inline]
    pub unsafe fn DeleteVertexArrays(&self, n: GLsizei, arrays: *const GLuint) {
        mem::transmute::<_, extern "system" fn(GLsizei, *const GLuint)>(
            self.DeleteVertexArrays.entry(),
        )(n, arrays)
    }

    #[inline]
    pub unsafe fn VertexAttribPointer(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: GLboolean,
        stride: GLsizei,
        pointer: *const c_void,
    ) {
        mem::transmute::<
            _,
            extern "system" fn(GLuint, GLint, GLenum, GLboolean, GLsizei, *const c_void),
        >(self.VertexAttribPointer.entry())(index, size, type_, normalized, stride, pointer)
    }

    #[inline]
    pub unsafe fn EnableVertexAttribArray(&self, index: GLuint) {
        mem::transmute::<_, extern "system" fn(GLuint)>(self.EnableVertexAttribArray.entry())(index)
    }

    #[inline]
    pub unsafe fn DisableVertexAttribArray(&self, index: GLuint) {
        mem::transmute::<_, extern "system" fn(GLuint)>(self.DisableVertexAttribArray.entry())(
            index,
        )
    }

    #[inline]
    pub unsafe fn CreateShader(&self, type_: GLenum) -> GLuint {
        mem::transmute::<_, extern "system" fn(GLenum) -> GLuint>(self.CreateShader.entry())(type_)
    }

    #[inline]
    pub unsafe fn ShaderSource(
        &self,
        shader: GLuint,
        count: GLsizei,
        string: *const *const GLchar,
        length: *const GLint,
    ) {
        mem::transmute::<
            _,
            extern "system" fn(GLuint, GLsizei, *const *const GLchar, *const GLint),
        >(self.ShaderSource.entry())(shader, count, string, length)
    }

    #[inline]
    pub unsafe fn CompileShader(&self, shader: GLuint) {
        mem::transmute::<_, extern "system" fn(GLuint)>(self.CompileShader.entry())(shader)
    }

    #[inline]
    pub unsafe fn GetShaderiv(&self, shader: GLuint, pname: GLenum, param: *mut GLint) {
        mem::transmute::<_, extern "system" fn(GLuint, GLenum, *mut GLint)>(
            self.GetShaderiv.entry(),
        )(shader, pname, param)
    }

    #[inline]
    pub unsafe fn GetShaderInfoLog(
        &self,
        shader: GLuint,
        max_length: GLsizei,
        length: *mut GLsizei,
        info_log: *mut GLchar,
    ) {
        mem::transmute::<_, extern "system" fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar)>(
            self.GetShaderInfoLog.entry(),
        )(shader, max_length, length, info_log)
    }

    #[inline]
    pub unsafe fn DeleteShader(&self, shader: GLuint) {
        mem::transmute::<_, extern "system" fn(GLuint)>(self.DeleteShader.entry())(shader)
    }

    #[inline]
    pub unsafe fn CreateProgram(&self) -> GLuint {
        mem::transmute::<_, extern "system" fn() -> GLuint>(self.CreateProgram.entry())()
    }

    #[inline]
    pub unsafe fn AttachShader(&self, program: GLuint, shader: GLuint) {
        mem::transmute::<_, extern "system" fn(GLuint, GLuint)>(self.AttachShader.entry())(
            program, shader,
        )
    }

    #[inline]
    pub unsafe fn LinkProgram(&self, program: GLuint) {
        mem::transmute::<_, extern "system" fn(GLuint)>(self.LinkProgram.entry())(program)
    }

    #[inline]
    pub unsafe fn GetProgramiv(&self, program: GLuint, pname: GLenum, param: *mut GLint) {
        mem::transmute::<_, extern "system" fn(GLuint, GLenum, *mut GLint)>(
            self.GetProgramiv.entry(),
        )(program, pname, param)
    }

    #[inline]
    pub unsafe fn GetProgramInfoLog(
        &self,
        program: GLuint,
        max_length: GLsizei,
        length: *mut GLsizei,
        info_log: *mut GLchar,
    ) {
        mem::transmute::<_, extern "system" fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar)>(
            self.GetProgramInfoLog.entry(),
        )(program, max_length, length, info_log)
    }

    #[inline]
    pub unsafe fn UseProgram(&self, program: GLuint) {
        mem::transmute::<_, extern "system" fn(GLuint)>(self.UseProgram.entry())(program)
    }

    #[inline]
    pub unsafe fn DeleteProgram(&self, program: GLuint) {
        mem::transmute::<_, extern "system" fn(GLuint)>(self.DeleteProgram.entry())(program)
    }

    #[inline]
    pub unsafe fn GetUniformLocation(&self, program: GLuint, name: *const GLchar) -> GLint {
        mem::transmute::<_, extern "system" fn(GLuint, *const GLchar) -> GLint>(
            self.GetUniformLocation.entry(),
        )(program, name)
    }

    #[inline]
    pub unsafe fn Uniform1i(&self, location: GLint, v0: GLint) {
        mem::transmute::<_, extern "system" fn(GLint, GLint)>(self.Uniform1i.entry())(location, v0)
    }

    #[inline]
    pub unsafe fn UniformMatrix4fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    ) {
        mem::transmute::<_, extern "system" fn(GLint, GLsizei, GLboolean, *const GLfloat)>(
            self.UniformMatrix4fv.entry(),
        )(location, count, transpose, value)
    }

    #[inline]
    pub unsafe fn Uniform4f(
        &self,
        location: GLint,
        v0: GLfloat,
        v1: GLfloat,
        v2: GLfloat,
        v3: GLfloat,
    ) {
        mem::transmute::<_, extern "system" fn(GLint, GLfloat, GLfloat, GLfloat, GLfloat)>(
            self.Uniform4f.entry(),
        )(location, v0, v1, v2, v3)
    }

    #[inline]
    pub unsafe fn GetAttribLocation(&self, program: GLuint, name: *const GLchar) -> GLint {
        mem::transmute::<_, extern "system" fn(GLuint, *const GLchar) -> GLint>(
            self.GetAttribLocation.entry(),
        )(program, name)
    }

    #[inline]
    pub unsafe fn GenTextures(&self, n: GLsizei, textures: *mut GLuint) {
        mem::transmute::<_, extern "system" fn(GLsizei, *mut GLuint)>(self.GenTextures.entry())(
            n, textures,
        )
    }

    #[inline]
    pub unsafe fn BindTexture(&self, target: GLenum, texture: GLuint) {
        mem::transmute::<_, extern "system" fn(GLenum, GLuint)>(self.BindTexture.entry())(
            target, texture,
        )
    }

    #[inline]
    pub unsafe fn TexImage2D(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        mem::transmute::<
            _,
            extern "system" fn(
                GLenum,
                GLint,
                GLint,
                GLsizei,
                GLsizei,
                GLint,
                GLenum,
                GLenum,
                *const c_void,
            ),
        >(self.TexImage2D.entry())(
            target,
            level,
            internalformat,
            width,
            height,
            border,
            format,
            type_,
            pixels,
        )
    }

    #[inline]
    pub unsafe fn TexParameteri(&self, target: GLenum, pname: GLenum, param: GLint) {
        mem::transmute::<_, extern "system" fn(GLenum, GLenum, GLint)>(self.TexParameteri.entry())(
            target, pname, param,
        )
    }

    #[inline]
    pub unsafe fn DeleteTextures(&self, n: GLsizei, textures: *const GLuint) {
        mem::transmute::<_, extern "system" fn(GLsizei, *const GLuint)>(
            self.DeleteTextures.entry(),
        )(n, textures)
    }

    #[inline]
    pub unsafe fn ActiveTexture(&self, texture: GLenum) {
        mem::transmute::<_, extern "system" fn(GLenum)>(self.ActiveTexture.entry())(texture)
    }

    #[inline]
    pub unsafe fn DrawArrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        mem::transmute::<_, extern "system" fn(GLenum, GLint, GLsizei)>(self.DrawArrays.entry())(
            mode, first, count,
        )
    }

    #[inline]
    pub unsafe fn DrawElements(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
    ) {
        mem::transmute::<_, extern "system" fn(GLenum, GLsizei, GLenum, *const c_void)>(
            self.DrawElements.entry(),
        )(mode, count, type_, indices)
    }
}
