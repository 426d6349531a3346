use core::{ffi::c_void, fmt};

/// An opaque handle to a platform window.
///
/// The handle is borrowed, never owned: nothing in this crate creates or
/// destroys windows, and a handle is never checked before it is passed on.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub const NULL: Self = Self(0);

    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }
    pub const fn as_raw(self) -> isize {
        self.0
    }
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<*mut c_void> for WindowHandle {
    fn from(ptr: *mut c_void) -> Self {
        Self(ptr as isize)
    }
}

impl fmt::Debug for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowHandle({:#x})", self.0)
    }
}
