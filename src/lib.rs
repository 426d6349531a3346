//! Type-safe access to the per-window attributes of the Desktop Window Manager.
//!
//! [`WindowAttributes`] binds to a window handle and exposes one method per
//! attribute, each tied to a single `DWMWA_*` identifier and value type:
//!
//! ```no_run
//! use dwm_window_attributes::{WindowAttributes, WindowHandle};
//!
//! # fn main() -> Result<(), dwm_window_attributes::PlatformAttributeError> {
//! # let hwnd = WindowHandle::NULL;
//! let attributes = WindowAttributes::new(hwnd);
//! let bounds = attributes.extended_frame_bounds()?;
//! attributes.set_disallow_peek(true)?;
//! # let _ = bounds;
//! # Ok(())
//! # }
//! ```
//!
//! The same attributes can be named as types with [`WindowAttributes::get`] and
//! [`WindowAttributes::set`] and the markers in [`attr`].

mod accessor;
mod attribute;
mod cache;
mod compositor;
mod dwm;
mod error;
mod handle;
mod platform;

pub use accessor::WindowAttributes;
pub use attribute::{
    attr, Attribute, Bool, Flip3dWindowPolicy, NcRenderingPolicy, Readable, Rect,
    WindowAttribute, Writable, CLOAKED_APP, CLOAKED_INHERITED, CLOAKED_SHELL,
};
pub use compositor::Compositor;
pub use dwm::Dwm;
pub use error::{Access, HResult, PlatformAttributeError};
pub use handle::WindowHandle;
