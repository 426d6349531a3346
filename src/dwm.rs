use crate::{
    cache::{ascii_wide, DllCache, ErrorKind, Proc},
    platform, Compositor, HResult, WindowAttribute, WindowHandle,
};
use core::{ffi::c_void, mem::transmute};

type DwmGetWindowAttribute = unsafe extern "system" fn(
    hwnd: isize,
    dw_attribute: u32,
    pv_attribute: *mut c_void,
    cb_attribute: u32,
) -> i32;
type DwmSetWindowAttribute = unsafe extern "system" fn(
    hwnd: isize,
    dw_attribute: u32,
    pv_attribute: *const c_void,
    cb_attribute: u32,
) -> i32;

const DWMAPI_WIDE: [u16; 11] = ascii_wide(b"dwmapi.dll\0");

static DWMAPI: DllCache = DllCache::new("dwmapi.dll", &DWMAPI_WIDE, platform::SEARCH_SYSTEM32, 2);

static GET_WINDOW_ATTRIBUTE: Proc = Proc {
    name: b"DwmGetWindowAttribute\0",
    cache_index: 0,
};
static SET_WINDOW_ATTRIBUTE: Proc = Proc {
    name: b"DwmSetWindowAttribute\0",
    cache_index: 1,
};

impl From<ErrorKind> for HResult {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Lib => HResult::MOD_NOT_FOUND,
            ErrorKind::Proc => HResult::PROC_NOT_FOUND,
        }
    }
}

/// The Desktop Window Manager, reached through `dwmapi.dll`.
///
/// The library is loaded from System32 on first use and kept loaded until
/// [`Dwm::unload`]. Where it cannot be loaded (including on every non-Windows
/// target), calls fail with [`HResult::MOD_NOT_FOUND`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Dwm;

impl Dwm {
    /// Whether `dwmapi.dll` can be loaded.
    pub fn is_available() -> bool {
        unsafe { DWMAPI.lib_exists() }
    }

    /// Frees `dwmapi.dll` if it is loaded. Returns `false` if it was not.
    ///
    /// # Safety
    ///
    /// No other thread may be inside a [`Dwm`] call while the library is freed.
    pub unsafe fn unload() -> bool {
        DWMAPI.free_lib()
    }
}

impl Compositor for Dwm {
    fn get_window_attribute(
        &self,
        window: WindowHandle,
        attribute: WindowAttribute,
        value: &mut [u8],
    ) -> HResult {
        unsafe {
            let proc: DwmGetWindowAttribute = match DWMAPI.get_proc(&GET_WINDOW_ATTRIBUTE) {
                Ok(address) => transmute(address),
                Err(kind) => return kind.into(),
            };
            HResult(proc(
                window.as_raw(),
                attribute.0,
                value.as_mut_ptr().cast(),
                value.len() as u32,
            ))
        }
    }

    fn set_window_attribute(
        &self,
        window: WindowHandle,
        attribute: WindowAttribute,
        value: &[u8],
    ) -> HResult {
        unsafe {
            let proc: DwmSetWindowAttribute = match DWMAPI.get_proc(&SET_WINDOW_ATTRIBUTE) {
                Ok(address) => transmute(address),
                Err(kind) => return kind.into(),
            };
            HResult(proc(
                window.as_raw(),
                attribute.0,
                value.as_ptr().cast(),
                value.len() as u32,
            ))
        }
    }
}
