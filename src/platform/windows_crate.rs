use crate::WindowHandle;

use windows::{
    core::{PCSTR, PCWSTR},
    Win32::{
        Foundation::{HANDLE, HINSTANCE, HWND},
        System::LibraryLoader::{
            FreeLibrary, GetProcAddress, LoadLibraryExW, LOAD_LIBRARY_FLAGS,
            LOAD_LIBRARY_SEARCH_SYSTEM32,
        },
    },
};

pub(crate) const SEARCH_SYSTEM32: u32 = LOAD_LIBRARY_SEARCH_SYSTEM32.0;

pub(crate) unsafe fn load_library(name: &[u16], flags: u32) -> isize {
    let handle = LoadLibraryExW(PCWSTR(name.as_ptr()), HANDLE(0), LOAD_LIBRARY_FLAGS(flags));

    handle.0
}
pub(crate) unsafe fn free_library(library: isize) -> bool {
    FreeLibrary(HINSTANCE(library)).as_bool()
}
pub(crate) unsafe fn get_proc(library: isize, name: &[u8]) -> Option<usize> {
    GetProcAddress(HINSTANCE(library), PCSTR(name.as_ptr())).map(|proc| proc as usize)
}

impl From<HWND> for WindowHandle {
    fn from(hwnd: HWND) -> Self {
        Self::from_raw(hwnd.0)
    }
}
