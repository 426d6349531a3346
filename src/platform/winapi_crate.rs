use crate::WindowHandle;

use core::ptr;

use winapi::{
    shared::{
        minwindef::{HMODULE, TRUE},
        windef::HWND,
    },
    um::libloaderapi::{FreeLibrary, GetProcAddress, LoadLibraryExW},
};

pub(crate) const SEARCH_SYSTEM32: u32 = winapi::um::libloaderapi::LOAD_LIBRARY_SEARCH_SYSTEM32;

pub(crate) unsafe fn load_library(name: &[u16], flags: u32) -> isize {
    let h_file = ptr::null_mut();

    LoadLibraryExW(name.as_ptr(), h_file, flags) as isize
}
pub(crate) unsafe fn free_library(library: isize) -> bool {
    let succeeded = FreeLibrary(library as HMODULE);
    succeeded == TRUE
}
pub(crate) unsafe fn get_proc(library: isize, name: &[u8]) -> Option<usize> {
    let proc = GetProcAddress(library as HMODULE, name.as_ptr().cast());

    if proc.is_null() {
        None
    } else {
        Some(proc as usize)
    }
}

impl From<HWND> for WindowHandle {
    fn from(hwnd: HWND) -> Self {
        Self::from_raw(hwnd as isize)
    }
}
