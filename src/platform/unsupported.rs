// There is no dwmapi.dll to load outside of Windows, so every lookup fails
// and callers see the "module not found" status.

pub(crate) const SEARCH_SYSTEM32: u32 = 0x0000_0800;

pub(crate) unsafe fn load_library(_name: &[u16], _flags: u32) -> isize {
    0
}
pub(crate) unsafe fn free_library(_library: isize) -> bool {
    false
}
pub(crate) unsafe fn get_proc(_library: isize, _name: &[u8]) -> Option<usize> {
    None
}
