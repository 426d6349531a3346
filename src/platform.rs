#[cfg(all(windows, feature = "windows"))]
mod windows_crate;
#[cfg(all(windows, feature = "windows"))]
pub(crate) use windows_crate::*;

#[cfg(all(windows, feature = "winapi", not(feature = "windows")))]
mod winapi_crate;
#[cfg(all(windows, feature = "winapi", not(feature = "windows")))]
pub(crate) use winapi_crate::*;

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
pub(crate) use unsupported::*;

#[cfg(all(windows, not(any(feature = "winapi", feature = "windows"))))]
compile_error!("enable either the `winapi` or the `windows` feature");
