use crate::platform;
use core::sync::atomic::{AtomicIsize, AtomicUsize, Ordering};
use once_cell::sync::OnceCell;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum ErrorKind {
    Lib,
    Proc,
}

/// An exported function of a [`DllCache`]'s library, looked up by name.
pub(crate) struct Proc {
    /// NUL-terminated ASCII export name.
    pub(crate) name: &'static [u8],
    pub(crate) cache_index: usize,
}

pub(crate) struct DllCache {
    lib: &'static str,
    lib_wide: &'static [u16],
    flags: u32,
    handle: AtomicIsize,
    procs: OnceCell<Vec<AtomicUsize>>,
    len: usize,
}
impl DllCache {
    pub(crate) const fn new(
        lib: &'static str,
        lib_wide: &'static [u16],
        flags: u32,
        len: usize,
    ) -> Self {
        Self {
            lib,
            lib_wide,
            flags,
            handle: AtomicIsize::new(0),
            procs: OnceCell::new(),
            len,
        }
    }
    pub(crate) unsafe fn free_lib(&self) -> bool {
        let handle = self.handle.load(Ordering::SeqCst);
        if handle == 0 {
            false
        } else {
            self.handle.store(0, Ordering::SeqCst);
            for proc in self.procs.get().into_iter().flatten() {
                proc.store(0, Ordering::SeqCst);
            }

            log::debug!("unloading {}", self.lib);
            platform::free_library(handle)
        }
    }
    pub(crate) unsafe fn lib_exists(&self) -> bool {
        self.get() != 0
    }
    unsafe fn get(&self) -> isize {
        let handle = self.handle.load(Ordering::SeqCst);

        if handle == 0 {
            self.load_and_cache_lib()
        } else {
            handle
        }
    }
    unsafe fn load_and_cache_lib(&self) -> isize {
        let handle = platform::load_library(self.lib_wide, self.flags);
        if handle == 0 {
            log::debug!("could not load {}", self.lib);
            return handle;
        }

        let len = self.len;
        self.procs
            .get_or_init(|| (0..len).map(|_| AtomicUsize::new(0)).collect());
        // Store the handle *after* initializing `self.procs`. This
        // is required to avoid a race condition in `get_proc`.
        self.handle.store(handle, Ordering::SeqCst);

        log::debug!("loaded {}", self.lib);
        handle
    }
    /// Resolves `proc` to its address, loading the library on first use.
    pub(crate) unsafe fn get_proc(&self, proc: &Proc) -> Result<usize, ErrorKind> {
        let library = self.get();
        if library == 0 {
            return Err(ErrorKind::Lib);
        }

        let slot = self
            .procs
            .get()
            .and_then(|procs| procs.get(proc.cache_index))
            .ok_or(ErrorKind::Proc)?;

        match slot.load(Ordering::SeqCst) {
            0 => {
                let address = platform::get_proc(library, proc.name).ok_or(ErrorKind::Proc)?;
                slot.store(address, Ordering::SeqCst);
                Ok(address)
            }
            address => Ok(address),
        }
    }
}

/// Widens an ASCII byte string into a UTF-16 array at compile time.
pub(crate) const fn ascii_wide<const N: usize>(ascii: &[u8; N]) -> [u16; N] {
    let mut wide = [0u16; N];
    let mut i = 0;
    while i < N {
        wide[i] = ascii[i] as u16;
        i += 1;
    }
    wide
}
