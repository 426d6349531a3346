use crate::WindowAttribute;
use core::fmt;

/// A Win32 `HRESULT` status code.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct HResult(pub i32);

impl HResult {
    pub const OK: Self = Self(0);
    pub const E_HANDLE: Self = Self(0x8007_0006_u32 as i32);
    pub const E_INVALIDARG: Self = Self(0x8007_0057_u32 as i32);
    /// `HRESULT_FROM_WIN32(ERROR_MOD_NOT_FOUND)`
    pub const MOD_NOT_FOUND: Self = Self(0x8007_007E_u32 as i32);
    /// `HRESULT_FROM_WIN32(ERROR_PROC_NOT_FOUND)`
    pub const PROC_NOT_FOUND: Self = Self(0x8007_007F_u32 as i32);

    /// Same test as the Win32 `SUCCEEDED` macro.
    pub const fn is_ok(self) -> bool {
        self.0 >= 0
    }
}

impl fmt::Display for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.0 as u32)
    }
}
impl fmt::Debug for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HResult({})", self)
    }
}

/// Which of the two compositor primitives a call went through.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Access {
    Get,
    Set,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("get"),
            Self::Set => f.write_str("set"),
        }
    }
}

/// The compositor reported a failure for a window attribute call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not {access} {attribute}: {code}")]
pub struct PlatformAttributeError {
    pub code: HResult,
    pub attribute: WindowAttribute,
    pub access: Access,
}
