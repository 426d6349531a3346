//! Attribute identifiers and the value shapes they carry.
//!
//! Every value type here is plain old data with the exact layout the
//! compositor reads and writes, so a zeroed instance is a valid buffer and its
//! bytes are what crosses the platform boundary.

use bytemuck::{Pod, Zeroable};
use core::fmt;

/// A `DWMWINDOWATTRIBUTE` identifier.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct WindowAttribute(pub u32);

macro_rules! window_attribute_ids {
    ($($name:ident = $value:literal,)*) => {
        impl WindowAttribute {
            $(pub const $name: Self = Self($value);)*

            /// The `dwmapi.h` name of a known identifier.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some(concat!("DWMWA_", stringify!($name))),)*
                    _ => None,
                }
            }
        }
    };
}

window_attribute_ids! {
    NCRENDERING_ENABLED = 1,
    NCRENDERING_POLICY = 2,
    TRANSITIONS_FORCEDISABLED = 3,
    ALLOW_NCPAINT = 4,
    CAPTION_BUTTON_BOUNDS = 5,
    NONCLIENT_RTL_LAYOUT = 6,
    FORCE_ICONIC_REPRESENTATION = 7,
    FLIP3D_POLICY = 8,
    EXTENDED_FRAME_BOUNDS = 9,
    HAS_ICONIC_BITMAP = 10,
    DISALLOW_PEEK = 11,
    EXCLUDED_FROM_PEEK = 12,
    CLOAK = 13,
    CLOAKED = 14,
    FREEZE_REPRESENTATION = 15,
}

impl fmt::Display for WindowAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "window attribute {}", self.0),
        }
    }
}
impl fmt::Debug for WindowAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowAttribute({})", self)
    }
}

/// A Win32 `BOOL`: four bytes, any non-zero value is true.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Bool(pub i32);

impl Bool {
    pub const FALSE: Self = Self(0);
    pub const TRUE: Self = Self(1);

    pub const fn as_bool(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Bool {
    fn from(value: bool) -> Self {
        Self(value as i32)
    }
}
impl From<Bool> for bool {
    fn from(value: Bool) -> Self {
        value.as_bool()
    }
}
impl fmt::Debug for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bool({})", self.0)
    }
}

/// A Win32 `RECT`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// `DWMNCRENDERINGPOLICY`. Values outside the named constants are forwarded
/// as they are.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct NcRenderingPolicy(pub i32);

impl NcRenderingPolicy {
    /// Non-client rendering follows the window style.
    pub const USE_WINDOW_STYLE: Self = Self(0);
    pub const DISABLED: Self = Self(1);
    pub const ENABLED: Self = Self(2);
}

/// `DWMFLIP3DWINDOWPOLICY`. Values outside the named constants are forwarded
/// as they are.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Flip3dWindowPolicy(pub i32);

impl Flip3dWindowPolicy {
    pub const DEFAULT: Self = Self(0);
    pub const EXCLUDE_BELOW: Self = Self(1);
    pub const EXCLUDE_ABOVE: Self = Self(2);
}

/// Cloaked by its owner application.
pub const CLOAKED_APP: u32 = 0x0000_0001;
/// Cloaked by the shell.
pub const CLOAKED_SHELL: u32 = 0x0000_0002;
/// Cloaked because its owner window is cloaked.
pub const CLOAKED_INHERITED: u32 = 0x0000_0004;

/// One compositor attribute, bound to a single identifier and value shape.
pub trait Attribute {
    const ID: WindowAttribute;
    type Value: Pod;
}

/// An [`Attribute`] that can be read with `DwmGetWindowAttribute`.
pub trait Readable: Attribute {}

/// An [`Attribute`] that can be written with `DwmSetWindowAttribute`.
pub trait Writable: Attribute {}

/// Declares the attribute table: one marker type per row in [`attr`], and
/// one named method per row on [`WindowAttributes`](crate::WindowAttributes).
///
/// A row reads `mode method: Marker = ID => WireType as ApiType;` where `mode`
/// is `get` or `set`, and the method converts between the wire and API types
/// with `From`.
macro_rules! attribute_table {
    (@mode get $marker:ident) => {
        impl Readable for $marker {}
    };
    (@mode set $marker:ident) => {
        impl Writable for $marker {}
    };
    (@method get $(#[$meta:meta])* $method:ident $marker:path, $api:ty) => {
        $(#[$meta])*
        #[allow(clippy::useless_conversion)]
        pub fn $method(&self) -> Result<$api, crate::PlatformAttributeError> {
            self.get::<$marker>().map(<$api>::from)
        }
    };
    (@method set $(#[$meta:meta])* $method:ident $marker:path, $api:ty) => {
        $(#[$meta])*
        #[allow(clippy::useless_conversion)]
        pub fn $method(&self, value: $api) -> Result<(), crate::PlatformAttributeError> {
            self.set::<$marker>(value.into())
        }
    };
    ($(
        $(#[$meta:meta])*
        $mode:ident $method:ident: $marker:ident = $id:ident => $value:ty as $api:ty;
    )*) => {
        /// Marker types naming each attribute, for use with
        /// [`WindowAttributes::get`](crate::WindowAttributes::get) and
        /// [`WindowAttributes::set`](crate::WindowAttributes::set).
        pub mod attr {
            use super::*;

            $(
                $(#[$meta])*
                #[derive(Debug, Copy, Clone)]
                pub enum $marker {}

                impl Attribute for $marker {
                    const ID: WindowAttribute = WindowAttribute::$id;
                    type Value = $value;
                }
                attribute_table!(@mode $mode $marker);
            )*
        }

        impl<C: crate::Compositor> crate::WindowAttributes<C> {
            $(
                attribute_table!(@method $mode $(#[$meta])* $method attr::$marker, $api);
            )*
        }
    };
}

attribute_table! {
    /// Whether non-client rendering is enabled.
    get nc_rendering_enabled: NcRenderingEnabled = NCRENDERING_ENABLED => Bool as bool;
    /// The non-client rendering policy.
    set set_nc_rendering_policy: NcRenderingPolicy = NCRENDERING_POLICY
        => crate::NcRenderingPolicy as crate::NcRenderingPolicy;
    /// `true` forcibly disables DWM transitions, `false` enables them.
    set set_transitions_force_disabled: TransitionsForceDisabled = TRANSITIONS_FORCEDISABLED => Bool as bool;
    /// Lets content rendered in the non-client area show on the frame drawn by DWM.
    set set_allow_nc_paint: AllowNcPaint = ALLOW_NCPAINT => Bool as bool;
    /// Bounds of the caption button area, in window-relative coordinates.
    get caption_button_bounds: CaptionButtonBounds = CAPTION_BUTTON_BOUNDS => Rect as Rect;
    /// Whether non-client content is right-to-left mirrored.
    set set_non_client_rtl_layout: NonClientRtlLayout = NONCLIENT_RTL_LAYOUT => Bool as bool;
    /// Forces a static bitmap for the thumbnail and peek representation, even
    /// when a live or snapshot representation is available.
    set set_force_iconic_representation: ForceIconicRepresentation = FORCE_ICONIC_REPRESENTATION => Bool as bool;
    /// How Flip3D treats the window.
    set set_flip3d_policy: Flip3dPolicy = FLIP3D_POLICY => Flip3dWindowPolicy as Flip3dWindowPolicy;
    /// Extended frame bounds, in screen coordinates.
    get extended_frame_bounds: ExtendedFrameBounds = EXTENDED_FRAME_BOUNDS => Rect as Rect;
    /// Tells DWM the window will provide its own iconic thumbnail and peek bitmap.
    set set_has_iconic_bitmap: HasIconicBitmap = HAS_ICONIC_BITMAP => Bool as bool;
    /// Suppresses the peek preview for the window.
    set set_disallow_peek: DisallowPeek = DISALLOW_PEEK => Bool as bool;
    /// Keeps the window from fading to a glass sheet when another window is peeked.
    set set_excluded_from_peek: ExcludedFromPeek = EXCLUDED_FROM_PEEK => Bool as bool;
    /// Cloaks the window. It is hidden from the user but still composed.
    set set_cloak: Cloak = CLOAK => u32 as u32;
    /// Why the window is cloaked, as a mask of the `CLOAKED_*` values. Zero
    /// when it is not cloaked.
    get cloaked: Cloaked = CLOAKED => u32 as u32;
    /// Freezes the thumbnail image with the window's current visuals.
    set set_freeze_representation: FreezeRepresentation = FREEZE_REPRESENTATION => Bool as bool;
}
