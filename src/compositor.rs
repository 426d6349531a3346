use crate::{HResult, WindowAttribute, WindowHandle};

/// The two per-window attribute primitives of a compositor.
///
/// The buffer length is the attribute size in bytes. Implementations must not
/// keep the buffer past the call.
pub trait Compositor {
    fn get_window_attribute(
        &self,
        window: WindowHandle,
        attribute: WindowAttribute,
        value: &mut [u8],
    ) -> HResult;

    fn set_window_attribute(
        &self,
        window: WindowHandle,
        attribute: WindowAttribute,
        value: &[u8],
    ) -> HResult;
}

impl<C: Compositor + ?Sized> Compositor for &C {
    fn get_window_attribute(
        &self,
        window: WindowHandle,
        attribute: WindowAttribute,
        value: &mut [u8],
    ) -> HResult {
        (**self).get_window_attribute(window, attribute, value)
    }

    fn set_window_attribute(
        &self,
        window: WindowHandle,
        attribute: WindowAttribute,
        value: &[u8],
    ) -> HResult {
        (**self).set_window_attribute(window, attribute, value)
    }
}
