use crate::{
    Access, Compositor, Dwm, HResult, PlatformAttributeError, Readable, WindowAttribute,
    WindowHandle, Writable,
};
use bytemuck::Zeroable;

/// Reads and writes the compositor attributes of one window.
///
/// Holds nothing but the window handle and the compositor: every call is a
/// single round trip, and no attribute value is cached between calls.
#[derive(Debug, Copy, Clone)]
pub struct WindowAttributes<C = Dwm> {
    window: WindowHandle,
    compositor: C,
}

impl WindowAttributes<Dwm> {
    pub fn new(window: impl Into<WindowHandle>) -> Self {
        Self::with_compositor(window, Dwm)
    }
}

impl<C: Compositor> WindowAttributes<C> {
    pub fn with_compositor(window: impl Into<WindowHandle>, compositor: C) -> Self {
        Self {
            window: window.into(),
            compositor,
        }
    }

    pub fn window(&self) -> WindowHandle {
        self.window
    }

    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    /// Reads attribute `A` into a zeroed buffer of its value type.
    ///
    /// The buffer is dropped, not returned, if the compositor reports a failure.
    pub fn get<A: Readable>(&self) -> Result<A::Value, PlatformAttributeError> {
        let mut value = <A::Value as Zeroable>::zeroed();
        let code = self.compositor.get_window_attribute(
            self.window,
            A::ID,
            bytemuck::bytes_of_mut(&mut value),
        );
        log::trace!("get {} on {:?}: {}", A::ID, self.window, code);

        if code.is_ok() {
            Ok(value)
        } else {
            Err(self.failed(A::ID, Access::Get, code))
        }
    }

    /// Writes `value` to attribute `A`. The value is not range-checked.
    pub fn set<A: Writable>(&self, value: A::Value) -> Result<(), PlatformAttributeError> {
        let code = self.compositor.set_window_attribute(
            self.window,
            A::ID,
            bytemuck::bytes_of(&value),
        );
        log::trace!("set {} on {:?}: {}", A::ID, self.window, code);

        if code.is_ok() {
            Ok(())
        } else {
            Err(self.failed(A::ID, Access::Set, code))
        }
    }

    fn failed(
        &self,
        attribute: WindowAttribute,
        access: Access,
        code: HResult,
    ) -> PlatformAttributeError {
        log::debug!("could not {} {} on {:?}: {}", access, attribute, self.window, code);
        PlatformAttributeError {
            code,
            attribute,
            access,
        }
    }
}
