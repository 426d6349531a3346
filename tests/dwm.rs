use dwm_window_attributes::{Access, Dwm, HResult, WindowAttributes, WindowHandle};

#[cfg(not(windows))]
#[test]
fn dwm_is_unavailable() {
    assert!(!Dwm::is_available());

    let attributes = WindowAttributes::new(WindowHandle::from_raw(0x10));
    let err = attributes.extended_frame_bounds().unwrap_err();
    assert_eq!(err.code, HResult::MOD_NOT_FOUND);
    assert_eq!(err.access, Access::Get);

    let err = attributes.set_cloak(1).unwrap_err();
    assert_eq!(err.code, HResult::MOD_NOT_FOUND);
    assert_eq!(err.access, Access::Set);

    assert!(!unsafe { Dwm::unload() });
}

#[cfg(windows)]
mod live {
    use super::*;
    use dwm_window_attributes::CLOAKED_APP;
    use minifb::{Window, WindowOptions};

    fn window() -> Window {
        Window::new("dwm-window-attributes", 320, 200, WindowOptions::default())
            .unwrap_or_else(|e| panic!("{}", e))
    }

    #[test]
    fn dwm_is_available() {
        assert!(Dwm::is_available());
    }

    #[test]
    fn null_handle_fails() {
        let attributes = WindowAttributes::new(WindowHandle::NULL);

        let err = attributes.extended_frame_bounds().unwrap_err();
        assert!(!err.code.is_ok());
        assert_eq!(err.access, Access::Get);

        let err = attributes.set_disallow_peek(true).unwrap_err();
        assert!(!err.code.is_ok());
        assert_eq!(err.access, Access::Set);
    }

    #[test]
    fn frame_bounds_are_stable() {
        let window = window();
        let attributes = WindowAttributes::new(window.get_window_handle());

        let first = attributes.extended_frame_bounds().unwrap();
        let second = attributes.extended_frame_bounds().unwrap();
        assert_eq!(first, second);
        assert!(first.width() > 0 && first.height() > 0);
    }

    #[test]
    fn cloak_then_cloaked() {
        let window = window();
        let attributes = WindowAttributes::new(window.get_window_handle());

        attributes.set_cloak(2).unwrap();
        assert_eq!(attributes.cloaked().unwrap() & CLOAKED_APP, CLOAKED_APP);

        attributes.set_cloak(0).unwrap();
        assert_eq!(attributes.cloaked().unwrap(), 0);
    }

    #[test]
    fn setters_accept_a_live_window() {
        let window = window();
        let attributes = WindowAttributes::new(window.get_window_handle());

        attributes.set_disallow_peek(true).unwrap();
        attributes.set_excluded_from_peek(true).unwrap();
        attributes.set_transitions_force_disabled(true).unwrap();
        attributes.nc_rendering_enabled().unwrap();
    }
}
