#[cfg(not(windows))]
fn main() {}

#[cfg(windows)]
fn main() {
    use {
        dwm_window_attributes::{WindowAttributes, CLOAKED_APP},
        minifb::{Key, KeyRepeat, Window, WindowOptions},
        std::time::{Duration, Instant},
    };

    const WIDTH: usize = 640;
    const HEIGHT: usize = 360;

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut buffer: Vec<u32> = vec![0x0020_2030; WIDTH * HEIGHT];

    let mut window = Window::new(
        "C to cloak, P to toggle peek, ESC to exit",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )
    .unwrap_or_else(|e| {
        panic!("{}", e);
    });
    let attributes = WindowAttributes::new(window.get_window_handle());

    match attributes.extended_frame_bounds() {
        Ok(bounds) => log::info!("frame bounds: {:?}", bounds),
        Err(e) => log::error!("{}", e),
    }
    match attributes.caption_button_bounds() {
        Ok(bounds) => log::info!("caption button bounds: {:?}", bounds),
        Err(e) => log::error!("{}", e),
    }

    // Limit to max ~60 fps update rate
    window.limit_update_rate(Some(Duration::from_micros(16600)));

    let mut uncloak_at = None;
    let mut disallow_peek = false;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::C, KeyRepeat::No) && uncloak_at.is_none() {
            if let Err(e) = attributes.set_cloak(1) {
                log::error!("{}", e);
            } else {
                log::info!("cloaked: {:?}", attributes.cloaked().map(|r| r & CLOAKED_APP != 0));
                uncloak_at = Some(Instant::now() + Duration::from_secs(2));
            }
        }
        if uncloak_at.map_or(false, |at| Instant::now() >= at) {
            uncloak_at = None;
            if let Err(e) = attributes.set_cloak(0) {
                log::error!("{}", e);
            }
        }
        if window.is_key_pressed(Key::P, KeyRepeat::No) {
            disallow_peek = !disallow_peek;
            match attributes.set_disallow_peek(disallow_peek) {
                Ok(()) => log::info!("disallow peek: {}", disallow_peek),
                Err(e) => log::error!("{}", e),
            }
        }

        // We unwrap here as we want this code to exit if it fails. Real applications may want to handle this in a different way
        window.update_with_buffer(&buffer, WIDTH, HEIGHT).unwrap();
        buffer.rotate_left(1);
    }
}
