use core::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use micro_rotview::{Canvas, CanvasError, MultiLineSquareView, StdClock, ViewConfig};
use std::{thread, time::Duration};

// Portrait surface, one column of nodes
pub const WIDTH: u32 = 96;
pub const HEIGHT: u32 = 192;
pub const PIXEL_SCALE: u32 = 3;
pub const POLL_DELAY_MS: u64 = 5;

fn draw_frame(
    view: &mut MultiLineSquareView<StdClock>,
    display: &mut SimulatorDisplay<Rgb888>,
) -> Result<(), CanvasError<Infallible>> {
    let mut canvas = Canvas::new(display);
    view.on_draw(&mut canvas)
}

fn main() -> Result<(), CanvasError<Infallible>> {
    env_logger::init();

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(WIDTH, HEIGHT));
    let mut window = Window::new(
        "MultiLineToSquare Simulator",
        &OutputSettingsBuilder::new().scale(PIXEL_SCALE).build(),
    );

    let mut view = MultiLineSquareView::create(ViewConfig::default(), StdClock::new());
    log::info!("simulator ready, {}x{} surface, click to animate", WIDTH, HEIGHT);

    // First paint before any tap
    draw_frame(&mut view, &mut display)?;

    'running: loop {
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    if !view.on_tap() {
                        log::debug!("tap at {:?} ignored", point);
                    }
                }
                _ => {}
            }
        }

        if view.is_redraw_due() {
            draw_frame(&mut view, &mut display)?;
            if let Some(settle) = view.last_settle() {
                log::trace!("last settle: node {} at {}", settle.index, settle.scale);
            }
        }

        thread::sleep(Duration::from_millis(POLL_DELAY_MS));
    }

    Ok(())
}
