// What you SEE:
// • A 32x32 grid of white cells with a RESET GRID button underneath.
// • Hold Left Mouse and drag: every cell you enter darkens, and so do its
//   left/right/up/down neighbours.
// • Release (or drag off the grid): the drawing is exported as a PNG.
// • Click RESET GRID (or press C) to start over. ESC quits.

use clap::Parser;

use shade_grid::config::Config;
use shade_grid::draw::Drawer;
use shade_grid::error::Error;
use shade_grid::export::ExportSink;
use shade_grid::pointer::{PointerEvent, PointerTracker};
use shade_grid::session::Sketch;
use shade_grid::types::FrameBuffer;
use shade_grid::view::{self, Hud, Layout};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();
    log::debug!("{config:?}");

    /* --- Window + layout ---
       Visual: a window sized to fit the grid, the button and the status line.
       If this fails there is nothing to draw on, so we stop here. */
    let layout = Layout::new(config.cell_size as usize);
    let mut drawer = Drawer::new("Shade Grid", layout.width, layout.height)?;
    let mut screen = FrameBuffer::new(layout.width, layout.height);

    /* --- Model + input + output ---
       Visual: nothing yet; `sketch` is what the grid will show,
       `sink` is where finished strokes go (log / stdout / disk). */
    let mut sketch = Sketch::new();
    let mut pointer = PointerTracker::new();
    let mut sink = ExportSink::new(config.export_dir.clone(), config.export_scale, config.print_data_uri);

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Inputs -> pointer events -> model
           Visual: cells under the dragged pointer get one step darker. */
        let pos = drawer.mouse_pos();
        let down = drawer.left_mouse_down();
        for event in pointer.update(&layout, pos, down) {
            let outcome = match event {
                PointerEvent::Hover(i) => {
                    sketch.hover(i); // visual: cell + neighbours darken (only while drawing)
                    Ok(None)
                }
                PointerEvent::Press => {
                    sketch.press(); // visual: status flips to DRAWING
                    Ok(None)
                }
                PointerEvent::Release => sketch.release(),
                PointerEvent::Leave => sketch.leave(),
                PointerEvent::Reset => {
                    sketch.reset(); // visual: whole grid turns white
                    Ok(None)
                }
            };
            // A failed export is logged; the drawing stays on screen.
            sink.deliver(sketch.grid(), outcome);
        }
        if drawer.c_pressed_once() {
            sketch.reset(); // visual: same as clicking RESET GRID
        }

        /* 2) Model -> pixels
           Visual: grid, hover outline, button and status line are redrawn. */
        let status = if sketch.is_drawing() {
            "DRAWING".to_string()
        } else {
            format!("IDLE | STROKES: {}", sink.strokes())
        };
        let hud = Hud {
            hovered: pointer.hovered(),
            button_hot: pos.is_some_and(|(x, y)| layout.over_button(x, y)), // visual: button greys when hovered
            status: &status,
        };
        view::render(&layout, sketch.grid(), &hud, &mut screen);

        /* 3) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;
    }

    // Window closed mid-stroke: still hand the drawing over.
    let outcome = sketch.release();
    sink.deliver(sketch.grid(), outcome);

    Ok(())
}
