use interface::game::*;

use std::thread;
use std::time::Duration;

extern crate speedy2d;
use speedy2d::Graphics2D;
use speedy2d::Window;
use speedy2d::color::Color as spColor;
use speedy2d::dimen::Vector2;
use speedy2d::shape::Rectangle;
use speedy2d::window::{
    VirtualKeyCode,
    WindowCreationOptions,
    WindowHandler,
    WindowHelper,
    WindowSize,
};

extern crate log;
use log::{debug, info};

/// One game tick per frame at the capped frame rate.
const UPDATE_RATE: u32 = 60;

fn map_key(key: VirtualKeyCode) -> Option<Key> {
    match key {
        VirtualKeyCode::W => Some(Key::W),
        VirtualKeyCode::A => Some(Key::A),
        VirtualKeyCode::S => Some(Key::S),
        VirtualKeyCode::D => Some(Key::D),
        _ => None
    }
}

fn map_color([r, g, b, a]: [f32; 4]) -> spColor {
    spColor::from_rgba(r, g, b, a)
}

struct GameWrapper<G: Game> {
    game: G,
    shapes: Graphics,
}

impl<G: Game> WindowHandler for GameWrapper<G> {
    fn on_start(&mut self,
            h: &mut WindowHelper<()>,
            _: speedy2d::window::WindowStartupInfo
    ) {
        h.set_cursor_visible(true);

        // ticks are driven by user events so that update frequency
        // doesn't depend on how often the window redraws
        let sender = h.create_user_event_sender();
        thread::spawn(move || {
            loop {
                if sender.send_event(()).is_err() {
                    break; // the event loop has ended
                }
                thread::sleep(Duration::from_secs_f32((UPDATE_RATE as f32).recip()));
            }
        });
        debug!("tick thread running at {}Hz", UPDATE_RATE);
    }

    fn on_user_event(&mut self,  _: &mut WindowHelper<()>,  _: ()) {
        self.game.update();
    }

    fn on_draw(&mut self,  h: &mut WindowHelper<()>,  g: &mut Graphics2D) {
        g.clear_screen(spColor::BLACK);
        self.game.render(&mut self.shapes);

        for shape in self.shapes.drain() {
            match shape {
                Shape::Rectangle { color, area } => {
                    let rect = Rectangle::new(
                        Vector2 { x: area[0],  y: area[1] },
                        Vector2 { x: area[0]+area[2],  y: area[1]+area[3] },
                    );
                    g.draw_rectangle(rect, map_color(color));
                }
                Shape::Circle { color, center, radius } => {
                    let center = Vector2 { x: center[0],  y: center[1] };
                    g.draw_circle(center, radius, map_color(color));
                }
            }
        }

        // Required to make the screen update.
        // Surprisingly doesn't cause 100% CPU usage.
        h.request_redraw();
    }

    fn on_key_down(
            &mut self,
            _: &mut WindowHelper<()>,
            key: Option<VirtualKeyCode>,
            _: speedy2d::window::KeyScancode
    ) {
        if let Some(key) = key.and_then(map_key) {
            self.game.key_press(key);
        }
    }

    fn on_key_up(
            &mut self,
            _: &mut WindowHelper<()>,
            key: Option<VirtualKeyCode>,
            _: speedy2d::window::KeyScancode
    ) {
        if let Some(key) = key.and_then(map_key) {
            self.game.key_release(key);
        }
    }
}

/// Open the window and run the game in it until the window is closed.
///
/// The window keeps its initial size, so game coordinates are window
/// pixels. Panics if the window can't be created; there is nothing to
/// recover or retry at that point.
#[inline(never)]
pub fn start<G:Game+'static>(game: G,  name: &'static str,  initial_size: [f32; 2]) {
    info!("opening {}x{} window {:?}", initial_size[0], initial_size[1], name);
    let wrapper = GameWrapper {
        game,
        shapes: Graphics::default(),
    };

    let window_size = Vector2 { x: initial_size[0], y: initial_size[1] };
    let window_size = WindowSize::ScaledPixels(window_size);
    let options = WindowCreationOptions::new_windowed(window_size, None)
            .with_always_on_top(false)
            .with_decorations(true)
            .with_resizable(false)
            .with_transparent(false)
            .with_vsync(true);
    let window = Window::new_with_options(name, options).expect("create window");
    window.run_loop(wrapper);
}
