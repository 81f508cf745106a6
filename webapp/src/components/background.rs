use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;

use rand::Rng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::scroll::EventGuard;

const CANVAS_ID: &str = "backdrop-canvas";
const PARTICLE_COUNT: usize = 80;
const PARTICLE_COLOR: &str = "#3b82f6";

struct Particle {
    x: f64,
    y: f64,
    radius: f64,
    vx: f64,
    vy: f64,
    phase: f64,
}

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the animation loop. Dropping it cancels the pending frame, stops
/// rescheduling, and releases the frame closure.
struct FieldRuntime {
    running: Rc<Cell<bool>>,
    frame: Rc<Cell<Option<i32>>>,
    tick: FrameClosure,
    _resize: Option<EventGuard>,
}

impl Drop for FieldRuntime {
    fn drop(&mut self) {
        self.running.set(false);
        if let (Some(window), Some(id)) = (web_sys::window(), self.frame.get()) {
            let _ = window.cancel_animation_frame(id);
        }
        let _ = self.tick.borrow_mut().take();
    }
}

/// Purely cosmetic full-viewport particle drift behind the page. Exchanges
/// no data with the rest of the app; if the canvas or its 2d context is
/// unavailable the page simply renders without a backdrop.
#[component]
pub fn ParticleField() -> Element {
    let mut runtime = use_signal(|| None::<Rc<FieldRuntime>>);

    // The canvas element only exists after the first render.
    use_effect(move || {
        if runtime.peek().is_none() {
            runtime.set(start().map(Rc::new));
        }
    });

    rsx! {
        canvas { id: CANVAS_ID, class: "backdrop-canvas" }
    }
}

fn viewport_size(window: &web_sys::Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

fn start() -> Option<FieldRuntime> {
    let window = web_sys::window()?;
    let document = window.document()?;

    let canvas: web_sys::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)?
        .dyn_into()
        .ok()?;

    let (width, height) = viewport_size(&window);
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let context: web_sys::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;

    let mut rng = rand::thread_rng();
    let mut particles: Vec<Particle> = (0..PARTICLE_COUNT)
        .map(|_| Particle {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            radius: rng.gen_range(0.6..2.2),
            vx: rng.gen_range(-0.15..0.15),
            vy: rng.gen_range(-0.25..-0.05),
            phase: rng.gen_range(0.0..std::f64::consts::TAU),
        })
        .collect();

    let running = Rc::new(Cell::new(true));
    let frame = Rc::new(Cell::new(None));
    let size = Rc::new(Cell::new((width, height)));

    let resize = EventGuard::on_window("resize", {
        let canvas = canvas.clone();
        let size = size.clone();
        move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (w, h) = viewport_size(&window);
            if w > 0.0 && h > 0.0 {
                canvas.set_width(w as u32);
                canvas.set_height(h as u32);
                size.set((w, h));
            }
        }
    });

    let tick: FrameClosure = Rc::new(RefCell::new(None));
    let mut elapsed = 0.0_f64;

    *tick.borrow_mut() = Some(Closure::new({
        let running = running.clone();
        let frame = frame.clone();
        let size = size.clone();
        let tick = tick.clone();
        move || {
            if !running.get() {
                return;
            }

            let (w, h) = size.get();
            elapsed += 1.0 / 60.0;
            draw(&context, &mut particles, w, h, elapsed);

            if let Some(window) = web_sys::window() {
                if let Some(callback) = tick.borrow().as_ref() {
                    frame.set(
                        window
                            .request_animation_frame(callback.as_ref().unchecked_ref())
                            .ok(),
                    );
                }
            }
        }
    }));

    {
        let borrowed = tick.borrow();
        let callback = borrowed.as_ref()?;
        frame.set(
            window
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .ok(),
        );
    }

    Some(FieldRuntime {
        running,
        frame,
        tick: tick.clone(),
        _resize: resize,
    })
}

fn draw(
    context: &web_sys::CanvasRenderingContext2d,
    particles: &mut [Particle],
    width: f64,
    height: f64,
    elapsed: f64,
) {
    context.clear_rect(0.0, 0.0, width, height);
    context.set_fill_style_str(PARTICLE_COLOR);

    for particle in particles.iter_mut() {
        particle.x += particle.vx;
        particle.y += particle.vy;

        // Wrap around the edges with a small margin so particles never pop.
        if particle.x < -4.0 {
            particle.x = width + 4.0;
        } else if particle.x > width + 4.0 {
            particle.x = -4.0;
        }
        if particle.y < -4.0 {
            particle.y = height + 4.0;
        } else if particle.y > height + 4.0 {
            particle.y = -4.0;
        }

        let twinkle = 0.25 + 0.2 * (elapsed + particle.phase).sin().abs();
        context.set_global_alpha(twinkle);
        context.begin_path();
        let _ = context.arc(
            particle.x,
            particle.y,
            particle.radius,
            0.0,
            std::f64::consts::TAU,
        );
        context.fill();
    }

    context.set_global_alpha(1.0);
}
