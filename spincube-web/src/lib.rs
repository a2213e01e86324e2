/// Spincube Web - canvas-2D host for the wireframe cube
///
/// Implements the core `Surface` trait over a `CanvasRenderingContext2d`
/// and drives frames with `requestAnimationFrame`. The canvas backing store
/// is scaled by the device pixel ratio once at startup; there is no resize
/// handling.

use spincube_core::{FrameDriver, Mesh, Pipeline, Projection, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

/// A 2D canvas context implementing the core drawing surface.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    /// Wrap a canvas, sizing its backing store to the CSS size times the
    /// device pixel ratio so strokes stay crisp on high-DPI displays. The
    /// logical size reported to the pipeline stays in CSS pixels.
    pub fn new(canvas: &HtmlCanvasElement, pixel_ratio: f64) -> Result<Self, JsValue> {
        let width = canvas.client_width() as f64;
        let height = canvas.client_height() as f64;

        canvas.set_width((width * pixel_ratio) as u32);
        canvas.set_height((height * pixel_ratio) as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        context.scale(pixel_ratio, pixel_ratio)?;

        Ok(Self {
            context,
            width: width as f32,
            height: height as f32,
        })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.context
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.context.begin_path();
        self.context.move_to(x0 as f64, y0 as f64);
        self.context.line_to(x1 as f64, y1 as f64);
        self.context.stroke();
    }

    fn begin_frame(&mut self) {
        self.context.save();
    }

    fn end_frame(&mut self) {
        self.context.restore();
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    window()
        .expect("no global window")
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .expect("requestAnimationFrame failed");
}

/// Tick the driver once per animation frame, re-requesting after each tick.
///
/// A dropped frame goes to the console; the schedule continues since driver
/// state stays intact across a failed tick.
fn run_frame_loop(mut driver: FrameDriver, mut surface: CanvasSurface) {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = callback.clone();

    *first.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = driver.tick(&mut surface) {
            web_sys::console::warn_1(&format!("frame dropped: {}", err).into());
        }
        request_frame(callback.borrow().as_ref().expect("frame closure gone"));
    }) as Box<dyn FnMut()>));

    request_frame(first.borrow().as_ref().expect("frame closure gone"));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .query_selector("canvas")?
        .ok_or_else(|| JsValue::from_str("no <canvas> element"))?
        .dyn_into::<HtmlCanvasElement>()?;

    let surface = CanvasSurface::new(&canvas, window.device_pixel_ratio())?;

    let projection = Projection::new(surface.width(), surface.height(), 90.0, 0.1, 1000.0);
    let driver = FrameDriver::new(Mesh::unit_cube(), Pipeline::new(&projection));

    run_frame_loop(driver, surface);
    Ok(())
}
