// Renderer struct that draws onto a 2d canvas context on behalf of the
// particle field. Canvas calls that can throw are logged and skipped so one bad
// frame never stops the animation loop.

use crate::color::Color;
use crate::surface::Surface;
use vecmath::Vector2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasRenderer {
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        CanvasRenderer { context }
    }

    fn trace_polygon(&self, points: &[Vector2<f64>]) {
        self.context.begin_path();
        let mut points = points.iter();
        if let Some(first) = points.next() {
            self.context.move_to(first[0], first[1]);
        }
        for point in points {
            self.context.line_to(point[0], point[1]);
        }
        self.context.close_path();
    }

    #[allow(deprecated)]
    fn set_stroke(&self, color: Color) {
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css()));
    }

    #[allow(deprecated)]
    fn set_fill(&self, color: Color) {
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
    }
}

fn log_failure(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("canvas {} failed: {:?}", op, e);
    }
}

impl Surface for CanvasRenderer {
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.clear_rect(x, y, width, height);
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        log_failure("translate", self.context.translate(x, y));
    }

    fn rotate(&mut self, radians: f64) {
        log_failure("rotate", self.context.rotate(radians));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.context.set_global_alpha(alpha);
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.set_stroke(color);
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }

    fn stroke_polygon(&mut self, points: &[Vector2<f64>], color: Color) {
        self.set_stroke(color);
        self.trace_polygon(points);
        self.context.stroke();
    }

    fn fill_polygon(&mut self, points: &[Vector2<f64>], color: Color) {
        self.set_fill(color);
        self.trace_polygon(points);
        self.context.fill();
    }
}
