// The drawing operations the particle field needs from a 2D surface.
// CanvasRenderer implements this over a browser canvas; tests record calls.

use crate::color::Color;
use vecmath::Vector2;

pub trait Surface {
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64);

    // Transform scoping, mirrors the canvas save/restore stack
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);

    fn set_global_alpha(&mut self, alpha: f64);
    fn set_line_width(&mut self, width: f64);
    // Colour used by subsequent `stroke_line` calls
    fn set_stroke_color(&mut self, color: Color);

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>);
    fn stroke_polygon(&mut self, points: &[Vector2<f64>], color: Color);
    fn fill_polygon(&mut self, points: &[Vector2<f64>], color: Color);
}
