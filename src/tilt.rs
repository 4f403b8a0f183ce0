// Pointer-driven CSS transforms: the 3D tilt on hovered cards and the gentle
// parallax drift of the floating hero elements.

use std::fmt;

/// Card rotation in degrees for a pointer hovering over it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub lift_px: f64,
}

impl Tilt {
    const DAMPING: f64 = 10.0;
    const LIFT_PX: f64 = 10.0;

    /// Flat card, used when the pointer leaves.
    pub const RESTING: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        lift_px: 0.0,
    };

    /// `x`, `y` are relative to the card's top-left corner.
    pub fn for_pointer(width: f64, height: f64, x: f64, y: f64) -> Tilt {
        Tilt {
            rotate_x: (y - height / 2.0) / Tilt::DAMPING,
            rotate_y: (width / 2.0 - x) / Tilt::DAMPING,
            lift_px: Tilt::LIFT_PX,
        }
    }
}

impl fmt::Display for Tilt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
            self.rotate_x, self.rotate_y, self.lift_px
        )
    }
}

/// Offset in pixels (and matching rotation in degrees) of a floating element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parallax {
    pub x: f64,
    pub y: f64,
}

impl Parallax {
    const RANGE: f64 = 10.0;

    pub fn for_pointer(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> Parallax {
        Parallax {
            x: offset(client_x, viewport_w),
            y: offset(client_y, viewport_h),
        }
    }
}

// Maps [0, extent] onto [-RANGE/2, RANGE/2]
fn offset(pos: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    pos / extent * Parallax::RANGE - Parallax::RANGE / 2.0
}

impl fmt::Display for Parallax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) rotateX({}deg) rotateY({}deg)",
            self.x, self.y, self.y, self.x
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_card_is_level() {
        let tilt = Tilt::for_pointer(300.0, 200.0, 150.0, 100.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!(
            tilt.to_string(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(10px)"
        );
    }

    #[test]
    fn corners_tilt_towards_the_pointer() {
        let top_left = Tilt::for_pointer(300.0, 200.0, 0.0, 0.0);
        assert_eq!((top_left.rotate_x, top_left.rotate_y), (-10.0, 15.0));

        let bottom_right = Tilt::for_pointer(300.0, 200.0, 300.0, 200.0);
        assert_eq!((bottom_right.rotate_x, bottom_right.rotate_y), (10.0, -15.0));
    }

    #[test]
    fn resting_card_is_flat() {
        assert_eq!(
            Tilt::RESTING.to_string(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(0px)"
        );
    }

    #[test]
    fn parallax_spans_five_pixels_each_way() {
        assert_eq!(Parallax::for_pointer(640.0, 360.0, 1280.0, 720.0), Parallax { x: 0.0, y: 0.0 });
        assert_eq!(Parallax::for_pointer(0.0, 0.0, 1280.0, 720.0), Parallax { x: -5.0, y: -5.0 });
        assert_eq!(Parallax::for_pointer(1280.0, 720.0, 1280.0, 720.0), Parallax { x: 5.0, y: 5.0 });
    }

    #[test]
    fn parallax_css_mirrors_offset_into_rotation() {
        let css = Parallax { x: 2.5, y: -1.5 }.to_string();
        assert_eq!(css, "translate(2.5px, -1.5px) rotateX(-1.5deg) rotateY(2.5deg)");
    }

    #[test]
    fn degenerate_viewport_does_not_move() {
        assert_eq!(Parallax::for_pointer(10.0, 10.0, 0.0, 0.0), Parallax { x: 0.0, y: 0.0 });
    }
}
