// A single diamond drifting across the field. Keeps track of position, spin,
// brightness and its palette hue; size and velocity are fixed at creation.

use crate::color::Palette;
use crate::config::FieldConfig;
use crate::random::RandomSource;
use crate::surface::Surface;
use vecmath::{vec2_add, vec2_len, vec2_scale, vec2_sub, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pos: Vector2<f64>,
    vel: Vector2<f64>,
    size: f64,
    rotation_deg: f64,
    rotation_speed: f64,
    opacity: f64,
    hue: Palette,
}

impl Particle {
    pub const MIN_SIZE: f64 = 1.0;
    pub const SIZE_RANGE: f64 = 3.0;
    pub const MAX_SPEED: f64 = 0.25;
    pub const MAX_ROTATION_SPEED: f64 = 1.0;
    pub const INITIAL_OPACITY: f64 = 0.2;
    pub const INITIAL_OPACITY_RANGE: f64 = 0.5;
    // Half-width of the diamond relative to its half-height
    const DIAMOND_ASPECT: f64 = 0.7;
    const INNER_SCALE: f64 = 0.5;
    const INNER_ALPHA: f64 = 0.3;

    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, size: f64, hue: Palette) -> Particle {
        Particle {
            pos,
            vel,
            size,
            rotation_deg: 0.0,
            rotation_speed: 0.0,
            opacity: Particle::INITIAL_OPACITY,
            hue,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Particle {
        self.opacity = opacity;
        self
    }

    pub fn with_spin(mut self, rotation_deg: f64, rotation_speed: f64) -> Particle {
        self.rotation_deg = rotation_deg;
        self.rotation_speed = rotation_speed;
        self
    }

    // Draw order matters for replaying a seed: x, y, size, vx, vy, rotation,
    // spin, opacity, hue
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos = [rng.next() * width, rng.next() * height];
        let size = rng.next() * Particle::SIZE_RANGE + Particle::MIN_SIZE;
        let vel = [
            (rng.next() - 0.5) * 2.0 * Particle::MAX_SPEED,
            (rng.next() - 0.5) * 2.0 * Particle::MAX_SPEED,
        ];
        let rotation_deg = rng.next() * 360.0;
        let rotation_speed = (rng.next() - 0.5) * 2.0 * Particle::MAX_ROTATION_SPEED;
        let opacity = rng.next() * Particle::INITIAL_OPACITY_RANGE + Particle::INITIAL_OPACITY;
        let hue = Palette::pick(rng.next());

        Particle::new(pos, vel, size, hue)
            .with_spin(rotation_deg, rotation_speed)
            .with_opacity(opacity)
    }

    pub fn pos(&self) -> Vector2<f64> {
        self.pos
    }

    pub fn vel(&self) -> Vector2<f64> {
        self.vel
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn hue(&self) -> Palette {
        self.hue
    }

    /// Advances the particle by one frame: drift, spin, cursor pull and
    /// brightness, then wraparound against `bounds` (surface width, height).
    pub fn update(&mut self, cursor: Vector2<f64>, bounds: Vector2<f64>, config: &FieldConfig) {
        self.pos = vec2_add(self.pos, self.vel);
        self.rotation_deg += self.rotation_speed;

        let to_cursor = vec2_sub(cursor, self.pos);
        let distance = vec2_len(to_cursor);
        if distance < config.attraction_radius {
            let force = (config.attraction_radius - distance) / config.attraction_radius;
            self.pos = vec2_add(
                self.pos,
                vec2_scale(to_cursor, force * config.attraction_strength),
            );
            self.opacity += force * config.brighten_rate;
        } else {
            self.opacity -= config.fade_rate;
        }
        self.opacity = self.opacity.max(config.min_opacity).min(config.max_opacity);

        self.pos[0] = wrap(self.pos[0], self.size, bounds[0]);
        self.pos[1] = wrap(self.pos[1], self.size, bounds[1]);
    }

    /// Outer diamond outline in particle-local coordinates, scaled by `scale`.
    pub fn diamond(&self, scale: f64) -> [Vector2<f64>; 4] {
        let half_h = self.size * scale;
        let half_w = half_h * Particle::DIAMOND_ASPECT;
        [[0.0, -half_h], [half_w, 0.0], [0.0, half_h], [-half_w, 0.0]]
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, line_width: f64) {
        let color = self.hue.color();
        surface.save();
        surface.translate(self.pos[0], self.pos[1]);
        surface.rotate(self.rotation_deg.to_radians());

        surface.set_global_alpha(self.opacity);
        surface.set_line_width(line_width);
        surface.stroke_polygon(&self.diamond(1.0), color);

        surface.set_global_alpha(self.opacity * Particle::INNER_ALPHA);
        surface.fill_polygon(&self.diamond(Particle::INNER_SCALE), color);
        surface.restore();
    }
}

// Wraps a coordinate that left [-size, extent + size] back in from the
// opposite edge, keeping how far it overshot
fn wrap(coord: f64, size: f64, extent: f64) -> f64 {
    let low = -size;
    let high = extent + size;
    if coord >= low && coord <= high {
        return coord;
    }
    let span = high - low;
    low + (coord - low).rem_euclid(span)
}
