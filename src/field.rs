// The particle field: owns the diamonds, the cursor and the surface size, and
// advances/renders one frame per tick. Scheduling frames is left to the caller.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::random::RandomSource;
use crate::surface::Surface;
use vecmath::{vec2_len, vec2_sub, Vector2};

/// A line between two particles closer than the link distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub alpha: f64,
}

pub struct ParticleField<R> {
    width: u32,
    height: u32,
    cursor: Vector2<f64>,
    particles: Vec<Particle>,
    config: FieldConfig,
    rng: R,
}

impl<R: RandomSource> ParticleField<R> {
    pub fn new(width: u32, height: u32, rng: R) -> Self {
        ParticleField::with_config(FieldConfig::default(), width, height, rng)
    }

    pub fn with_config(config: FieldConfig, width: u32, height: u32, rng: R) -> Self {
        let mut field = ParticleField {
            width,
            height,
            cursor: [0.0, 0.0],
            particles: Vec::new(),
            config,
            rng,
        };
        field.populate();
        field
    }

    /// Adopts new surface dimensions and replaces every particle.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = [x, y];
    }

    /// Renders one frame: clear, connections from last frame's positions,
    /// then update-and-draw each particle in order.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let bounds = self.bounds();
        surface.clear(0.0, 0.0, bounds[0], bounds[1]);

        self.draw_connections(surface);

        let cursor = self.cursor;
        let config = &self.config;
        for particle in &mut self.particles {
            particle.update(cursor, bounds, config);
            particle.draw(surface, config.line_width);
        }
    }

    fn populate(&mut self) {
        let count = self.config.particle_count(self.width, self.height);
        let (width, height) = (self.width as f64, self.height as f64);
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        log::debug!(
            "populated {} particles for {}x{} surface",
            count,
            self.width,
            self.height
        );
    }
}

impl<R> ParticleField<R> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cursor(&self) -> Vector2<f64> {
        self.cursor
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    fn bounds(&self) -> Vector2<f64> {
        [self.width as f64, self.height as f64]
    }

    /// Every unordered pair closer than the link distance, brute force.
    pub fn connections(&self) -> Vec<Connection> {
        let link_distance = self.config.link_distance;
        let mut connections = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = vec2_len(vec2_sub(a.pos(), b.pos()));
                if distance < link_distance {
                    connections.push(Connection {
                        from: i,
                        to: j,
                        alpha: (link_distance - distance) / link_distance * self.config.link_alpha,
                    });
                }
            }
        }
        connections
    }

    pub fn draw_connections<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_line_width(self.config.line_width);
        surface.set_stroke_color(Color::LINK);
        for connection in self.connections() {
            surface.set_global_alpha(connection.alpha);
            surface.stroke_line(
                self.particles[connection.from].pos(),
                self.particles[connection.to].pos(),
            );
        }
        surface.set_global_alpha(1.0);
    }
}

#[cfg(test)]
impl<R> ParticleField<R> {
    pub(crate) fn replace_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }
}
