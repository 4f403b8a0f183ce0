// Tuning knobs for the particle field. Defaults reproduce the look of the
// portfolio background.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Surface area (in square pixels) that buys one particle.
    pub area_per_particle: u32,
    /// Cursor distance under which particles are pulled in and brighten.
    pub attraction_radius: f64,
    /// Fraction of the cursor delta travelled per frame at full force.
    pub attraction_strength: f64,
    pub brighten_rate: f64,
    pub fade_rate: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    /// Particles closer than this are joined by a line.
    pub link_distance: f64,
    /// Alpha of a link between two particles at the same spot.
    pub link_alpha: f64,
    pub line_width: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            area_per_particle: 15_000,
            attraction_radius: 150.0,
            attraction_strength: 0.01,
            brighten_rate: 0.02,
            fade_rate: 0.01,
            min_opacity: 0.2,
            max_opacity: 1.0,
            link_distance: 100.0,
            link_alpha: 0.2,
            line_width: 1.0,
        }
    }
}

impl FieldConfig {
    pub fn particle_count(&self, width: u32, height: u32) -> usize {
        if self.area_per_particle == 0 {
            return 0;
        }
        (width as u64 * height as u64 / self.area_per_particle as u64) as usize
    }
}
