//! Hero background particle field.
//!
//! The field is a fixed-size set of points bouncing inside a rectangle.
//! Every frame they move by their velocity, flip a velocity component when
//! they cross an edge on that axis, and any two points closer than the link
//! distance get a line whose opacity fades linearly with distance.

use crate::config::ParticleSettings;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub r: f64,
}

impl Particle {
    /// `rand` yields uniform samples in `[0, 1)`.
    fn spawn(width: f64, height: f64, s: &ParticleSettings, rand: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: rand() * width,
            y: rand() * height,
            vx: (rand() - 0.5) * 2.0 * s.max_speed,
            vy: (rand() - 0.5) * 2.0 * s.max_speed,
            r: s.min_radius + rand() * (s.max_radius - s.min_radius),
        }
    }

    /// Elastic bounce: the sign flips, the position is left alone.
    fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

pub fn link_opacity(s: &ParticleSettings, distance: f64) -> Option<f64> {
    (distance < s.link_distance).then(|| (1.0 - distance / s.link_distance) * s.link_alpha)
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    settings: ParticleSettings,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(settings: ParticleSettings, width: f64, height: f64, mut rand: impl FnMut() -> f64) -> Self {
        let mut field = Self {
            settings,
            width,
            height,
            particles: Vec::with_capacity(settings.count),
        };
        field.populate(&mut rand);
        field
    }

    /// New bounds discard the whole set; nothing is rescaled.
    pub fn resize(&mut self, width: f64, height: f64, mut rand: impl FnMut() -> f64) {
        self.width = width;
        self.height = height;
        self.populate(&mut rand);
    }

    fn populate(&mut self, rand: &mut impl FnMut() -> f64) {
        let (w, h, s) = (self.width, self.height, self.settings);
        self.particles = (0..s.count).map(|_| Particle::spawn(w, h, &s, rand)).collect();
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(w, h);
        }
    }

    /// Every unordered pair within link distance, each pair once.
    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        for (a, p) in self.particles.iter().enumerate() {
            for (b, q) in self.particles.iter().enumerate().skip(a + 1) {
                let d = (p.x - q.x).hypot(p.y - q.y);
                if let Some(opacity) = link_opacity(&self.settings, d) {
                    out.push(Link { a, b, opacity });
                }
            }
        }
        out
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn settings(&self) -> &ParticleSettings {
        &self.settings
    }
}
