use folio_wasm::config::ParticleSettings;
use folio_wasm::particles::{link_opacity, Particle, ParticleField};

/// Deterministic uniform samples in [0, 1).
fn xorshift(mut seed: u64) -> impl FnMut() -> f64 {
    move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        (seed >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn still(x: f64, y: f64) -> Particle {
    Particle { x, y, vx: 0.0, vy: 0.0, r: 1.0 }
}

#[test]
fn field_has_fixed_count_after_init_and_resize() {
    let mut field = ParticleField::new(ParticleSettings::default(), 800.0, 600.0, xorshift(7));
    assert_eq!(field.particles().len(), 55);

    field.resize(320.0, 200.0, xorshift(11));
    assert_eq!(field.particles().len(), 55);
    assert_eq!(field.size(), (320.0, 200.0));
    for p in field.particles() {
        assert!((0.0..320.0).contains(&p.x) && (0.0..200.0).contains(&p.y), "{p:?}");
    }
}

#[test]
fn spawned_particles_respect_ranges() {
    let field = ParticleField::new(ParticleSettings::default(), 1000.0, 500.0, xorshift(42));
    for p in field.particles() {
        assert!(p.vx.abs() <= 0.225 && p.vy.abs() <= 0.225, "{p:?}");
        assert!((0.8..2.6).contains(&p.r), "{p:?}");
    }
}

#[test]
fn velocity_flips_only_when_crossing_an_edge() {
    let settings = ParticleSettings { count: 3, ..Default::default() };
    let mut field = ParticleField::new(settings, 100.0, 100.0, xorshift(1));
    field.particles_mut().copy_from_slice(&[
        Particle { x: 0.1, y: 50.0, vx: -0.2, vy: 0.1, r: 1.0 },
        Particle { x: 50.0, y: 99.9, vx: 0.1, vy: 0.2, r: 1.0 },
        Particle { x: 50.0, y: 50.0, vx: 0.2, vy: -0.2, r: 1.0 },
    ]);

    field.step();
    let p = field.particles();
    assert_eq!((p[0].vx, p[0].vy), (0.2, 0.1));
    assert!(p[0].x < 0.0, "position is not clamped");
    assert_eq!((p[1].vx, p[1].vy), (0.1, -0.2));
    assert_eq!((p[2].vx, p[2].vy), (0.2, -0.2));

    field.step();
    let p = field.particles();
    assert_eq!(p[0].vx, 0.2);
    assert_eq!(p[1].vy, -0.2);
}

#[test]
fn links_cover_each_close_pair_once() {
    let settings = ParticleSettings { count: 4, ..Default::default() };
    let mut field = ParticleField::new(settings, 1000.0, 1000.0, xorshift(3));
    field
        .particles_mut()
        .copy_from_slice(&[still(0.0, 0.0), still(70.0, 0.0), still(300.0, 0.0), still(300.0, 140.0)]);

    let links = field.links();
    assert_eq!(links.len(), 1, "{links:?}");
    assert_eq!((links[0].a, links[0].b), (0, 1));
    assert!((links[0].opacity - 0.125).abs() < 1e-12);
}

#[test]
fn dense_field_links_every_pair() {
    let settings = ParticleSettings { count: 10, ..Default::default() };
    let field = ParticleField::new(settings, 50.0, 50.0, xorshift(9));
    assert_eq!(field.links().len(), 10 * 9 / 2);
    for link in field.links() {
        assert!(link.a < link.b);
        assert!(link.opacity > 0.0 && link.opacity <= 0.25);
    }
}

#[test]
fn opacity_fades_linearly_and_cuts_off_at_link_distance() {
    let s = ParticleSettings::default();
    assert_eq!(link_opacity(&s, 0.0), Some(0.25));
    assert_eq!(link_opacity(&s, 35.0), Some(0.1875));
    assert_eq!(link_opacity(&s, 140.0), None);
    assert_eq!(link_opacity(&s, 500.0), None);
}
