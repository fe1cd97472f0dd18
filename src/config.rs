//! Tunables and the page markup contract.
//!
//! Every timing value is in milliseconds, every distance in CSS pixels.

/// Element ids, selectors, classes and attributes the page markup provides.
pub mod selectors {
    pub const THEME_TOGGLE: &str = "darkToggle";
    pub const NAVBAR: &str = "navbar";
    pub const NAV_TOGGLE: &str = "navToggle";
    pub const NAV_LINKS: &str = "navLinks";
    pub const BACK_TO_TOP: &str = "backToTop";
    pub const HERO_CANVAS: &str = "heroCanvas";
    pub const TYPEWRITER: &str = "typewriter";

    pub const SECTIONS: &str = "section[id]";
    pub const FRAGMENT_ANCHORS: &str = "a[href^=\"#\"]";
    pub const NAV_ANCHORS: &str = ".nav-links a[href^=\"#\"]";
    pub const FADE_IN: &str = ".fade-in";
    pub const COUNTERS: &str = ".stat-number[data-count]";

    pub const SCROLLED: &str = "scrolled";
    pub const OPEN: &str = "open";
    pub const ACTIVE: &str = "active";
    pub const VISIBLE: &str = "visible";

    pub const THEME_ATTR: &str = "data-theme";
    pub const COUNT_ATTR: &str = "data-count";
    pub const SUFFIX_ATTR: &str = "data-suffix";

    pub const THEME_KEY: &str = "theme";
    pub const REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";
}

/// Hero background simulation and drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParticleSettings {
    pub count: usize,
    pub link_distance: f64,
    /// Upper bound on |vx| and |vy|.
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Opacity of a link between two coincident particles.
    pub link_alpha: f64,
    pub line_width: f64,
    pub fill: &'static str,
    /// RGB triple, the alpha is computed per link.
    pub stroke_rgb: (u8, u8, u8),
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: 55,
            link_distance: 140.0,
            max_speed: 0.225,
            min_radius: 0.8,
            max_radius: 2.6,
            link_alpha: 0.25,
            line_width: 0.8,
            fill: "rgba(147,197,253,0.55)",
            stroke_rgb: (59, 130, 246),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypewriterSettings {
    pub start_delay: u32,
    pub type_interval: u32,
    pub delete_interval: u32,
    /// Hold on a fully typed phrase before erasing.
    pub hold: u32,
    /// Gap between an erased phrase and the next one.
    pub gap: u32,
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        Self {
            start_delay: 900,
            type_interval: 55,
            delete_interval: 28,
            hold: 2200,
            gap: 400,
        }
    }
}

pub const PHRASES: [&str; 5] = [
    "Data Security & Cyber Resiliency Expert",
    "Hybrid Cloud Architect",
    "Senior Sales Engineer @ Cohesity",
    "Disaster Recovery Specialist",
    "Business Continuity Strategist",
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CounterSettings {
    pub duration: u32,
    pub tick: u32,
    pub threshold: f64,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            duration: 1400,
            tick: 16,
            threshold: 0.5,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NavSettings {
    pub scrolled_after: f64,
    pub header_offset: f64,
    pub back_to_top_after: f64,
    pub section_threshold: f64,
    pub section_margin: &'static str,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            scrolled_after: 50.0,
            header_offset: 68.0,
            back_to_top_after: 300.0,
            section_threshold: 0.25,
            section_margin: "-64px 0px -40% 0px",
        }
    }
}

/// Fade-in trigger zone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RevealSettings {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -40px 0px",
        }
    }
}
