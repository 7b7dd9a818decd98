use std::fmt;

/// Transform for one decorative layer at a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTransform {
    pub translate_y: f64,
    pub rotate_deg: f64,
}

impl LayerTransform {
    /// Layer `index` moves up at `(index + 1) * speed_step` of the scroll
    /// speed and turns by `rotation_factor` degrees per scrolled pixel.
    pub fn at(index: usize, scroll_y: f64, speed_step: f64, rotation_factor: f64) -> Self {
        let speed = (index as f64 + 1.0) * speed_step;
        Self {
            // 0.0 - x keeps the unscrolled offset at +0.0
            translate_y: 0.0 - scroll_y * speed,
            rotate_deg: scroll_y * rotation_factor,
        }
    }
}

impl fmt::Display for LayerTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translateY({:.2}px) rotate({:.2}deg)",
            self.translate_y, self.rotate_deg
        )
    }
}
