//! Portal visual table.
//!
//! Every portal identifier maps to one [`PortalVisual`]. Unknown identifiers
//! get [`DEFAULT_VISUAL`], so lookups never fail.

use std::f32::consts::FRAC_PI_4;

use lumaura_core::Color;

/// Stroke alpha derived from the secondary color.
pub const STROKE_ALPHA: f32 = 0.6;
/// Fill alpha derived from the secondary color.
pub const FILL_ALPHA: f32 = 0.1;

/// Shape and palette for one portal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalVisual {
    /// Portal identifier, empty for the default entry.
    pub id: &'static str,
    /// Backdrop and particle color.
    pub primary: Color,
    /// Glyph and particle color.
    pub secondary: Color,
    /// Polygon edge count.
    pub sides: u32,
    /// Outer polygon radius as a fraction of the base radius.
    pub size_scale: f32,
    /// Inner polygon radius as a fraction of the outer one.
    pub inner_ratio: f32,
    /// Fixed rotation added to the outer frame, in radians.
    pub extra_rotation: f32,
}

impl PortalVisual {
    /// Looks up the visual for `id`, falling back to the default hexagon.
    #[must_use]
    pub fn lookup(id: &str) -> &'static Self {
        PORTAL_VISUALS
            .iter()
            .find(|visual| visual.id == id)
            .unwrap_or(&DEFAULT_VISUAL)
    }

    /// True when `id` has its own table entry.
    #[must_use]
    pub fn is_known(id: &str) -> bool {
        PORTAL_VISUALS.iter().any(|visual| visual.id == id)
    }

    /// Glyph outline color.
    #[must_use]
    pub const fn stroke(&self) -> Color {
        self.secondary.with_alpha(STROKE_ALPHA)
    }

    /// Glyph fill color.
    #[must_use]
    pub const fn fill(&self) -> Color {
        self.secondary.with_alpha(FILL_ALPHA)
    }
}

/// Teal/violet hexagon used for any unrecognized portal.
pub const DEFAULT_VISUAL: PortalVisual = PortalVisual {
    id: "",
    primary: Color::rgba(98, 0, 234, 0.7),
    secondary: Color::rgba(3, 218, 198, 0.5),
    sides: 6,
    size_scale: 0.8,
    inner_ratio: 0.6,
    extra_rotation: 0.0,
};

/// Known portals.
pub static PORTAL_VISUALS: [PortalVisual; 5] = [
    // Banker: octagon
    PortalVisual {
        id: "xuvebanker",
        primary: Color::rgba(123, 31, 162, 0.7),
        secondary: Color::rgba(156, 39, 176, 0.5),
        sides: 8,
        size_scale: 0.7,
        inner_ratio: 0.6,
        extra_rotation: 0.0,
    },
    // Marketing: triangle
    PortalVisual {
        id: "xuvemark",
        primary: Color::rgba(0, 145, 234, 0.7),
        secondary: Color::rgba(3, 169, 244, 0.5),
        sides: 3,
        size_scale: 0.9,
        inner_ratio: 0.7,
        extra_rotation: 0.0,
    },
    // Team: pentagon
    PortalVisual {
        id: "xuveteam",
        primary: Color::rgba(0, 200, 83, 0.7),
        secondary: Color::rgba(76, 175, 80, 0.5),
        sides: 5,
        size_scale: 0.8,
        inner_ratio: 0.6,
        extra_rotation: 0.0,
    },
    // Code: square turned into a diamond
    PortalVisual {
        id: "xuvecode",
        primary: Color::rgba(255, 214, 0, 0.7),
        secondary: Color::rgba(255, 235, 59, 0.5),
        sides: 4,
        size_scale: 0.75,
        inner_ratio: 0.6,
        extra_rotation: FRAC_PI_4,
    },
    // Vault: hexagon
    PortalVisual {
        id: "xuvevault",
        primary: Color::rgba(213, 0, 0, 0.7),
        secondary: Color::rgba(244, 67, 54, 0.5),
        sides: 6,
        size_scale: 0.7,
        inner_ratio: 0.5,
        extra_rotation: 0.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shapes() {
        let expected = [
            ("xuvebanker", 8, 0.7, 0.6, 0.0),
            ("xuvemark", 3, 0.9, 0.7, 0.0),
            ("xuveteam", 5, 0.8, 0.6, 0.0),
            ("xuvecode", 4, 0.75, 0.6, FRAC_PI_4),
            ("xuvevault", 6, 0.7, 0.5, 0.0),
        ];

        for (id, sides, scale, inner, rotation) in expected {
            let visual = PortalVisual::lookup(id);
            assert_eq!(visual.id, id);
            assert_eq!(visual.sides, sides, "{id}");
            assert!((visual.size_scale - scale).abs() < f32::EPSILON, "{id}");
            assert!((visual.inner_ratio - inner).abs() < f32::EPSILON, "{id}");
            assert!((visual.extra_rotation - rotation).abs() < f32::EPSILON, "{id}");
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_hexagon() {
        let visual = PortalVisual::lookup("xuvesomething");
        assert_eq!(visual, &DEFAULT_VISUAL);
        assert_eq!(visual.sides, 6);
        assert!(!PortalVisual::is_known("xuvesomething"));
        assert!(!PortalVisual::is_known(""));
        assert_eq!(PortalVisual::lookup(""), &DEFAULT_VISUAL);
    }

    #[test]
    fn test_derived_glyph_colors() {
        let vault = PortalVisual::lookup("xuvevault");
        assert_eq!(vault.stroke(), Color::rgba(244, 67, 54, 0.6));
        assert_eq!(vault.fill(), Color::rgba(244, 67, 54, 0.1));
        assert_eq!(DEFAULT_VISUAL.stroke(), Color::rgba(3, 218, 198, 0.6));
    }
}
