//! The two fixed outline variants that tile the tunnel.
//!
//! Both definitions are compiled once into a [`ShapeCatalog`] and never
//! mutated afterwards. Sequence slots refer to them through the copyable
//! [`ShapeKind`] handle rather than holding copies.

use crate::error::{Result, TunnelError};
use kurbo::BezPath;

/// Handle selecting one of the two catalog entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Primary,
    Secondary,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Primary => "primary",
            ShapeKind::Secondary => "secondary",
        }
    }
}

/// Decorative circle in design-space units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleDef {
    pub cx: f32,
    pub cy: f32,
    pub r: f32,
}

/// One parsed outline. `source` keeps the SVG path string so backends with a
/// native path parser (Canvas `Path2D`) can compile it themselves.
#[derive(Clone, Debug)]
pub struct PathGeometry {
    pub source: &'static str,
    pub path: BezPath,
}

impl PathGeometry {
    pub fn parse(source: &'static str) -> std::result::Result<Self, kurbo::SvgParseError> {
        let path = BezPath::from_svg(source)?;
        Ok(Self { source, path })
    }
}

/// Immutable outline set at fixed design-space dimensions.
#[derive(Clone, Debug)]
pub struct ShapeDefinition {
    pub kind: ShapeKind,
    pub width: f32,
    pub height: f32,
    pub outlines: Vec<PathGeometry>,
    pub circles: &'static [CircleDef],
}

struct ShapeSource {
    kind: ShapeKind,
    width: f32,
    height: f32,
    outlines: &'static [&'static str],
    circles: &'static [CircleDef],
}

const CIRCLES: &[CircleDef] = &[
    CircleDef {
        cx: 435.5,
        cy: 78.5,
        r: 24.5,
    },
    CircleDef {
        cx: 734.5,
        cy: 78.5,
        r: 24.5,
    },
];

const PRIMARY: ShapeSource = ShapeSource {
    kind: ShapeKind::Primary,
    width: 1170.0,
    height: 516.0,
    outlines: &[
        "M585 124.5H550.5L535 110.5V83.4999M585 57.5H550.5L535 72.9999V95.4999",
        "M18 30L27.5 70.5C451.5 84 486 191 487.5 202.5L503 514.5H585M18 30H1V1H66.5V22M18 30H66.5M66.5 30L585 32M66.5 30V22M585 46H511L499 58V115L541 137.5H585M585 16.5H537V22H66.5M489 58V115L471.634 124.5H453.634L354 69.5V58L365.5 46H477L489 58Z",
        "M585 124.5H619.5L635 110.5V83.4999M585 57.5H619.5L635 72.9999V95.4999",
        "M1152 30L1142.5 70.5C718.5 84 684 191 682.5 202.5L667 514.5H585M1152 30H1169V1H1103.5V22M1152 30H1103.5M1103.5 30L585 32M1103.5 30V22M585 46H659L671 58V115L629 137.5H585M585 16.5H633V22H1103.5M681 58V115L698.366 124.5H716.366L816 69.5V58L804.5 46H693L681 58Z",
    ],
    circles: CIRCLES,
};

// Same upper outline as the primary, cut off at y=202.5 instead of running
// down to the floor line.
const SECONDARY: ShapeSource = ShapeSource {
    kind: ShapeKind::Secondary,
    width: 1170.0,
    height: 204.0,
    outlines: &[
        "M585 124.5H550.5L535 110.5V83.4999M585 57.5H550.5L535 72.9999V95.4999",
        "M18 30L27.5 70.5C451.5 84 486 191 487.5 202.5H585M18 30H1V1H66.5V22M18 30H66.5M66.5 30L585 32M66.5 30V22M585 46H511L499 58V115L541 137.5H585M585 16.5H537V22H66.5M489 58V115L471.634 124.5H453.634L354 69.5V58L365.5 46H477L489 58Z",
        "M585 124.5H619.5L635 110.5V83.4999M585 57.5H619.5L635 72.9999V95.4999",
        "M1152 30L1142.5 70.5C718.5 84 684 191 682.5 202.5H585M1152 30H1169V1H1103.5V22M1152 30H1103.5M1103.5 30L585 32M1103.5 30V22M585 46H659L671 58V115L629 137.5H585M585 16.5H633V22H1103.5M681 58V115L698.366 124.5H716.366L816 69.5V58L804.5 46H693L681 58Z",
    ],
    circles: CIRCLES,
};

impl ShapeDefinition {
    fn compile(src: &ShapeSource) -> Self {
        let outlines = src
            .outlines
            .iter()
            .enumerate()
            .filter_map(|(index, s)| match parse_outline(src.kind, index, s) {
                Ok(p) => Some(p),
                Err(e) => {
                    log::warn!("[shapes] skipping {e}");
                    None
                }
            })
            .collect();
        Self {
            kind: src.kind,
            width: src.width,
            height: src.height,
            outlines,
            circles: src.circles,
        }
    }

    /// A shape with neither outlines nor circles draws nothing.
    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty() && self.circles.is_empty()
    }
}

/// Parse one outline string, tagging failures with where they came from.
pub fn parse_outline(kind: ShapeKind, index: usize, source: &'static str) -> Result<PathGeometry> {
    PathGeometry::parse(source).map_err(|e| TunnelError::PathParse {
        shape: kind.name(),
        index,
        message: format!("{e:?}"),
    })
}

/// The two process-wide shape definitions.
#[derive(Clone, Debug)]
pub struct ShapeCatalog {
    primary: ShapeDefinition,
    secondary: ShapeDefinition,
}

impl ShapeCatalog {
    /// Parse the built-in outlines. Malformed strings are dropped with a
    /// warning; the remaining outlines of that shape still draw.
    pub fn compile() -> Self {
        let catalog = Self {
            primary: ShapeDefinition::compile(&PRIMARY),
            secondary: ShapeDefinition::compile(&SECONDARY),
        };
        log::debug!(
            "[shapes] compiled primary={} secondary={} outlines",
            catalog.primary.outlines.len(),
            catalog.secondary.outlines.len()
        );
        catalog
    }

    pub fn get(&self, kind: ShapeKind) -> &ShapeDefinition {
        match kind {
            ShapeKind::Primary => &self.primary,
            ShapeKind::Secondary => &self.secondary,
        }
    }

    pub fn primary(&self) -> &ShapeDefinition {
        &self.primary
    }

    pub fn secondary(&self) -> &ShapeDefinition {
        &self.secondary
    }
}
