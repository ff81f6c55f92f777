/// Gap in pixels between a hovered line and the bottom of its tooltip.
pub const TOOLTIP_GAP: f64 = 8.0;

/// On-screen bounding box of a rendered code line, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Where the hover tooltip is placed.
///
/// `top` is the tooltip's bottom edge; the tooltip is drawn upwards from it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TooltipAnchor {
    pub left: f64,
    pub top: f64,
}

impl TooltipAnchor {
    pub fn above(rect: LineRect) -> Self {
        Self {
            left: rect.left,
            top: rect.top - TOOLTIP_GAP,
        }
    }
}
