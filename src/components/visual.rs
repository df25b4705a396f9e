use crate::foundation::core::{Canvas, Fps, FrameIndex, Vec2};
use crate::theme::color::Color;
use crate::theme::palette::ThemeName;

/// Frame inputs handed to every component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderCtx {
    /// Frame local to the segment the component lives in.
    pub frame: FrameIndex,
    /// Composition frame rate.
    pub fps: Fps,
    /// Output canvas size in pixels.
    pub canvas: Canvas,
    /// Stable per-scene seed for keyed randomness.
    pub seed: u64,
}

/// Paint used for backgrounds and filled shapes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fill {
    /// Single flat color.
    Solid {
        /// Fill color.
        color: Color,
    },
    /// Evenly spaced color stops along a direction.
    LinearGradient {
        /// Gradient direction in degrees, CSS convention (`0` points up, clockwise).
        angle_deg: f64,
        /// Colors from the start to the end of the gradient.
        stops: Vec<Color>,
    },
    /// Radial gradient from the center outwards.
    RadialGradient {
        /// Color at the center.
        inner: Color,
        /// Color at the edge.
        outer: Color,
    },
}

impl Fill {
    /// Flat fill with `color`.
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }
}

/// What an [`Element`] draws.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    /// A run of text, centered on the element position.
    Text {
        /// Text to draw; may contain line breaks.
        text: String,
        /// Font size in pixels.
        font_size: f64,
        /// Text color.
        color: Color,
    },
    /// Source code handed to the external highlighter.
    Code {
        /// Code revealed so far.
        text: String,
        /// Highlighter language id, e.g. `javascript`.
        language: String,
        /// Palette for syntax colors.
        theme: ThemeName,
        /// Font size in pixels.
        font_size: f64,
    },
    /// Filled circle.
    Circle {
        /// Radius in pixels.
        radius: f64,
        /// Circle paint.
        fill: Fill,
        /// Gaussian blur radius in pixels; `0` is sharp.
        blur: f64,
    },
    /// Stroked circular arc starting at 12 o'clock; `sweep` is the covered fraction.
    Arc {
        /// Radius of the stroke centerline in pixels.
        radius: f64,
        /// Stroke width in pixels.
        stroke_width: f64,
        /// Stroke color.
        color: Color,
        /// Covered fraction of the full circle, `0..=1`, clockwise.
        sweep: f64,
    },
    /// Axis-aligned rectangle.
    Rect {
        /// Width and height in pixels.
        size: Vec2,
        /// Rectangle paint.
        fill: Fill,
        /// Corner radius in pixels.
        corner_radius: f64,
    },
}

/// One drawable item, centered on `position` (pixels).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Element {
    /// Identifier, unique within its [`Visual`].
    pub id: String,
    /// Shape or text to draw.
    pub kind: ElementKind,
    /// Layout position in pixels.
    pub position: Vec2,
    /// Extra offset applied after layout, in pixels.
    pub translate: Vec2,
    /// Uniform scale around `position`.
    pub scale: f64,
    /// Opacity in `0..=1`.
    pub opacity: f64,
}

impl Element {
    /// Fully opaque, unscaled element at `position`.
    pub fn new(id: impl Into<String>, kind: ElementKind, position: Vec2) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            translate: Vec2::ZERO,
            scale: 1.0,
            opacity: 1.0,
        }
    }

    /// Set the opacity, clamped to `0..=1`.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the uniform scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the post-layout offset.
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.translate = offset;
        self
    }
}

/// Deterministic output of a component for one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Visual {
    /// Full-canvas fill behind the elements; `None` is transparent.
    pub background: Option<Fill>,
    /// Elements in paint order, back to front.
    pub elements: Vec<Element>,
}

impl Visual {
    /// Empty visual over a full-canvas `background`.
    pub fn with_background(background: Fill) -> Self {
        Self {
            background: Some(background),
            elements: Vec::new(),
        }
    }

    /// Append `element` on top of the existing ones.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// First element with the given id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }
}
