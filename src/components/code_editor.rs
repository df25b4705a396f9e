use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::animation::spring::{SpringConfig, spring};
use crate::animation::typing::TypeOn;
use crate::components::spec::Component;
use crate::components::visual::{Element, ElementKind, Fill, RenderCtx, Visual};
use crate::foundation::core::{FrameIndex, Vec2};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::theme::color::Color;
use crate::theme::palette::{ThemeName, theme};

const CONTAINER_SPRING: SpringConfig = SpringConfig::new(100.0, 200.0, 0.5);
const OUTPUT_SPRING: SpringConfig = SpringConfig::new(12.0, 100.0, 0.8);
const HEADER_DELAY: u64 = 10;
const OUTPUT_DELAY: u64 = 30;
const OUTPUT_MARKER: &str = "Output:";
const PADDING: f64 = 32.0;
const FONT_SIZE: f64 = 25.6;

/// Code snippet typed out line by line inside an editor frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CodeEditorProps {
    /// Full source text; lines are separated by `\n`.
    pub code: String,
    /// Optional header above the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Highlighter language id (default `javascript`).
    #[serde(default = "default_language")]
    pub language: String,
    /// Characters per frame.
    #[serde(default = "default_typing_speed")]
    pub typing_speed: f64,
    /// Frames before the first character appears.
    #[serde(default)]
    pub typing_delay_frames: u64,
    /// Draw a gutter with one number per revealed line.
    #[serde(default)]
    pub show_line_numbers: bool,
    /// Hold back whatever follows `Output:` on a line until the output spring kicks in.
    #[serde(default)]
    pub highlight_output: bool,
    /// Editor palette (default `dark`).
    #[serde(default)]
    pub theme: ThemeName,
}

fn default_language() -> String {
    "javascript".to_string()
}

fn default_typing_speed() -> f64 {
    1.0
}

impl CodeEditorProps {
    /// Editor for `code` typing at one character per frame from frame 0.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: None,
            language: default_language(),
            typing_speed: default_typing_speed(),
            typing_delay_frames: 0,
            show_line_numbers: false,
            highlight_output: false,
            theme: ThemeName::default(),
        }
    }

    fn typing(&self) -> FramecastResult<TypeOn> {
        TypeOn::new(FrameIndex(self.typing_delay_frames), self.typing_speed)
    }

    /// Frames until every character is on screen.
    pub fn frames_to_complete(&self) -> FramecastResult<u64> {
        let t = self.typing()?;
        Ok(self.typing_delay_frames + t.frames_to_complete(&self.code))
    }
}

impl Component for CodeEditorProps {
    fn validate(&self) -> FramecastResult<()> {
        if self.language.trim().is_empty() {
            return Err(FramecastError::validation("code_editor.language must be non-empty"));
        }
        self.typing()?;
        Ok(())
    }

    fn render(&self, ctx: &RenderCtx) -> FramecastResult<Visual> {
        let palette = theme(self.theme)?;
        let typing = self.typing()?;
        let container_p = spring(ctx.frame, FrameIndex(0), ctx.fps, CONTAINER_SPRING);
        let output_p = spring(ctx.frame, FrameIndex(OUTPUT_DELAY), ctx.fps, OUTPUT_SPRING);
        let show_output = output_p >= 0.1;

        let lines: Vec<String> = typing
            .visible_lines(ctx.frame, &self.code)
            .into_iter()
            .map(|line| {
                if self.highlight_output
                    && !show_output
                    && let Some(idx) = line.find(OUTPUT_MARKER)
                {
                    return line[..idx + OUTPUT_MARKER.len()].to_string();
                }
                line.to_string()
            })
            .collect();

        let center = ctx.canvas.center();
        let size = Vec2::new(
            (f64::from(ctx.canvas.width) - 2.0 * PADDING).max(0.0),
            (f64::from(ctx.canvas.height) - 2.0 * PADDING).max(0.0),
        );
        let mut visual = Visual::with_background(Fill::solid(palette.background));
        visual.push(
            Element::new(
                "container",
                ElementKind::Rect {
                    size,
                    fill: Fill::solid(palette.container_background),
                    corner_radius: 8.0,
                },
                center,
            )
            .with_opacity(container_p)
            .with_scale(container_p),
        );

        let top = center.y - size.y / 2.0 + PADDING;
        let left = center.x - size.x / 2.0 + PADDING;
        let mut code_top = top;
        if let Some(title) = &self.title {
            let header_p = spring(ctx.frame, FrameIndex(HEADER_DELAY), ctx.fps, CONTAINER_SPRING);
            let header_y = interpolate(
                header_p,
                &[0.0, 1.0],
                &[20.0, 0.0],
                InterpolateOpts::default(),
            )?;
            visual.push(
                Element::new(
                    "header",
                    ElementKind::Text {
                        text: title.clone(),
                        font_size: 40.0,
                        color: Color::rgb(0x61dafb),
                    },
                    Vec2::new(center.x, top + 20.0),
                )
                .with_opacity(header_p)
                .translated(Vec2::new(0.0, header_y)),
            );
            code_top += 64.0;
        }

        let mut code_left = left;
        if self.show_line_numbers {
            let numbers = (1..=lines.len())
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            visual.push(
                Element::new(
                    "line_numbers",
                    ElementKind::Text {
                        text: numbers,
                        font_size: FONT_SIZE,
                        color: palette.line_numbers,
                    },
                    Vec2::new(left, code_top),
                )
                .with_opacity(container_p),
            );
            visual.push(
                Element::new(
                    "line_numbers_border",
                    ElementKind::Rect {
                        size: Vec2::new(1.0, (size.y - (code_top - top) - PADDING).max(0.0)),
                        fill: Fill::solid(palette.line_numbers_border),
                        corner_radius: 0.0,
                    },
                    Vec2::new(left + 40.0, center.y),
                )
                .with_opacity(container_p),
            );
            code_left += 64.0;
        }

        visual.push(
            Element::new(
                "code",
                ElementKind::Code {
                    text: lines.join("\n"),
                    language: self.language.clone(),
                    theme: self.theme,
                    font_size: FONT_SIZE,
                },
                Vec2::new(code_left, code_top),
            )
            .with_opacity(container_p),
        );
        Ok(visual)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/code_editor.rs"]
mod tests;
