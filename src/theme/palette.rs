use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::foundation::error::{FramecastError, FramecastResult};
use crate::theme::color::Color;

/// Built-in editor palettes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// VS Code style dark palette; the default.
    #[default]
    Dark,
    /// Monokai.
    Monokai,
    /// GitHub light.
    Github,
    /// Dracula.
    Dracula,
}

impl ThemeName {
    /// Every built-in palette, in declaration order.
    pub const ALL: [ThemeName; 4] = [Self::Dark, Self::Monokai, Self::Github, Self::Dracula];

    /// Lowercase name, as used in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Monokai => "monokai",
            Self::Github => "github",
            Self::Dracula => "dracula",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = FramecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| FramecastError::validation(format!("unknown theme '{s}'")))
    }
}

/// Token colors used by the external highlighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SyntaxColors {
    /// Comments.
    pub comment: Color,
    /// String literals.
    pub string: Color,
    /// Numeric literals.
    pub number: Color,
    /// Function names.
    pub function: Color,
    /// Keywords.
    pub keyword: Color,
    /// Operators and punctuation.
    pub operator: Color,
    /// Identifiers.
    pub variable: Color,
}

/// Semantic roles of a code editor palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct EditorTheme {
    /// Canvas behind the editor.
    pub background: Color,
    /// Editor panel.
    pub container_background: Color,
    /// Plain text and headers.
    pub text: Color,
    /// Gutter digits.
    pub line_numbers: Color,
    /// Rule between the gutter and the code.
    pub line_numbers_border: Color,
    /// Token colors.
    pub syntax: SyntaxColors,
}

static THEMES: Lazy<BTreeMap<ThemeName, EditorTheme>> = Lazy::new(|| {
    BTreeMap::from([
        (
            ThemeName::Dark,
            EditorTheme {
                background: Color::rgb(0x1a1a1a),
                container_background: Color::rgb(0x2d2d2d),
                text: Color::rgb(0xffffff),
                line_numbers: Color::rgb(0x666666),
                line_numbers_border: Color::rgb(0x444444),
                syntax: SyntaxColors {
                    comment: Color::rgb(0x6a9955),
                    string: Color::rgb(0xce9178),
                    number: Color::rgb(0xb5cea8),
                    function: Color::rgb(0xdcdcaa),
                    keyword: Color::rgb(0x569cd6),
                    operator: Color::rgb(0xd4d4d4),
                    variable: Color::rgb(0x9cdcfe),
                },
            },
        ),
        (
            ThemeName::Monokai,
            EditorTheme {
                background: Color::rgb(0x272822),
                container_background: Color::rgb(0x1e1f1c),
                text: Color::rgb(0xf8f8f2),
                line_numbers: Color::rgb(0x90908a),
                line_numbers_border: Color::rgb(0x464741),
                syntax: SyntaxColors {
                    comment: Color::rgb(0x75715e),
                    string: Color::rgb(0xe6db74),
                    number: Color::rgb(0xae81ff),
                    function: Color::rgb(0xa6e22e),
                    keyword: Color::rgb(0xf92672),
                    operator: Color::rgb(0xf8f8f2),
                    variable: Color::rgb(0x66d9ef),
                },
            },
        ),
        (
            ThemeName::Github,
            EditorTheme {
                background: Color::rgb(0xffffff),
                container_background: Color::rgb(0xf6f8fa),
                text: Color::rgb(0x24292e),
                line_numbers: Color::rgb(0x6e7781),
                line_numbers_border: Color::rgb(0xd0d7de),
                syntax: SyntaxColors {
                    comment: Color::rgb(0x6a737d),
                    string: Color::rgb(0x032f62),
                    number: Color::rgb(0x005cc5),
                    function: Color::rgb(0x6f42c1),
                    keyword: Color::rgb(0xd73a49),
                    operator: Color::rgb(0x24292e),
                    variable: Color::rgb(0xe36209),
                },
            },
        ),
        (
            ThemeName::Dracula,
            EditorTheme {
                background: Color::rgb(0x282a36),
                container_background: Color::rgb(0x1e1f29),
                text: Color::rgb(0xf8f8f2),
                line_numbers: Color::rgb(0x6272a4),
                line_numbers_border: Color::rgb(0x44475a),
                syntax: SyntaxColors {
                    comment: Color::rgb(0x6272a4),
                    string: Color::rgb(0xf1fa8c),
                    number: Color::rgb(0xbd93f9),
                    function: Color::rgb(0x50fa7b),
                    keyword: Color::rgb(0xff79c6),
                    operator: Color::rgb(0xf8f8f2),
                    variable: Color::rgb(0x8be9fd),
                },
            },
        ),
    ])
});

/// Palette for a built-in theme.
pub fn theme(name: ThemeName) -> FramecastResult<&'static EditorTheme> {
    THEMES
        .get(&name)
        .ok_or_else(|| FramecastError::validation(format!("theme '{name}' is not registered")))
}

/// Palette looked up by name; unknown names are validation errors.
pub fn theme_by_name(name: &str) -> FramecastResult<&'static EditorTheme> {
    theme(name.parse()?)
}

#[cfg(test)]
#[path = "../../tests/unit/theme/palette.rs"]
mod tests;
