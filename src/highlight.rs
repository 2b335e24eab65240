use std::borrow::Cow;

use inksac::prelude::*;

use crate::core::commands::Builtin;

/// Colors the command word while the user types: built-ins in green,
/// everything else in cyan. Spacing is left untouched so the editor's
/// cursor math still lines up.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self::with_support(support)
    }

    pub fn with_support(color_support: ColorSupport) -> Self {
        Self { color_support }
    }

    pub fn highlight_command<'l>(&self, input: &'l str) -> Cow<'l, str> {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return Cow::Borrowed(input);
        }

        let Some(start) = input.find(|c: char| !c.is_whitespace()) else {
            return Cow::Borrowed(input);
        };
        let end = input[start..]
            .find(char::is_whitespace)
            .map_or(input.len(), |i| start + i);
        let word = &input[start..end];

        let color = if Builtin::is_builtin(word) {
            Color::Green
        } else {
            Color::Cyan
        };
        let style = Style::builder().foreground(color).bold().build();

        Cow::Owned(format!(
            "{}{}{}",
            &input[..start],
            word.style(style),
            &input[end..]
        ))
    }
}
