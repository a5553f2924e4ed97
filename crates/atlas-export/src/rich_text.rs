use std::fmt;

/// One piece of inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    LineBreak,
}

/// Paragraph content with the two inline productions the layout engine
/// understands: bold spans and forced line breaks.
///
/// Text goes in through [`RichText::text`] and [`RichText::bold`] only, so
/// session content can never open a markup production by accident.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    inlines: Vec<Inline>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.inlines.push(Inline::Text(text));
        }
        self
    }

    pub fn bold(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.inlines.push(Inline::Bold(text));
        }
        self
    }

    pub fn line_break(mut self) -> Self {
        self.inlines.push(Inline::LineBreak);
        self
    }

    pub fn inlines(&self) -> &[Inline] {
        &self.inlines
    }

    pub fn is_empty(&self) -> bool {
        self.inlines.is_empty()
    }

    /// Visible text with markup removed; line breaks become `\n`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for inline in &self.inlines {
            match inline {
                Inline::Text(text) | Inline::Bold(text) => out.push_str(text),
                Inline::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

/// Markup form: `**bold**` and `<br>`. Literal `*`, `<` and `\` are
/// backslash-escaped.
impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inline in &self.inlines {
            match inline {
                Inline::Text(text) => write_escaped(f, text)?,
                Inline::Bold(text) => {
                    f.write_str("**")?;
                    write_escaped(f, text)?;
                    f.write_str("**")?;
                }
                Inline::LineBreak => f.write_str("<br>")?,
            }
        }
        Ok(())
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for ch in text.chars() {
        if matches!(ch, '*' | '<' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{ch}")?;
    }
    Ok(())
}
