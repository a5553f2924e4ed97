//! Flow layer between report blocks and PDF pages.
//!
//! Lines are wrapped greedily against the content width, then stacked down
//! the page by leading and block spacing. A line that would cross the bottom
//! margin starts a new page; space before a block is dropped at the top of
//! a page. Coordinates are points measured from the top-left corner.

use tracing::debug;

use crate::blocks::{BULLET, LayoutBlock, ReportDocument};
use crate::error::ExportError;
use crate::metrics::{char_width, encode_builtin, push_encoded, text_width};
use crate::rich_text::{Inline, RichText};
use crate::styles::{Alignment, FontFace, ParagraphStyle, ReportStyles};

/// More pages than this is treated as runaway content.
pub const MAX_PAGES: usize = 1000;

/// Slack for float comparisons against line and page limits.
const EPSILON: f32 = 0.01;

/// A run of text at a fixed position on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRun {
    /// Builtin-font text, printable ASCII only.
    pub text: String,
    pub face: FontFace,
    pub font_size: f32,
    /// Distance from the left page edge.
    pub x: f32,
    /// Distance from the top page edge to the baseline.
    pub baseline: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub runs: Vec<PlacedRun>,
}

impl PageLayout {
    /// Page text in drawing order, one line per baseline.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut current: Option<f32> = None;
        for run in &self.runs {
            if let Some(baseline) = current
                && (baseline - run.baseline).abs() > EPSILON
            {
                out.push('\n');
            }
            current = Some(run.baseline);
            out.push_str(&run.text);
        }
        out
    }
}

/// Flow a document onto pages.
pub fn layout_document(
    doc: &ReportDocument,
    styles: &ReportStyles,
) -> Result<Vec<PageLayout>, ExportError> {
    styles.validate()?;

    let mut flow = Flow::new(styles);
    let content_width = styles.page.content_width();

    for block in doc.blocks() {
        match block {
            LayoutBlock::Heading { text, .. } => {
                let lines = wrap(&RichText::plain(text.as_str()), &styles.heading, content_width)?;
                flow.paragraph(&lines, &styles.heading, 0.0, false)?;
            }
            LayoutBlock::Paragraph(text) => {
                let lines = wrap(text, &styles.body, content_width)?;
                flow.paragraph(&lines, &styles.body, 0.0, false)?;
            }
            LayoutBlock::BulletList(items) => {
                let indent = styles.bullet_indent;
                for item in items {
                    let lines = wrap(item, &styles.body, content_width - indent)?;
                    flow.paragraph(&lines, &styles.body, indent, true)?;
                }
            }
            LayoutBlock::Spacer(points) => flow.gap(*points),
            LayoutBlock::Separator => {
                let rule = RichText::plain("-".repeat(styles.separator_dashes));
                let lines = wrap(&rule, &styles.separator, content_width)?;
                flow.paragraph(&lines, &styles.separator, 0.0, false)?;
            }
        }
    }

    debug!(pages = flow.pages.len(), "laid out report");
    Ok(flow.pages)
}

#[derive(Debug)]
struct Run {
    text: String,
    face: FontFace,
}

#[derive(Debug, Default)]
struct Line {
    runs: Vec<Run>,
    width: f32,
}

impl Line {
    fn push_str(&mut self, text: &str, face: FontFace, width: f32) {
        match self.runs.last_mut() {
            Some(last) if last.face == face => last.text.push_str(text),
            _ => self.runs.push(Run {
                text: text.to_string(),
                face,
            }),
        }
        self.width += width;
    }

    fn last_face(&self) -> Option<FontFace> {
        self.runs.last().map(|run| run.face)
    }
}

/// Consecutive non-space characters, possibly spanning a face change.
#[derive(Debug)]
struct Word {
    runs: Vec<Run>,
    space_before: bool,
}

impl Word {
    fn width(&self, size: f32) -> f32 {
        self.runs
            .iter()
            .map(|run| text_width(&run.text, run.face, size))
            .sum()
    }
}

#[derive(Debug)]
enum Token {
    Word(Word),
    Break,
}

fn tokenize(text: &RichText, base: FontFace) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut in_word = false;
    let mut pending_space = false;

    for inline in text.inlines() {
        let (content, face) = match inline {
            Inline::Text(content) => (content, base),
            Inline::Bold(content) => (content, FontFace::Bold),
            Inline::LineBreak => {
                tokens.push(Token::Break);
                in_word = false;
                pending_space = false;
                continue;
            }
        };

        for ch in content.chars() {
            if ch.is_whitespace() {
                in_word = false;
                pending_space = true;
                continue;
            }
            if !in_word {
                tokens.push(Token::Word(Word {
                    runs: Vec::new(),
                    space_before: pending_space,
                }));
                in_word = true;
                pending_space = false;
            }
            let Some(Token::Word(word)) = tokens.last_mut() else {
                continue;
            };
            match word.runs.last_mut() {
                Some(run) if run.face == face => push_encoded(&mut run.text, ch),
                _ => {
                    let mut run_text = String::new();
                    push_encoded(&mut run_text, ch);
                    word.runs.push(Run {
                        text: run_text,
                        face,
                    });
                }
            }
        }
    }
    tokens
}

fn wrap(text: &RichText, style: &ParagraphStyle, width: f32) -> Result<Vec<Line>, ExportError> {
    let size = style.font_size;
    let mut lines = Vec::new();
    let mut line = Line::default();

    for token in tokenize(text, style.face) {
        let word = match token {
            Token::Break => {
                lines.push(std::mem::take(&mut line));
                continue;
            }
            Token::Word(word) => word,
        };

        let word_width = word.width(size);
        let space_face = line.last_face().filter(|_| word.space_before);
        let gap = space_face.map_or(0.0, |face| text_width(" ", face, size));

        if line.width + gap + word_width <= width + EPSILON {
            if let Some(face) = space_face {
                line.push_str(" ", face, gap);
            }
            append_word(&mut line, &word, size);
            continue;
        }

        if !line.runs.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if word_width <= width + EPSILON {
            append_word(&mut line, &word, size);
        } else {
            split_word(&mut lines, &mut line, &word, size, width)?;
        }
    }

    if !line.runs.is_empty() {
        lines.push(line);
    }
    Ok(lines)
}

fn append_word(line: &mut Line, word: &Word, size: f32) {
    for run in &word.runs {
        line.push_str(&run.text, run.face, text_width(&run.text, run.face, size));
    }
}

/// Break a word wider than the line at character boundaries.
fn split_word(
    lines: &mut Vec<Line>,
    line: &mut Line,
    word: &Word,
    size: f32,
    width: f32,
) -> Result<(), ExportError> {
    let mut buf = [0u8; 4];
    for run in &word.runs {
        for ch in run.text.chars() {
            let ch_width = f32::from(char_width(ch, run.face)) * size / 1000.0;
            if line.width + ch_width > width + EPSILON {
                if line.runs.is_empty() {
                    return Err(ExportError::Layout(format!(
                        "character {ch:?} does not fit a {width:.1}pt line"
                    )));
                }
                lines.push(std::mem::take(line));
            }
            line.push_str(ch.encode_utf8(&mut buf), run.face, ch_width);
        }
    }
    Ok(())
}

struct Flow<'a> {
    styles: &'a ReportStyles,
    pages: Vec<PageLayout>,
    /// Top of the next line box.
    y: f32,
    at_page_top: bool,
}

impl<'a> Flow<'a> {
    fn new(styles: &'a ReportStyles) -> Self {
        Self {
            styles,
            pages: vec![PageLayout::default()],
            y: styles.page.margin_top,
            at_page_top: true,
        }
    }

    fn new_page(&mut self) -> Result<(), ExportError> {
        if self.pages.len() >= MAX_PAGES {
            return Err(ExportError::Layout(format!(
                "content needs more than {MAX_PAGES} pages"
            )));
        }
        self.pages.push(PageLayout::default());
        self.y = self.styles.page.margin_top;
        self.at_page_top = true;
        Ok(())
    }

    fn gap(&mut self, points: f32) {
        if !self.at_page_top {
            self.y += points;
        }
    }

    fn paragraph(
        &mut self,
        lines: &[Line],
        style: &ParagraphStyle,
        indent: f32,
        bulleted: bool,
    ) -> Result<(), ExportError> {
        let styles = self.styles;
        let page = &styles.page;
        let left = page.margin_left + indent;
        let width = page.content_width() - indent;

        self.gap(style.space_before);

        for (i, line) in lines.iter().enumerate() {
            if self.y + style.leading > page.content_bottom() + EPSILON {
                self.new_page()?;
            }
            let baseline = self.y + style.font_size;
            let Some(current) = self.pages.last_mut() else {
                return Err(ExportError::Layout("no page to place text on".to_string()));
            };

            if bulleted && i == 0 {
                let bullet = encode_builtin(BULLET);
                let bullet_width = text_width(&bullet, style.face, style.font_size);
                current.runs.push(PlacedRun {
                    text: bullet,
                    face: style.face,
                    font_size: style.font_size,
                    x: page.margin_left + (indent - bullet_width) / 2.0,
                    baseline,
                });
            }

            let mut x = match style.alignment {
                Alignment::Left => left,
                Alignment::Center => left + (width - line.width) / 2.0,
            };
            for run in &line.runs {
                current.runs.push(PlacedRun {
                    text: run.text.clone(),
                    face: run.face,
                    font_size: style.font_size,
                    x,
                    baseline,
                });
                x += text_width(&run.text, run.face, style.font_size);
            }

            self.y += style.leading;
            self.at_page_top = false;
        }

        self.y += style.space_after;
        Ok(())
    }
}
