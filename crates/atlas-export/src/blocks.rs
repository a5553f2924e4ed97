use crate::rich_text::RichText;

/// Bullet drawn before list items in plain-text output.
pub const BULLET: &str = "\u{2022}";

/// One renderable unit of a report, in top-to-bottom order.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutBlock {
    Heading { text: String, level: u8 },
    Paragraph(RichText),
    BulletList(Vec<RichText>),
    /// Vertical whitespace in points.
    Spacer(f32),
    Separator,
}

/// The assembled block sequence for one report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDocument {
    blocks: Vec<LayoutBlock>,
}

/// A heading and the blocks beneath it, up to the next heading or
/// separator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionView<'a> {
    pub heading: &'a str,
    pub body: &'a [LayoutBlock],
}

impl SectionView<'_> {
    /// Visible body text, one entry per paragraph or bullet item.
    pub fn body_text(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for block in self.body {
            match block {
                LayoutBlock::Paragraph(text) => lines.push(text.plain_text()),
                LayoutBlock::BulletList(items) => {
                    lines.extend(items.iter().map(RichText::plain_text))
                }
                LayoutBlock::Heading { text, .. } => lines.push(text.clone()),
                LayoutBlock::Spacer(_) | LayoutBlock::Separator => {}
            }
        }
        lines
    }
}

impl ReportDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: LayoutBlock) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[LayoutBlock] {
        &self.blocks
    }

    pub fn headings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                LayoutBlock::Heading { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn separator_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| matches!(block, LayoutBlock::Separator))
            .count()
    }

    /// Split the document at level-1 headings. Separators end a section
    /// and belong to none.
    pub fn sections(&self) -> Vec<SectionView<'_>> {
        let mut sections = Vec::new();
        let mut i = 0;
        while i < self.blocks.len() {
            let LayoutBlock::Heading { text, level: 1 } = &self.blocks[i] else {
                i += 1;
                continue;
            };
            let start = i + 1;
            let end = self.blocks[start..]
                .iter()
                .position(|block| {
                    matches!(
                        block,
                        LayoutBlock::Separator | LayoutBlock::Heading { level: 1, .. }
                    )
                })
                .map_or(self.blocks.len(), |offset| start + offset);
            sections.push(SectionView {
                heading: text,
                body: &self.blocks[start..end],
            });
            i = end;
        }
        sections
    }

    /// Visible text of the whole document, one line per paragraph line or
    /// bullet item. Separators render as `separator`.
    pub fn plain_text(&self, separator: &str) -> String {
        let mut lines: Vec<String> = Vec::new();
        for block in &self.blocks {
            match block {
                LayoutBlock::Heading { text, .. } => lines.push(text.clone()),
                LayoutBlock::Paragraph(text) => {
                    lines.extend(text.plain_text().split('\n').map(str::to_string))
                }
                LayoutBlock::BulletList(items) => lines.extend(
                    items
                        .iter()
                        .map(|item| format!("{BULLET} {}", item.plain_text())),
                ),
                LayoutBlock::Spacer(_) => {}
                LayoutBlock::Separator => lines.push(separator.to_string()),
            }
        }
        lines.join("\n")
    }
}
