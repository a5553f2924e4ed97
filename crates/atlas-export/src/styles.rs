use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::metrics::text_width;

/// Millimetres per PDF point (1/72 inch).
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// A separator rule may wrap onto at most this many lines.
pub const MAX_SEPARATOR_LINES: f32 = 4.0;

/// Builtin Type1 face used for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFace {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
}

/// Typography for one kind of block. All sizes are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Face for unmarked text. Bold spans always use [`FontFace::Bold`].
    pub face: FontFace,
    pub font_size: f32,
    /// Baseline-to-baseline distance.
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub alignment: Alignment,
}

/// Page geometry. Page size is in millimetres, margins in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSetup {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageSetup {
    pub fn width_pt(&self) -> f32 {
        self.width_mm / MM_PER_PT
    }

    pub fn height_pt(&self) -> f32 {
        self.height_mm / MM_PER_PT
    }

    pub fn content_width(&self) -> f32 {
        self.width_pt() - self.margin_left - self.margin_right
    }

    pub fn content_bottom(&self) -> f32 {
        self.height_pt() - self.margin_bottom
    }
}

impl Default for PageSetup {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_left: 40.0,
            margin_right: 40.0,
            margin_top: 50.0,
            margin_bottom: 50.0,
        }
    }
}

/// Styling configuration for a consulting report. Built per render and
/// passed by reference; there is no shared style registry.
///
/// Deserializing merges the given fields over [`ReportStyles::default`],
/// down to single fields of the paragraph styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StyleOverrides")]
pub struct ReportStyles {
    /// Document title embedded in the PDF metadata.
    pub title: String,

    pub page: PageSetup,

    /// Section headings.
    pub heading: ParagraphStyle,

    /// Paragraphs, labeled lines, and bullet items.
    pub body: ParagraphStyle,

    /// The dashed rule between sections.
    pub separator: ParagraphStyle,

    /// Left indent of bullet item text.
    pub bullet_indent: f32,

    /// Number of dash characters in a separator.
    pub separator_dashes: usize,
}

impl ReportStyles {
    /// Parse styles from JSON. Omitted fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject geometry that leaves no room to place a line.
    pub fn validate(&self) -> Result<(), ExportError> {
        let page = &self.page;
        if page.content_width() - self.bullet_indent <= 0.0 {
            return Err(ExportError::Layout(format!(
                "margins leave no horizontal room ({:.1}pt content width, {:.1}pt bullet indent)",
                page.content_width(),
                self.bullet_indent
            )));
        }

        let dash_width = text_width("-", self.separator.face, self.separator.font_size);
        let rule_width = self.separator_dashes as f32 * dash_width;
        if rule_width > page.content_width() * MAX_SEPARATOR_LINES {
            return Err(ExportError::Layout(format!(
                "separator of {} dashes does not fit in {MAX_SEPARATOR_LINES} lines",
                self.separator_dashes
            )));
        }

        let content_height = page.content_bottom() - page.margin_top;
        for (name, style) in [
            ("heading", &self.heading),
            ("body", &self.body),
            ("separator", &self.separator),
        ] {
            if style.font_size <= 0.0 || style.leading <= 0.0 {
                return Err(ExportError::Layout(format!(
                    "{name} style needs a positive font size and leading"
                )));
            }
            if style.leading > content_height {
                return Err(ExportError::Layout(format!(
                    "{name} leading {:.1}pt exceeds the {content_height:.1}pt content height",
                    style.leading
                )));
            }
        }
        Ok(())
    }
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            title: "ATLAS Consulting Report".to_string(),
            page: PageSetup::default(),
            heading: ParagraphStyle {
                face: FontFace::Bold,
                font_size: 14.0,
                leading: 18.0,
                space_before: 20.0,
                space_after: 12.0,
                alignment: Alignment::Left,
            },
            body: ParagraphStyle {
                face: FontFace::Regular,
                font_size: 10.5,
                leading: 15.0,
                space_before: 0.0,
                space_after: 8.0,
                alignment: Alignment::Left,
            },
            separator: ParagraphStyle {
                face: FontFace::Regular,
                font_size: 10.0,
                leading: 12.0,
                space_before: 18.0,
                space_after: 18.0,
                alignment: Alignment::Center,
            },
            bullet_indent: 20.0,
            separator_dashes: 90,
        }
    }
}

/// Partial paragraph style as read from configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ParagraphOverrides {
    face: Option<FontFace>,
    font_size: Option<f32>,
    leading: Option<f32>,
    space_before: Option<f32>,
    space_after: Option<f32>,
    alignment: Option<Alignment>,
}

impl ParagraphOverrides {
    fn apply(self, base: ParagraphStyle) -> ParagraphStyle {
        ParagraphStyle {
            face: self.face.unwrap_or(base.face),
            font_size: self.font_size.unwrap_or(base.font_size),
            leading: self.leading.unwrap_or(base.leading),
            space_before: self.space_before.unwrap_or(base.space_before),
            space_after: self.space_after.unwrap_or(base.space_after),
            alignment: self.alignment.unwrap_or(base.alignment),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleOverrides {
    title: Option<String>,
    page: Option<PageSetup>,
    heading: ParagraphOverrides,
    body: ParagraphOverrides,
    separator: ParagraphOverrides,
    bullet_indent: Option<f32>,
    separator_dashes: Option<usize>,
}

impl From<StyleOverrides> for ReportStyles {
    fn from(overrides: StyleOverrides) -> Self {
        let base = ReportStyles::default();
        Self {
            title: overrides.title.unwrap_or(base.title),
            page: overrides.page.unwrap_or(base.page),
            heading: overrides.heading.apply(base.heading),
            body: overrides.body.apply(base.body),
            separator: overrides.separator.apply(base.separator),
            bullet_indent: overrides.bullet_indent.unwrap_or(base.bullet_indent),
            separator_dashes: overrides.separator_dashes.unwrap_or(base.separator_dashes),
        }
    }
}
