//! Deterministic PPTX assembly.
//!
//! One visual page per slide, in slide order. Page numbers are the
//! 1-based global slide index and never depend on content; bullet markers
//! restart at 1 on every slide. Input is assumed to have passed schema
//! validation (non-empty slide list, first slide `title`-layout).

use crate::theme::*;
use crate::xml::{self, Align, TextBox};
use deck_core::{Error, Presentation, Result, Slide, SlideLayout};
use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Regex matching every character replaced by `_` in deck filenames.
static FILENAME_SANITIZE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// Renderer for PPTX decks. Stateless; safe to share and to invoke
/// concurrently for different presentations.
#[derive(Debug, Default)]
pub struct PptxRenderer;

impl PptxRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render a validated presentation to PPTX bytes.
    ///
    /// Deterministic: identical input yields byte-identical output. ZIP
    /// entries are written in a fixed order with fixed timestamps.
    pub fn render(&self, presentation: &Presentation) -> Result<Vec<u8>> {
        debug_assert!(
            !presentation.slides.is_empty(),
            "render requires a validated presentation with at least one slide"
        );

        let n = presentation.slide_count();
        let mut parts: Vec<(String, String)> = vec![
            ("[Content_Types].xml".into(), xml::content_types(n)),
            ("_rels/.rels".into(), xml::root_rels()),
            ("docProps/core.xml".into(), xml::core_props(&presentation.title)),
            ("docProps/app.xml".into(), xml::app_props(n)),
            ("ppt/presentation.xml".into(), xml::presentation(n)),
            ("ppt/_rels/presentation.xml.rels".into(), xml::presentation_rels(n)),
            ("ppt/slideMasters/slideMaster1.xml".into(), xml::slide_master()),
            (
                "ppt/slideMasters/_rels/slideMaster1.xml.rels".into(),
                xml::slide_master_rels(),
            ),
            ("ppt/slideLayouts/slideLayout1.xml".into(), xml::slide_layout()),
            (
                "ppt/slideLayouts/_rels/slideLayout1.xml.rels".into(),
                xml::slide_layout_rels(),
            ),
            ("ppt/theme/theme1.xml".into(), xml::theme()),
        ];

        for (index, slide) in presentation.slides.iter().enumerate() {
            parts.push((
                format!("ppt/slides/slide{}.xml", index + 1),
                self.slide_xml(slide, index),
            ));
            parts.push((
                format!("ppt/slides/_rels/slide{}.xml.rels", index + 1),
                xml::slide_rels(),
            ));
        }

        write_archive(&parts)
    }

    /// Render and write `<sanitized-title>.pptx` into `dir`, returning
    /// the full path of the written file.
    pub fn write_deck(&self, presentation: &Presentation, dir: &Path) -> Result<PathBuf> {
        let bytes = self.render(presentation)?;
        let path = dir.join(deck_filename(&presentation.title));
        std::fs::write(&path, bytes)?;
        log::debug!("Wrote deck to {}", path.display());
        Ok(path)
    }

    /// Build the XML for one slide, dispatching on its layout.
    fn slide_xml(&self, slide: &Slide, index: usize) -> String {
        match slide.layout {
            SlideLayout::Title => self.title_slide(slide),
            SlideLayout::Section => self.section_slide(slide),
            SlideLayout::Content => self.content_slide(slide, index),
        }
    }

    /// Title layout: primary full-bleed background, large centered
    /// heading, optional subtitle. No page number.
    fn title_slide(&self, slide: &Slide) -> String {
        let mut shapes = vec![xml::text_shape(&TextBox {
            id: 2,
            name: "Title",
            x: HEADING_X,
            y: HEADING_Y,
            w: HEADING_W,
            h: HEADING_H,
            text: &slide.title,
            size_pt: TITLE_HEADING_PT,
            bold: true,
            color: WHITE,
            align: Align::Center,
            middle: true,
        })];
        if let Some(subtitle) = slide.content.first() {
            shapes.push(xml::text_shape(&TextBox {
                id: 3,
                name: "Subtitle",
                x: SUBTITLE_X,
                y: SUBTITLE_Y,
                w: SUBTITLE_W,
                h: SUBTITLE_H,
                text: subtitle,
                size_pt: SUBTITLE_PT,
                bold: false,
                color: SUBTITLE_COLOR,
                align: Align::Center,
                middle: false,
            }));
        }
        xml::slide(Some(PRIMARY_COLOR), &shapes)
    }

    /// Section layout: secondary full-bleed background, centered heading
    /// only. No bullets, no page number.
    fn section_slide(&self, slide: &Slide) -> String {
        let shapes = vec![xml::text_shape(&TextBox {
            id: 2,
            name: "Section Title",
            x: HEADING_X,
            y: HEADING_Y,
            w: HEADING_W,
            h: HEADING_H,
            text: &slide.title,
            size_pt: SECTION_HEADING_PT,
            bold: true,
            color: WHITE,
            align: Align::Center,
            middle: true,
        })];
        xml::slide(Some(SECONDARY_COLOR), &shapes)
    }

    /// Content layout: white background, title bar, numbered bullets at a
    /// fixed vertical step, page number bottom-right.
    fn content_slide(&self, slide: &Slide, index: usize) -> String {
        let mut shapes = vec![
            xml::filled_rect(2, "Title Bar", BAR_X, BAR_Y, BAR_W, BAR_H, PRIMARY_COLOR),
            xml::text_shape(&TextBox {
                id: 3,
                name: "Title",
                x: CONTENT_TITLE_X,
                y: CONTENT_TITLE_Y,
                w: CONTENT_TITLE_W,
                h: CONTENT_TITLE_H,
                text: &slide.title,
                size_pt: CONTENT_TITLE_PT,
                bold: true,
                color: WHITE,
                align: Align::Left,
                middle: false,
            }),
        ];

        let mut id = 4;
        for (i, bullet) in slide.content.iter().enumerate() {
            let y = BULLET_START_Y + BULLET_STEP_Y * i as f64;
            let marker = (i + 1).to_string();
            shapes.push(xml::text_shape(&TextBox {
                id,
                name: "Bullet Marker",
                x: MARKER_X,
                y,
                w: MARKER_W,
                h: MARKER_H,
                text: &marker,
                size_pt: MARKER_PT,
                bold: true,
                color: PRIMARY_COLOR,
                align: Align::Center,
                middle: true,
            }));
            shapes.push(xml::text_shape(&TextBox {
                id: id + 1,
                name: "Bullet Text",
                x: BULLET_TEXT_X,
                y,
                w: BULLET_TEXT_W,
                h: BULLET_TEXT_H,
                text: bullet,
                size_pt: BULLET_TEXT_PT,
                bold: false,
                color: BODY_COLOR,
                align: Align::Left,
                middle: false,
            }));
            id += 2;
        }

        // Page number is the 1-based global slide index, independent of
        // how many bullets the slide carries.
        let page_number = (index + 1).to_string();
        shapes.push(xml::text_shape(&TextBox {
            id,
            name: "Page Number",
            x: PAGE_NUMBER_X,
            y: PAGE_NUMBER_Y,
            w: PAGE_NUMBER_W,
            h: PAGE_NUMBER_H,
            text: &page_number,
            size_pt: PAGE_NUMBER_PT,
            bold: false,
            color: PAGE_NUMBER_COLOR,
            align: Align::Right,
            middle: false,
        }));

        xml::slide(None, &shapes)
    }
}

/// Assemble the archive with fixed entry order, fixed timestamps, and
/// deflate compression.
fn write_archive(parts: &[(String, String)]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    for (name, content) in parts {
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| Error::ZipError(format!("Failed to start entry '{name}': {e}")))?;
        writer.write_all(content.as_bytes())?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| Error::ZipError(format!("Failed to finalize archive: {e}")))?;
    Ok(cursor.into_inner())
}

/// Derive the download filename: every non-alphanumeric character in the
/// title collapses to `_`, suffixed with `.pptx`.
pub fn deck_filename(title: &str) -> String {
    format!("{}.pptx", FILENAME_SANITIZE_REGEX.replace_all(title, "_"))
}
