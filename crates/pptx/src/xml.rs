//! OOXML part templates and shape builders.
//!
//! Every part is assembled from fixed templates so that identical input
//! produces identical bytes. Text content is escaped with `quick-xml`
//! before interpolation.

use crate::theme::{emu, SLIDE_HEIGHT_EMU, SLIDE_WIDTH_EMU};
use std::fmt::Write;

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\r\n";

const NS_MAIN: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_RELS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Escape text for XML content.
pub(crate) fn escape(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    fn attr(self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// A positioned text box: geometry in inches, size in points.
#[derive(Debug, Clone)]
pub(crate) struct TextBox<'a> {
    pub id: u32,
    pub name: &'a str,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub text: &'a str,
    pub size_pt: u32,
    pub bold: bool,
    pub color: &'a str,
    pub align: Align,
    /// Anchor text to the vertical middle of the box.
    pub middle: bool,
}

/// Build a `p:sp` text shape.
pub(crate) fn text_shape(opts: &TextBox<'_>) -> String {
    let body_pr = if opts.middle {
        "<a:bodyPr wrap=\"square\" anchor=\"ctr\"/>"
    } else {
        "<a:bodyPr wrap=\"square\"/>"
    };
    let bold = if opts.bold { " b=\"1\"" } else { "" };
    format!(
        "<p:sp>\
         <p:nvSpPr><p:cNvPr id=\"{id}\" name=\"{name}\"/><p:cNvSpPr txBox=\"1\"/><p:nvPr/></p:nvSpPr>\
         <p:spPr>\
         <a:xfrm><a:off x=\"{x}\" y=\"{y}\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>\
         </p:spPr>\
         <p:txBody>\
         {body_pr}\
         <a:lstStyle/>\
         <a:p><a:pPr algn=\"{algn}\"/>\
         <a:r><a:rPr lang=\"en-US\" sz=\"{sz}\"{bold} dirty=\"0\">\
         <a:solidFill><a:srgbClr val=\"{color}\"/></a:solidFill>\
         </a:rPr><a:t>{text}</a:t></a:r>\
         </a:p>\
         </p:txBody>\
         </p:sp>",
        id = opts.id,
        name = escape(opts.name),
        x = emu(opts.x),
        y = emu(opts.y),
        cx = emu(opts.w),
        cy = emu(opts.h),
        algn = opts.align.attr(),
        sz = opts.size_pt * 100,
        color = opts.color,
        text = escape(opts.text),
    )
}

/// Build a solid-filled rectangle shape (the content title bar).
pub(crate) fn filled_rect(id: u32, name: &str, x: f64, y: f64, w: f64, h: f64, fill: &str) -> String {
    format!(
        "<p:sp>\
         <p:nvSpPr><p:cNvPr id=\"{id}\" name=\"{name}\"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>\
         <p:spPr>\
         <a:xfrm><a:off x=\"{x}\" y=\"{y}\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>\
         <a:solidFill><a:srgbClr val=\"{fill}\"/></a:solidFill>\
         <a:ln><a:noFill/></a:ln>\
         </p:spPr>\
         <p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>\
         </p:sp>",
        name = escape(name),
        x = emu(x),
        y = emu(y),
        cx = emu(w),
        cy = emu(h),
    )
}

/// Build a full slide part from an optional full-bleed background color
/// and a list of shape fragments.
pub(crate) fn slide(background: Option<&str>, shapes: &[String]) -> String {
    let bg = match background {
        Some(color) => format!(
            "<p:bg><p:bgPr><a:solidFill><a:srgbClr val=\"{color}\"/></a:solidFill>\
             <a:effectLst/></p:bgPr></p:bg>"
        ),
        None => String::new(),
    };
    let mut body = String::new();
    for shape in shapes {
        let _ = write!(body, "{shape}");
    }
    format!(
        "{XML_DECL}<p:sld xmlns:a=\"{NS_DRAWING}\" xmlns:r=\"{NS_RELS}\" xmlns:p=\"{NS_MAIN}\">\
         <p:cSld>{bg}<p:spTree>\
         <p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
         <p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/>\
         <a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>\
         {body}\
         </p:spTree></p:cSld>\
         <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
         </p:sld>"
    )
}

/// `[Content_Types].xml` with one override per slide.
pub(crate) fn content_types(slide_count: usize) -> String {
    let mut overrides = String::new();
    for i in 1..=slide_count {
        let _ = write!(
            overrides,
            "<Override PartName=\"/ppt/slides/slide{i}.xml\" \
             ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>"
        );
    }
    format!(
        "{XML_DECL}<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
         <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
         <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
         <Override PartName=\"/ppt/presentation.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml\"/>\
         <Override PartName=\"/ppt/slideMasters/slideMaster1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml\"/>\
         <Override PartName=\"/ppt/slideLayouts/slideLayout1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml\"/>\
         <Override PartName=\"/ppt/theme/theme1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.theme+xml\"/>\
         <Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>\
         <Override PartName=\"/docProps/app.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.extended-properties+xml\"/>\
         {overrides}\
         </Types>"
    )
}

/// Package-level relationships.
pub(crate) fn root_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
         <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"ppt/presentation.xml\"/>\
         <Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties\" Target=\"docProps/core.xml\"/>\
         <Relationship Id=\"rId3\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties\" Target=\"docProps/app.xml\"/>\
         </Relationships>"
    )
}

/// `docProps/core.xml`. Carries no timestamps so output stays
/// byte-for-byte reproducible.
pub(crate) fn core_props(title: &str) -> String {
    format!(
        "{XML_DECL}<cp:coreProperties \
         xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\
         <dc:title>{}</dc:title>\
         <dc:subject>AI Generated Presentation</dc:subject>\
         <dc:creator>AI PowerPoint Generator</dc:creator>\
         </cp:coreProperties>",
        escape(title)
    )
}

/// `docProps/app.xml`.
pub(crate) fn app_props(slide_count: usize) -> String {
    format!(
        "{XML_DECL}<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\">\
         <Application>deck-pptx</Application>\
         <Company>AI PPT Generator</Company>\
         <Slides>{slide_count}</Slides>\
         </Properties>"
    )
}

/// `ppt/presentation.xml` listing the master and every slide in order.
pub(crate) fn presentation(slide_count: usize) -> String {
    let mut slide_ids = String::new();
    for i in 0..slide_count {
        // Slide ids start at 256 by convention; rId1 is the master.
        let _ = write!(
            slide_ids,
            "<p:sldId id=\"{}\" r:id=\"rId{}\"/>",
            256 + i,
            i + 2
        );
    }
    format!(
        "{XML_DECL}<p:presentation xmlns:a=\"{NS_DRAWING}\" xmlns:r=\"{NS_RELS}\" xmlns:p=\"{NS_MAIN}\">\
         <p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>\
         <p:sldIdLst>{slide_ids}</p:sldIdLst>\
         <p:sldSz cx=\"{SLIDE_WIDTH_EMU}\" cy=\"{SLIDE_HEIGHT_EMU}\" type=\"screen4x3\"/>\
         <p:notesSz cx=\"{SLIDE_HEIGHT_EMU}\" cy=\"{SLIDE_WIDTH_EMU}\"/>\
         </p:presentation>"
    )
}

/// `ppt/_rels/presentation.xml.rels`.
pub(crate) fn presentation_rels(slide_count: usize) -> String {
    let mut rels = String::from(
        "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster\" Target=\"slideMasters/slideMaster1.xml\"/>",
    );
    for i in 1..=slide_count {
        let _ = write!(
            rels,
            "<Relationship Id=\"rId{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide\" Target=\"slides/slide{i}.xml\"/>",
            i + 1
        );
    }
    format!(
        "{XML_DECL}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">{rels}</Relationships>"
    )
}

/// Minimal slide master: empty shape tree, standard color map.
pub(crate) fn slide_master() -> String {
    format!(
        "{XML_DECL}<p:sldMaster xmlns:a=\"{NS_DRAWING}\" xmlns:r=\"{NS_RELS}\" xmlns:p=\"{NS_MAIN}\">\
         <p:cSld><p:spTree>\
         <p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
         <p:grpSpPr/>\
         </p:spTree></p:cSld>\
         <p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>\
         <p:sldLayoutIdLst><p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/></p:sldLayoutIdLst>\
         </p:sldMaster>"
    )
}

pub(crate) fn slide_master_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
         <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout\" Target=\"../slideLayouts/slideLayout1.xml\"/>\
         <Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme\" Target=\"../theme/theme1.xml\"/>\
         </Relationships>"
    )
}

/// Blank slide layout; every deck slide draws its own shapes.
pub(crate) fn slide_layout() -> String {
    format!(
        "{XML_DECL}<p:sldLayout xmlns:a=\"{NS_DRAWING}\" xmlns:r=\"{NS_RELS}\" xmlns:p=\"{NS_MAIN}\" type=\"blank\" preserve=\"1\">\
         <p:cSld name=\"Blank\"><p:spTree>\
         <p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
         <p:grpSpPr/>\
         </p:spTree></p:cSld>\
         <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
         </p:sldLayout>"
    )
}

pub(crate) fn slide_layout_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
         <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster\" Target=\"../slideMasters/slideMaster1.xml\"/>\
         </Relationships>"
    )
}

/// Per-slide relationships: every slide uses the single blank layout.
pub(crate) fn slide_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
         <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout\" Target=\"../slideLayouts/slideLayout1.xml\"/>\
         </Relationships>"
    )
}

/// Minimal Office theme with the standard scheme structure.
pub(crate) fn theme() -> String {
    format!(
        "{XML_DECL}<a:theme xmlns:a=\"{NS_DRAWING}\" name=\"Deck\">\
         <a:themeElements>\
         <a:clrScheme name=\"Deck\">\
         <a:dk1><a:sysClr val=\"windowText\" lastClr=\"000000\"/></a:dk1>\
         <a:lt1><a:sysClr val=\"window\" lastClr=\"FFFFFF\"/></a:lt1>\
         <a:dk2><a:srgbClr val=\"1F4788\"/></a:dk2>\
         <a:lt2><a:srgbClr val=\"E0E0E0\"/></a:lt2>\
         <a:accent1><a:srgbClr val=\"1F4788\"/></a:accent1>\
         <a:accent2><a:srgbClr val=\"2E5090\"/></a:accent2>\
         <a:accent3><a:srgbClr val=\"A5A5A5\"/></a:accent3>\
         <a:accent4><a:srgbClr val=\"FFC000\"/></a:accent4>\
         <a:accent5><a:srgbClr val=\"5B9BD5\"/></a:accent5>\
         <a:accent6><a:srgbClr val=\"70AD47\"/></a:accent6>\
         <a:hlink><a:srgbClr val=\"0563C1\"/></a:hlink>\
         <a:folHlink><a:srgbClr val=\"954F72\"/></a:folHlink>\
         </a:clrScheme>\
         <a:fontScheme name=\"Deck\">\
         <a:majorFont><a:latin typeface=\"Calibri Light\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:majorFont>\
         <a:minorFont><a:latin typeface=\"Calibri\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:minorFont>\
         </a:fontScheme>\
         <a:fmtScheme name=\"Deck\">\
         <a:fillStyleLst>\
         <a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
         <a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
         <a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
         </a:fillStyleLst>\
         <a:lnStyleLst>\
         <a:ln w=\"6350\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>\
         <a:ln w=\"12700\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>\
         <a:ln w=\"19050\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>\
         </a:lnStyleLst>\
         <a:effectStyleLst>\
         <a:effectStyle><a:effectLst/></a:effectStyle>\
         <a:effectStyle><a:effectLst/></a:effectStyle>\
         <a:effectStyle><a:effectLst/></a:effectStyle>\
         </a:effectStyleLst>\
         <a:bgFillStyleLst>\
         <a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
         <a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
         <a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
         </a:bgFillStyleLst>\
         </a:fmtScheme>\
         </a:themeElements>\
         </a:theme>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_handles_markup_characters() {
        assert_eq!(escape("Q&A <fast>"), "Q&amp;A &lt;fast&gt;");
    }

    #[test]
    fn test_content_types_lists_every_slide() {
        let xml = content_types(3);
        assert!(xml.contains("/ppt/slides/slide1.xml"));
        assert!(xml.contains("/ppt/slides/slide3.xml"));
        assert!(!xml.contains("/ppt/slides/slide4.xml"));
    }

    #[test]
    fn test_presentation_rels_reserve_rid1_for_master() {
        let xml = presentation_rels(2);
        assert!(xml.contains("Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster\""));
        assert!(xml.contains("Id=\"rId2\""));
        assert!(xml.contains("Target=\"slides/slide2.xml\""));
    }

    #[test]
    fn test_text_shape_places_geometry_in_emu() {
        let shape = text_shape(&TextBox {
            id: 2,
            name: "Title",
            x: 0.5,
            y: 2.5,
            w: 9.0,
            h: 1.5,
            text: "Hello",
            size_pt: 44,
            bold: true,
            color: "FFFFFF",
            align: Align::Center,
            middle: true,
        });
        assert!(shape.contains("<a:off x=\"457200\" y=\"2286000\"/>"));
        assert!(shape.contains("<a:ext cx=\"8229600\" cy=\"1371600\"/>"));
        assert!(shape.contains("sz=\"4400\""));
        assert!(shape.contains("b=\"1\""));
        assert!(shape.contains("algn=\"ctr\""));
        assert!(shape.contains("anchor=\"ctr\""));
        assert!(shape.contains("<a:t>Hello</a:t>"));
    }

    #[test]
    fn test_slide_background_is_optional() {
        let with_bg = slide(Some("1F4788"), &[]);
        assert!(with_bg.contains("<p:bg>"));
        assert!(with_bg.contains("srgbClr val=\"1F4788\""));
        let without = slide(None, &[]);
        assert!(!without.contains("<p:bg>"));
    }
}
