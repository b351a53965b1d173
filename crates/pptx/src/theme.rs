//! Theme colors and slide geometry constants.
//!
//! All placement values are the fixed rules of the three layout
//! templates, expressed in inches and converted to EMU at build time.
//! Identical input must place every element at identical coordinates.

/// English Metric Units per inch, the native PPTX coordinate unit.
pub const EMU_PER_INCH: i64 = 914_400;

/// Slide width: 10 inches (4:3).
pub const SLIDE_WIDTH_EMU: i64 = 10 * EMU_PER_INCH;

/// Slide height: 7.5 inches (4:3).
pub const SLIDE_HEIGHT_EMU: i64 = 6_858_000;

/// Convert inches to EMU.
pub fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH as f64).round() as i64
}

/// Primary theme color: title-slide background and content title bar.
pub const PRIMARY_COLOR: &str = "1F4788";

/// Secondary theme color: section-divider background.
pub const SECONDARY_COLOR: &str = "2E5090";

/// White, used for headings on tinted backgrounds.
pub const WHITE: &str = "FFFFFF";

/// Subtitle text on the title slide.
pub const SUBTITLE_COLOR: &str = "E0E0E0";

/// Bullet body text.
pub const BODY_COLOR: &str = "333333";

/// Page-number text.
pub const PAGE_NUMBER_COLOR: &str = "666666";

// Centered heading box shared by the title and section layouts.
pub const HEADING_X: f64 = 0.5;
pub const HEADING_Y: f64 = 2.5;
pub const HEADING_W: f64 = 9.0;
pub const HEADING_H: f64 = 1.5;
pub const TITLE_HEADING_PT: u32 = 44;
pub const SECTION_HEADING_PT: u32 = 40;

// Optional subtitle below the title-slide heading.
pub const SUBTITLE_X: f64 = 0.5;
pub const SUBTITLE_Y: f64 = 4.2;
pub const SUBTITLE_W: f64 = 9.0;
pub const SUBTITLE_H: f64 = 0.5;
pub const SUBTITLE_PT: u32 = 20;

// Title bar across the top edge of content slides.
pub const BAR_X: f64 = 0.0;
pub const BAR_Y: f64 = 0.0;
pub const BAR_W: f64 = 10.0;
pub const BAR_H: f64 = 1.0;
pub const CONTENT_TITLE_X: f64 = 0.5;
pub const CONTENT_TITLE_Y: f64 = 0.25;
pub const CONTENT_TITLE_W: f64 = 9.0;
pub const CONTENT_TITLE_H: f64 = 0.5;
pub const CONTENT_TITLE_PT: u32 = 28;

// Numbered bullets, stacked with a fixed uniform step per index.
pub const BULLET_START_Y: f64 = 1.8;
pub const BULLET_STEP_Y: f64 = 0.7;
pub const MARKER_X: f64 = 0.75;
pub const MARKER_W: f64 = 0.4;
pub const MARKER_H: f64 = 0.4;
pub const MARKER_PT: u32 = 16;
pub const BULLET_TEXT_X: f64 = 1.3;
pub const BULLET_TEXT_W: f64 = 8.0;
pub const BULLET_TEXT_H: f64 = 0.6;
pub const BULLET_TEXT_PT: u32 = 18;

// Page number at the bottom-right corner of content slides.
pub const PAGE_NUMBER_X: f64 = 9.2;
pub const PAGE_NUMBER_Y: f64 = 7.2;
pub const PAGE_NUMBER_W: f64 = 0.5;
pub const PAGE_NUMBER_H: f64 = 0.3;
pub const PAGE_NUMBER_PT: u32 = 12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emu_conversion() {
        assert_eq!(emu(1.0), 914_400);
        assert_eq!(emu(0.5), 457_200);
        assert_eq!(emu(0.0), 0);
        assert_eq!(emu(10.0), SLIDE_WIDTH_EMU);
        assert_eq!(emu(7.5), SLIDE_HEIGHT_EMU);
    }

    #[test]
    fn test_bullet_rows_fit_uniform_step() {
        // Five bullets span 1.8in to 4.6in, well inside the 7.5in page.
        let last = BULLET_START_Y + BULLET_STEP_Y * 4.0;
        assert!(last + BULLET_TEXT_H < 7.5);
    }
}
