//! Typography state for the paper surface.
//!
//! Sizing is proportional: every pixel constant on the paper is a base value
//! calibrated at `DEFAULT_FONT_SIZE`, and changing the document size scales
//! the whole table by `size / DEFAULT_FONT_SIZE`. Layout code reads the
//! scaled table instead of patching individual regions after the fact.

pub const DEFAULT_FONT_SIZE: i32 = 11;
pub const MIN_FONT_SIZE: i32 = 9;
pub const MAX_FONT_SIZE: i32 = 18;

/// Sizes offered in the size dropdown. All within the enforced bounds.
pub const SIZE_CHOICES: [i32; 7] = [9, 10, 11, 12, 14, 16, 18];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontChoice {
    Serif,
    Sans,
    Typewriter,
    Screen,
}

impl FontChoice {
    pub fn label(&self) -> &'static str {
        match self {
            FontChoice::Serif => "Serif",
            FontChoice::Sans => "Sans",
            FontChoice::Typewriter => "Typewriter",
            FontChoice::Screen => "Screen",
        }
    }

    pub const ALL: [FontChoice; 4] = [
        FontChoice::Serif,
        FontChoice::Sans,
        FontChoice::Typewriter,
        FontChoice::Screen,
    ];
}

/// Ink swatches offered in the color dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InkColor {
    Ink,
    Graphite,
    Sepia,
    Crimson,
    Navy,
    Forest,
}

impl InkColor {
    pub fn label(&self) -> &'static str {
        match self {
            InkColor::Ink => "Ink",
            InkColor::Graphite => "Graphite",
            InkColor::Sepia => "Sepia",
            InkColor::Crimson => "Crimson",
            InkColor::Navy => "Navy",
            InkColor::Forest => "Forest",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            InkColor::Ink => (0x1a, 0x1a, 0x1a),
            InkColor::Graphite => (0x55, 0x55, 0x55),
            InkColor::Sepia => (0x5b, 0x45, 0x2e),
            InkColor::Crimson => (0x8a, 0x1c, 0x21),
            InkColor::Navy => (0x1c, 0x2e, 0x6e),
            InkColor::Forest => (0x1d, 0x50, 0x2e),
        }
    }

    pub const ALL: [InkColor; 6] = [
        InkColor::Ink,
        InkColor::Graphite,
        InkColor::Sepia,
        InkColor::Crimson,
        InkColor::Navy,
        InkColor::Forest,
    ];
}

/// The current family/size/color triple. Owned by the app coordinator and
/// handed to layout whole, so apply functions are testable against any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStyle {
    pub family: FontChoice,
    pub size: i32,
    pub color: InkColor,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            family: FontChoice::Serif,
            size: DEFAULT_FONT_SIZE,
            color: InkColor::Ink,
        }
    }
}

impl DocumentStyle {
    /// Set the size, clamped to the supported bounds.
    pub fn set_size(&mut self, requested: i32) {
        self.size = requested.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// Nudge the size by one point. Returns false when already at the bound.
    pub fn bump_size(&mut self, delta: i32) -> bool {
        let next = (self.size + delta).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if next == self.size {
            return false;
        }
        self.size = next;
        true
    }

    pub fn at_min_size(&self) -> bool {
        self.size <= MIN_FONT_SIZE
    }

    pub fn at_max_size(&self) -> bool {
        self.size >= MAX_FONT_SIZE
    }

    /// Multiplier applied to the base metric table.
    pub fn scale_factor(&self) -> f64 {
        f64::from(self.size) / f64::from(DEFAULT_FONT_SIZE)
    }
}

/// Base pixel constants for every sized region of the paper, calibrated at
/// `DEFAULT_FONT_SIZE`. Relative proportions stay intact at any document
/// size because the whole table scales together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperMetrics {
    pub page_margin: i32,
    pub header_gap: i32,
    pub column_gap: i32,
    pub sidebar_width: i32,
    pub sidebar_padding: i32,
    pub sidebar_rule: i32,
    pub name_size: i32,
    pub role_size: i32,
    pub contact_size: i32,
    pub section_title_size: i32,
    pub section_gap: i32,
    pub heading_gap: i32,
    pub entry_gap: i32,
    pub company_size: i32,
    pub body_size: i32,
    pub detail_size: i32,
    pub skill_size: i32,
    pub line_height: i32,
    pub bullet_indent: i32,
    pub block_pad: i32,
}

impl PaperMetrics {
    pub const BASE: PaperMetrics = PaperMetrics {
        page_margin: 56,
        header_gap: 30,
        column_gap: 28,
        sidebar_width: 180,
        sidebar_padding: 18,
        sidebar_rule: 1,
        name_size: 24,
        role_size: 12,
        contact_size: 9,
        section_title_size: 9,
        section_gap: 40,
        heading_gap: 10,
        entry_gap: 16,
        company_size: 12,
        body_size: 11,
        detail_size: 10,
        skill_size: 10,
        line_height: 17,
        bullet_indent: 14,
        block_pad: 8,
    };

    /// Multiply every constant by `factor`, rounding to whole pixels and
    /// keeping hairlines at least one pixel wide.
    pub fn scaled(&self, factor: f64) -> PaperMetrics {
        let s = |v: i32| -> i32 { ((f64::from(v) * factor).round() as i32).max(1) };
        PaperMetrics {
            page_margin: s(self.page_margin),
            header_gap: s(self.header_gap),
            column_gap: s(self.column_gap),
            sidebar_width: s(self.sidebar_width),
            sidebar_padding: s(self.sidebar_padding),
            sidebar_rule: s(self.sidebar_rule),
            name_size: s(self.name_size),
            role_size: s(self.role_size),
            contact_size: s(self.contact_size),
            section_title_size: s(self.section_title_size),
            section_gap: s(self.section_gap),
            heading_gap: s(self.heading_gap),
            entry_gap: s(self.entry_gap),
            company_size: s(self.company_size),
            body_size: s(self.body_size),
            detail_size: s(self.detail_size),
            skill_size: s(self.skill_size),
            line_height: s(self.line_height),
            bullet_indent: s(self.bullet_indent),
            block_pad: s(self.block_pad),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = DocumentStyle::default();
        assert_eq!(style.family, FontChoice::Serif);
        assert_eq!(style.size, DEFAULT_FONT_SIZE);
        assert_eq!(style.color, InkColor::Ink);
        assert_eq!(style.scale_factor(), 1.0);
    }

    #[test]
    fn test_set_size_clamps() {
        let mut style = DocumentStyle::default();
        style.set_size(4);
        assert_eq!(style.size, MIN_FONT_SIZE);
        style.set_size(72);
        assert_eq!(style.size, MAX_FONT_SIZE);
        style.set_size(14);
        assert_eq!(style.size, 14);
    }

    #[test]
    fn test_bump_size_stops_at_bounds() {
        let mut style = DocumentStyle::default();
        style.set_size(MAX_FONT_SIZE);
        assert!(!style.bump_size(1));
        assert!(style.at_max_size());

        assert!(style.bump_size(-1));
        assert_eq!(style.size, MAX_FONT_SIZE - 1);

        style.set_size(MIN_FONT_SIZE);
        assert!(!style.bump_size(-1));
        assert!(style.at_min_size());
    }

    #[test]
    fn test_scale_factor_doubles_base_gap() {
        // Factor 2.0 turns the base 40px section gap into 80px. The bounds
        // keep real documents below that, but the table itself is linear.
        let scaled = PaperMetrics::BASE.scaled(2.0);
        assert_eq!(scaled.section_gap, 80);
        assert_eq!(scaled.sidebar_width, 360);
        assert_eq!(scaled.name_size, 48);
    }

    #[test]
    fn test_scaled_at_max_supported_size() {
        let mut style = DocumentStyle::default();
        style.set_size(18);
        let scaled = PaperMetrics::BASE.scaled(style.scale_factor());
        assert_eq!(scaled.section_gap, 65); // 40 * 18/11, rounded
        assert_eq!(scaled.body_size, 18);
    }

    #[test]
    fn test_scaled_keeps_hairlines_visible() {
        let scaled = PaperMetrics::BASE.scaled(0.2);
        assert_eq!(scaled.sidebar_rule, 1);
    }

    #[test]
    fn test_size_choices_within_bounds() {
        for size in SIZE_CHOICES {
            assert!((MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size));
        }
    }
}
