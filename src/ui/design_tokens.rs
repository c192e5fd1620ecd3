// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the installation panel.
//!
//! A trimmed scale in the W3C Design Tokens spirit: base colors,
//! spacing on an 8px grid, component sizes, font sizes, and border
//! metrics. Components take their colors from the active Iced theme
//! where possible; the palette below covers the semantic accents the
//! theme does not provide.

use iced::Color;

pub mod palette {
    use super::Color;

    // Semantic colors
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// Spacing scale (8px baseline grid)
pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

pub mod sizing {
    /// Fixed width of toast notification cards.
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Maximum content width of the panel body.
    pub const PAGE_MAX_WIDTH: f32 = 760.0;
}

pub mod typography {
    /// Large title - Main page heading
    pub const TITLE_LG: f32 = 30.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Command strings, hints
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Footer, version block
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// Compile-time validation
const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(palette::SUCCESS_500.g >= 0.0 && palette::SUCCESS_500.g <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn toast_fits_inside_page_width() {
        assert!(sizing::TOAST_WIDTH < sizing::PAGE_MAX_WIDTH);
    }
}
