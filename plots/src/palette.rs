use common::types::Language;
use plotters::style::RGBColor;

/// Brand-ish color per implementation language, used when a parser has no
/// entry in the per-parser palette.
pub fn language_color(language: Language) -> RGBColor {
    match language {
        Language::Rust => RGBColor(222, 165, 132),       // #dea584
        Language::JavaScript => RGBColor(247, 223, 30),  // #f7df1e
        Language::Java => RGBColor(83, 130, 161),        // #5382a1
    }
}

/// Fixed palette for the parsers the harnesses are known to report. Rust
/// engines get orange tones, JavaScript engines green/yellow, Java blue.
pub fn parser_color(parser: &str, language: Language) -> RGBColor {
    match parser {
        "OXC" => RGBColor(224, 112, 32),            // #e07020
        "SWC" => RGBColor(255, 153, 85),            // #ff9955
        "Meriyah" => RGBColor(45, 159, 45),         // #2d9f2d
        "Acorn" => RGBColor(124, 179, 66),          // #7cb342
        "@babel/parser" => RGBColor(245, 218, 85),  // #f5da55
        "Harmonica" => RGBColor(30, 136, 229),      // #1e88e5
        _ => language_color(language),
    }
}
