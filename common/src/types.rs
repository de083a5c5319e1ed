use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Implementation language of a benchmarked parser. Serializes as the
/// display label ("Java", "JavaScript", "Rust").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Java,
    JavaScript,
    Rust,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::Rust => "Rust",
        }
    }

    /// Series order for chart legends: Rust parsers first, then JavaScript,
    /// then Java.
    pub fn chart_rank(&self) -> usize {
        match self {
            Language::Rust => 0,
            Language::JavaScript => 1,
            Language::Java => 2,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One (parser, library) performance observation from a harness report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Measurement {
    pub parser: String,
    pub language: Language,
    pub avg_time_ms: f64,
    pub throughput_kb_ms: f64,
}

/// Merged benchmark results, keyed by normalized library name. Measurement
/// order within a library is the order the source reports produced (ranked
/// fastest first by the harnesses), not a sort this crate guarantees.
pub type ResultTable = BTreeMap<String, Vec<Measurement>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_serializes_as_label() {
        for language in [Language::Java, Language::JavaScript, Language::Rust] {
            let json = serde_json::to_string(&language).unwrap();
            assert_eq!(json, format!("\"{}\"", language.label()));
            let back: Language = serde_json::from_str(&json).unwrap();
            assert_eq!(back, language);
        }
    }

    #[test]
    fn chart_rank_orders_rust_first() {
        assert!(Language::Rust.chart_rank() < Language::JavaScript.chart_rank());
        assert!(Language::JavaScript.chart_rank() < Language::Java.chart_rank());
    }

    #[test]
    fn measurement_round_trips() {
        let measurement = Measurement {
            parser: "OXC".to_owned(),
            language: Language::Rust,
            avg_time_ms: 0.138,
            throughput_kb_ms: 76.2,
        };
        let json = serde_json::to_string(&measurement).unwrap();
        let back: Measurement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, measurement);
    }
}
