use common::types::Language;

/// A `Library: <name>` declaration followed by its `Size: <n> KB` line.
/// Blank lines may sit between the two, nothing else, so a header missing
/// its size line can never swallow the next section. Shared by all three
/// source formats.
pub const LIBRARY_HEADER: &str = r"Library: (?P<name>.+?)\n(?:[ \t]*\n)*Size: (?P<size>[\d.]+) KB";

/// How many result rows one library section may contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPolicy {
    /// One fixed result per library; the first matching row wins.
    Single,
    /// Arbitrarily many ranked rows, kept in report order.
    Ranked,
}

/// Where a row's parser name comes from.
#[derive(Debug, Clone, Copy)]
pub enum ParserName {
    /// The harness prints a fixed row label; stamp this canonical name.
    Fixed(&'static str),
    /// The row captures the name; drop the given decoration before storage.
    Captured { strip: Option<&'static str> },
}

/// Report convention of one benchmarking harness. The three harnesses emit
/// near-identical report files, so one extraction engine runs against these
/// descriptors instead of three copies of the same scan.
#[derive(Debug, Clone, Copy)]
pub struct SourceFormat {
    pub language: Language,
    /// Result filenames start with this and end in `.txt`; the rest of the
    /// name is a date-sortable timestamp.
    pub file_prefix: &'static str,
    /// Filenames containing any of these belong to other benchmark
    /// categories and are never picked up.
    pub excluded_tags: &'static [&'static str],
    /// Result-row pattern with `time` and `tp` captures, plus `parser` when
    /// the rows are ranked.
    pub row_pattern: &'static str,
    pub rows: RowPolicy,
    pub parser_name: ParserName,
}

/// The Java harness measures a single parser and prints one pipe-delimited
/// row per library, without the ratio column the other two formats carry:
/// `Our Java Parser    |      1.513 |      6.68`
pub const JAVA: SourceFormat = SourceFormat {
    language: Language::Java,
    file_prefix: "java_",
    excluded_tags: &["realworld", "our_parser"],
    row_pattern: r"Our Java Parser\s+\|\s+(?P<time>[\d.]+)\s+\|\s+(?P<tp>[\d.]+)",
    rows: RowPolicy::Single,
    parser_name: ParserName::Fixed("Harmonica"),
};

/// The JavaScript harness ranks its parsers with medal markers and prints
/// throughput with an explicit unit:
/// `🥇 Meriyah            |           0.295 |            1.00x |         35.5 KB/ms`
pub const JAVASCRIPT: SourceFormat = SourceFormat {
    language: Language::JavaScript,
    file_prefix: "js_",
    excluded_tags: &["realworld"],
    row_pattern: r"[🥇🥈🥉]\s+(?P<parser>\S+)\s+\|\s+(?P<time>[\d.]+)\s+\|\s+[\d.]+x\s+\|\s+(?P<tp>[\d.]+)\s+KB/ms",
    rows: RowPolicy::Ranked,
    parser_name: ParserName::Captured { strip: None },
};

/// The Rust harness ranks like the JavaScript one but decorates parser
/// names and leaves the throughput bare:
/// `🥇 OXC (Rust)         |           0.138 |            1.00x |                 76.2`
pub const RUST: SourceFormat = SourceFormat {
    language: Language::Rust,
    file_prefix: "rust_",
    excluded_tags: &["realworld"],
    row_pattern: r"[🥇🥈🥉]\s+(?P<parser>.+?)\s+\|\s+(?P<time>[\d.]+)\s+\|\s+[\d.]+x\s+\|\s+(?P<tp>[\d.]+)",
    rows: RowPolicy::Ranked,
    parser_name: ParserName::Captured {
        strip: Some(" (Rust)"),
    },
};
