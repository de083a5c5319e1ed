/// Canonical display names for the raw library labels the harnesses print
/// (usually the benchmarked bundle's filename).
pub const CANONICAL_NAMES: &[(&str, &str)] = &[
    ("react.production.min.js", "React"),
    ("vue.global.prod.js", "Vue 3"),
    ("react-dom.production.min.js", "React DOM"),
    ("lodash.js", "Lodash"),
    ("three.js", "Three.js"),
    ("typescript.js", "TypeScript Compiler"),
];

/// Maps a raw library label to its canonical display name. Labels without a
/// table entry pass through unchanged. The table is a parameter rather than
/// baked in so callers stay in charge of the mapping.
pub fn normalize_library_name(raw: &str, names: &[(&str, &str)]) -> String {
    names
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| (*to).to_owned())
        .unwrap_or_else(|| raw.to_owned())
}
