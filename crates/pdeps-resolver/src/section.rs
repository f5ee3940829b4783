//! Classification of `product_deps` lines into section markers and bodies.

use std::sync::OnceLock;

use regex::Regex;

static PRODUCT_HEADER_RE: OnceLock<Regex> = OnceLock::new();
static QUALIFIER_HEADER_RE: OnceLock<Regex> = OnceLock::new();

const PRODUCT_END: &str = "end_product_list";
const QUALIFIER_END: &str = "end_qualifier_list";

/// Header tokens of the qualifier table that are not package columns.
const NON_COLUMN_HEADERS: [&str; 2] = ["qualifier", "notes"];

fn product_header_re() -> &'static Regex {
    PRODUCT_HEADER_RE.get_or_init(|| Regex::new(r"^product[ \t]+version[ \t]+optional").unwrap())
}

fn qualifier_header_re() -> &'static Regex {
    QUALIFIER_HEADER_RE.get_or_init(|| Regex::new(r"^qualifier[ \t]+").unwrap())
}

/// What a single line means to the section scanner.
#[derive(Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `product version optional ...` opens the product list.
    ProductHeader,
    /// `end_product_list` closes it.
    ProductEnd,
    /// `qualifier <col>... notes` opens the qualifier table.
    QualifierHeader(Vec<Column<'a>>),
    /// `end_qualifier_list` closes it.
    QualifierEnd,
    /// Anything else; its meaning depends on the current section.
    Body,
}

/// A package column in the qualifier table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<'a> {
    pub package: &'a str,
    /// Position in the whitespace-split header, counting `qualifier` as 0.
    pub index: usize,
}

/// Classify `line`. Markers are checked in a fixed order and the first hit wins.
pub fn classify(line: &str) -> LineKind<'_> {
    if product_header_re().is_match(line) {
        LineKind::ProductHeader
    } else if line.contains(PRODUCT_END) {
        LineKind::ProductEnd
    } else if qualifier_header_re().is_match(line) {
        LineKind::QualifierHeader(header_columns(line))
    } else if line.contains(QUALIFIER_END) {
        LineKind::QualifierEnd
    } else {
        LineKind::Body
    }
}

fn header_columns(line: &str) -> Vec<Column<'_>> {
    line.split_whitespace()
        .enumerate()
        .filter(|(_, label)| !NON_COLUMN_HEADERS.contains(label))
        .map(|(index, package)| Column { package, index })
        .collect()
}
