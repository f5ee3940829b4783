//! Single-pass extraction of a package's immediate dependencies from a
//! `product_deps` file.
//!
//! The scanner walks the file once. Rows of the product list are recorded
//! (subject to their qualifier filter) until the first qualifier table row
//! matching the target's qualifiers is seen; that row assigns each column
//! package its qualifiers and ends the pass.

use std::collections::BTreeMap;
use std::path::Path;

use pdeps_core::dependency::{DependencyRecord, QualifierState, Resolution, ResolveTarget};
use pdeps_core::qualifier::QualifierSet;
use pdeps_core::{NO_QUALIFIERS_MARKER, UNUSED_MARKER};
use pdeps_util::errors::{PdepsError, PdepsResult};
use pdeps_util::fs::open_lines;

use crate::section::{classify, LineKind};

/// Filter token that never excludes a product list row.
const ANY_QUALIFIER: &str = "-";

/// Whether a line fed to the resolver ended the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Continue,
    Matched,
}

/// State of one resolution pass.
pub struct DependencyResolver {
    target: ResolveTarget,
    in_dependency_section: bool,
    in_qualifier_section: bool,
    line_no: usize,
    records: BTreeMap<String, DependencyRecord>,
    columns: BTreeMap<String, usize>,
    found: bool,
}

impl DependencyResolver {
    pub fn new(target: ResolveTarget) -> Self {
        Self {
            target,
            in_dependency_section: false,
            in_qualifier_section: false,
            line_no: 0,
            records: BTreeMap::new(),
            columns: BTreeMap::new(),
            found: false,
        }
    }

    /// Process the next line of input.
    ///
    /// Returns [`Progress::Matched`] once the target's qualifier row has been
    /// applied; callers must stop feeding lines at that point.
    pub fn feed(&mut self, line: &str) -> PdepsResult<Progress> {
        self.line_no += 1;

        match classify(line) {
            LineKind::ProductHeader => {
                tracing::debug!("line {}: entering product list", self.line_no);
                self.in_dependency_section = true;
            }
            LineKind::ProductEnd => {
                tracing::debug!("line {}: leaving product list", self.line_no);
                self.in_dependency_section = false;
            }
            LineKind::QualifierHeader(columns) => {
                tracing::debug!(
                    "line {}: entering qualifier table with {} columns",
                    self.line_no,
                    columns.len()
                );
                self.in_qualifier_section = true;
                for column in columns {
                    self.columns.insert(column.package.to_string(), column.index);
                }
            }
            LineKind::QualifierEnd => {
                tracing::debug!("line {}: leaving qualifier table", self.line_no);
                self.in_qualifier_section = false;
            }
            LineKind::Body if self.in_dependency_section => self.product_row(line)?,
            LineKind::Body if self.in_qualifier_section => return self.qualifier_row(line),
            LineKind::Body => {}
        }

        Ok(Progress::Continue)
    }

    /// Finish the pass, failing if no qualifier row matched.
    pub fn finish(self, source_name: &str) -> PdepsResult<Resolution> {
        if !self.found {
            return Err(PdepsError::QualifierNotFound {
                qualifiers: self.target.qualifiers.to_string(),
                source_name: source_name.to_string(),
            }
            .into());
        }

        tracing::info!(
            "Resolved {} dependencies of {}",
            self.records.len(),
            self.target
        );
        Ok(Resolution {
            target: self.target,
            dependencies: self.records,
        })
    }

    fn product_row(&mut self, line: &str) -> PdepsResult<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (package, version) = match tokens.as_slice() {
            [] => return Ok(()),
            [package] => {
                return Err(PdepsError::MalformedInput {
                    line: self.line_no,
                    message: format!("product '{package}' has no version"),
                }
                .into())
            }
            [package, version, ..] => (*package, *version),
        };

        if let Some(filter) = tokens.get(2) {
            let excluded = filter.split(':').any(|qual| {
                qual != ANY_QUALIFIER && !self.target.qualifiers.contains_token(qual)
            });
            if excluded {
                tracing::debug!(
                    "line {}: skipping {package} {version}, filter {filter} does not match {}",
                    self.line_no,
                    self.target.qualifiers
                );
                return Ok(());
            }
        }

        if self.records.contains_key(package) {
            tracing::debug!(
                "line {}: ignoring repeated product {package} {version}",
                self.line_no
            );
        } else {
            self.records
                .insert(package.to_string(), DependencyRecord::new(package, version));
        }
        Ok(())
    }

    fn qualifier_row(&mut self, line: &str) -> PdepsResult<Progress> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(row_quals) = tokens.first() else {
            return Ok(Progress::Continue);
        };
        if QualifierSet::parse(row_quals) != self.target.qualifiers {
            return Ok(Progress::Continue);
        }

        tracing::debug!("line {}: qualifier row {row_quals} matches", self.line_no);
        self.found = true;

        for (package, &column) in &self.columns {
            let Some(record) = self.records.get_mut(package) else {
                return Err(PdepsError::MalformedInput {
                    line: self.line_no,
                    message: format!(
                        "qualifier column '{package}' has no entry in the product list"
                    ),
                }
                .into());
            };
            if !record.qualifier.is_unresolved() {
                continue;
            }

            let value = tokens.get(column).ok_or_else(|| PdepsError::MalformedInput {
                line: self.line_no,
                message: format!("row '{row_quals}' has no value for column '{package}'"),
            })?;
            let possible = QualifierSet::parse(value);

            if possible.as_str() == UNUSED_MARKER {
                tracing::debug!("{package} is not used with {}", self.target.qualifiers);
                self.records.remove(package);
            } else if possible.as_str() == NO_QUALIFIERS_MARKER {
                record.qualifier = QualifierState::NoQualifiers;
            } else {
                record.qualifier = QualifierState::Resolved(possible);
            }
        }

        Ok(Progress::Matched)
    }
}

/// Resolve `target` against in-memory lines. `source_name` labels the input
/// in error messages.
pub fn resolve_lines<I, S>(
    lines: I,
    source_name: &str,
    target: ResolveTarget,
) -> PdepsResult<Resolution>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut resolver = DependencyResolver::new(target);
    for line in lines {
        if resolver.feed(line.as_ref())? == Progress::Matched {
            break;
        }
    }
    resolver.finish(source_name)
}

/// Resolve `target` against the `product_deps` file at `path`.
///
/// The file is read lazily and closed as soon as the matching qualifier row
/// has been processed or an error occurs.
pub fn resolve_file(path: &Path, target: ResolveTarget) -> PdepsResult<Resolution> {
    let mut resolver = DependencyResolver::new(target);
    {
        let lines = open_lines(path)?;
        for line in lines {
            let line = line?;
            if resolver.feed(&line)? == Progress::Matched {
                break;
            }
        }
    }
    resolver.finish(&path.display().to_string())
}
