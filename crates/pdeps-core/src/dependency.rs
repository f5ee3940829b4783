use std::collections::BTreeMap;
use std::fmt;

use crate::qualifier::QualifierSet;
use crate::UNUSED_MARKER;

/// Where a dependency's qualifier stands during and after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualifierState {
    /// No qualifier row has assigned anything yet.
    Unresolved,
    /// The qualifier table marked the package `-nq-`.
    NoQualifiers,
    /// The qualifier table assigned this (normalized) set.
    Resolved(QualifierSet),
}

impl QualifierState {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }
}

impl fmt::Display for QualifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolved | Self::NoQualifiers => f.write_str(UNUSED_MARKER),
            Self::Resolved(quals) => write!(f, "{quals}"),
        }
    }
}

/// A package listed in the product list, with its qualifier resolution state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    pub name: String,
    pub version: String,
    pub qualifier: QualifierState,
}

impl DependencyRecord {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            qualifier: QualifierState::Unresolved,
        }
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.name, self.version, self.qualifier)
    }
}

/// The package whose dependencies are being extracted.
///
/// Only `qualifiers` drives resolution; `package` and `version` identify the
/// request in logs and reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveTarget {
    pub package: String,
    pub version: String,
    pub qualifiers: QualifierSet,
}

impl ResolveTarget {
    pub fn new(package: impl Into<String>, version: impl Into<String>, qualifiers: &str) -> Self {
        Self {
            package: package.into(),
            version: version.into(),
            qualifiers: QualifierSet::parse(qualifiers),
        }
    }
}

impl fmt::Display for ResolveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.package, self.version, self.qualifiers)
    }
}

/// Immediate dependencies of a target, keyed by package name.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub target: ResolveTarget,
    pub dependencies: BTreeMap<String, DependencyRecord>,
}

impl Resolution {
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn get(&self, package: &str) -> Option<&DependencyRecord> {
        self.dependencies.get(package)
    }

    /// Records in package-name order.
    pub fn iter(&self) -> impl Iterator<Item = &DependencyRecord> {
        self.dependencies.values()
    }
}
