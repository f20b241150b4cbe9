use std::fmt;

use tracing::warn;

use crate::config::Method;
use crate::mesh::Document;

/// A half-open ID interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub start: u64,
    pub end: u64,
}

impl IdRange {
    /// Creates the range of `count` IDs starting at `start`.
    #[must_use]
    pub fn new(start: u64, count: u64) -> Self {
        Self {
            start,
            end: start.saturating_add(count),
        }
    }

    /// Returns `true` if the range holds no IDs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if the two ranges share at least one ID.
    #[must_use]
    pub fn overlaps(&self, other: &IdRange) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end
            && other.start < self.end
    }
}

impl From<std::ops::Range<u64>> for IdRange {
    fn from(r: std::ops::Range<u64>) -> Self {
        Self {
            start: r.start,
            end: r.end,
        }
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Keyword sections whose IDs must be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdNamespace {
    Node,
    Solid,
    Sph,
}

impl IdNamespace {
    fn of_elements(method: Method) -> Self {
        match method {
            Method::Fem => IdNamespace::Solid,
            Method::Sph => IdNamespace::Sph,
        }
    }
}

impl fmt::Display for IdNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdNamespace::Node => f.write_str("node"),
            IdNamespace::Solid => f.write_str("solid element"),
            IdNamespace::Sph => f.write_str("SPH element"),
        }
    }
}

/// A non-fatal finding about a composed document.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Two regions hand out IDs from intersecting ranges.
    IdOverlap {
        namespace: IdNamespace,
        first: String,
        second: String,
        ranges: (IdRange, IdRange),
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IdOverlap {
                namespace,
                first,
                second,
                ranges: (a, b),
            } => write!(
                f,
                "{namespace} IDs of `{first}` {a} overlap those of `{second}` {b}"
            ),
        }
    }
}

/// Detects ID ranges shared by two regions of a document.
///
/// Every pair of regions is compared once, separately for nodes and for
/// each element section. Overlaps are reported, never corrected.
pub struct IdOverlaps<'a> {
    document: &'a Document,
}

impl<'a> IdOverlaps<'a> {
    /// Creates a new `IdOverlaps` query.
    #[must_use]
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Executes the query, logging each overlap found.
    #[must_use]
    pub fn execute(&self) -> Vec<Diagnostic> {
        let regions = self.document.regions();
        let mut diagnostics = Vec::new();
        for (n, a) in regions.iter().enumerate() {
            for b in &regions[n + 1..] {
                let mut check = |namespace, ra: IdRange, rb: IdRange| {
                    if ra.overlaps(&rb) {
                        diagnostics.push(Diagnostic::IdOverlap {
                            namespace,
                            first: a.name.clone(),
                            second: b.name.clone(),
                            ranges: (ra, rb),
                        });
                    }
                };
                check(IdNamespace::Node, a.node_ids().into(), b.node_ids().into());
                if a.elements.method() == b.elements.method() {
                    check(
                        IdNamespace::of_elements(a.elements.method()),
                        a.element_ids().into(),
                        b.element_ids().into(),
                    );
                }
            }
        }
        for d in &diagnostics {
            warn!("{d}");
        }
        diagnostics
    }
}
