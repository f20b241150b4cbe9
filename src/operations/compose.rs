//! Assembly of several regions into one document.

use tracing::info;

use crate::config::ResolvedRegion;
use crate::error::Result;
use crate::mesh::Document;

use super::creation::MakeRegion;
use super::query::{Diagnostic, IdOverlaps, RegionSummary, SummarizeRegion};

/// A composed document with its per-region summaries and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub document: Document,
    pub summaries: Vec<RegionSummary>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Generates regions in declaration order and checks their IDs.
///
/// ID overlaps between regions do not stop composition; they are returned
/// as diagnostics alongside the complete document.
pub struct ComposeRegions<'a> {
    regions: &'a [ResolvedRegion],
}

impl<'a> ComposeRegions<'a> {
    /// Creates a new `ComposeRegions` operation.
    #[must_use]
    pub fn new(regions: &'a [ResolvedRegion]) -> Self {
        Self { regions }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if any region fails to generate.
    pub fn execute(&self) -> Result<Composition> {
        let mut document = Document::new();
        let mut summaries = Vec::with_capacity(self.regions.len());
        for region in self.regions {
            let mesh = MakeRegion::new(region).execute()?;
            let summary = SummarizeRegion::new(region, &mesh).execute();
            info!("{summary}");
            summaries.push(summary);
            document.push(mesh);
        }
        let diagnostics = IdOverlaps::new(&document).execute();
        info!(
            regions = self.regions.len(),
            nodes = document.node_count(),
            overlaps = diagnostics.len(),
            "composed document"
        );
        Ok(Composition {
            document,
            summaries,
            diagnostics,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::JobConfig;
    use crate::operations::query::IdNamespace;

    const JOB: &str = r#"
[[region]]
name = "plate"
method = "sph"
density = 7.8
part_id = 2
start_nid = 1001
start_eid = 1001
shape = { kind = "box", min = [-1.0, -1.0, -0.25], max = [1.0, 1.0, 0.0] }
resolution = { counts = [8, 8, 2] }

[[region]]
name = "projectile"
method = "sph"
density = 7.8
part_id = 1
start_nid = 1
start_eid = 1
shape = { kind = "sphere", center = [0.0, 0.0, 0.26], radius = 0.25 }
resolution = { counts = [6, 6, 6] }

[[region]]
name = "target"
method = "fem"
part_id = 3
start_nid = 1
start_eid = 1
shape = { kind = "box", min = [-1.0, -1.0, -1.0], max = [1.0, 1.0, -0.5] }
resolution = { counts = [2, 2, 1] }
"#;

    fn compose(text: &str) -> Composition {
        let regions = JobConfig::parse(text).unwrap().resolve().unwrap();
        ComposeRegions::new(&regions).execute().unwrap()
    }

    #[test]
    fn regions_keep_declaration_order() {
        let c = compose(JOB);
        let names: Vec<&str> = c.document.regions().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["plate", "projectile", "target"]);
        assert_eq!(c.summaries.len(), 3);
        assert_eq!(c.document.nodes().next().unwrap().id, 1001);
        assert_eq!(c.summaries[0].nodes, 128);
        assert_eq!(c.summaries[2].nodes, 18);
    }

    #[test]
    fn overlaps_are_reported_not_fatal() {
        let c = compose(JOB);
        // The projectile and target share node IDs from 1; their elements
        // live in different sections.
        assert_eq!(c.diagnostics.len(), 1);
        let Diagnostic::IdOverlap {
            namespace,
            first,
            second,
            ..
        } = &c.diagnostics[0];
        assert_eq!(*namespace, IdNamespace::Node);
        assert_eq!(first, "projectile");
        assert_eq!(second, "target");
        assert_eq!(c.document.regions().len(), 3);
    }

    #[test]
    fn empty_job_composes_to_empty_document() {
        let c = compose("");
        assert!(c.document.regions().is_empty());
        assert!(c.diagnostics.is_empty());
    }
}
