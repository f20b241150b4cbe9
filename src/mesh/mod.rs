//! Generated entities and the document that collects them.

use std::ops::Range;

use crate::config::Method;
use crate::math::Point3;

/// A uniquely numbered point in space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: u32,
    pub position: Point3,
}

/// An 8-node solid element.
///
/// `nodes` follow the bottom-face-then-top-face corner order and are never
/// reordered after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexElement {
    pub id: u32,
    pub part_id: u32,
    pub nodes: [u32; 8],
}

/// A mass-bearing SPH particle attached to exactly one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: u32,
    pub part_id: u32,
    pub node: u32,
    pub mass: f64,
}

/// Elements of one region, either all solids or all particles.
#[derive(Debug, Clone, PartialEq)]
pub enum Elements {
    Solid(Vec<HexElement>),
    Sph(Vec<Particle>),
}

impl Elements {
    /// Number of elements or particles.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Elements::Solid(e) => e.len(),
            Elements::Sph(p) => p.len(),
        }
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The discretization these elements belong to.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Elements::Solid(_) => Method::Fem,
            Elements::Sph(_) => Method::Sph,
        }
    }
}

/// Entities generated for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMesh {
    /// Region name from the job.
    pub name: String,
    /// Configured first node ID.
    pub node_start: u32,
    /// Configured first element ID.
    pub element_start: u32,
    /// Nodes in ID order.
    pub nodes: Vec<Node>,
    /// Elements or particles in ID order.
    pub elements: Elements,
}

impl RegionMesh {
    /// Half-open node ID range `[start, start + count)`.
    #[must_use]
    pub fn node_ids(&self) -> Range<u64> {
        id_range(self.node_start, self.nodes.len())
    }

    /// Half-open element ID range `[start, start + count)`.
    #[must_use]
    pub fn element_ids(&self) -> Range<u64> {
        id_range(self.element_start, self.elements.len())
    }

    /// Looks up a node of this region by ID.
    ///
    /// Region nodes are numbered contiguously, so this is a direct offset.
    #[must_use]
    pub fn node(&self, id: u32) -> Option<&Node> {
        let offset = id.checked_sub(self.node_start)? as usize;
        self.nodes.get(offset)
    }

    /// Corner positions of a solid element of this region.
    #[must_use]
    pub fn hex_corners(&self, element: &HexElement) -> Option<[Point3; 8]> {
        let mut corners = [Point3::origin(); 8];
        for (corner, &id) in corners.iter_mut().zip(&element.nodes) {
            *corner = self.node(id)?.position;
        }
        Some(corners)
    }
}

fn id_range(start: u32, count: usize) -> Range<u64> {
    let start = u64::from(start);
    start..start + count as u64
}

/// The full set of entities written to one keyword file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    regions: Vec<RegionMesh>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a region after those already present.
    pub fn push(&mut self, region: RegionMesh) {
        self.regions.push(region);
    }

    /// Regions in declaration order.
    #[must_use]
    pub fn regions(&self) -> &[RegionMesh] {
        &self.regions
    }

    /// All nodes, grouped by region.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.regions.iter().flat_map(|r| r.nodes.iter())
    }

    /// All solid elements, grouped by region.
    pub fn solids(&self) -> impl Iterator<Item = &HexElement> {
        self.regions
            .iter()
            .filter_map(|r| match &r.elements {
                Elements::Solid(e) => Some(e),
                Elements::Sph(_) => None,
            })
            .flatten()
    }

    /// All SPH particles, grouped by region.
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.regions
            .iter()
            .filter_map(|r| match &r.elements {
                Elements::Sph(p) => Some(p),
                Elements::Solid(_) => None,
            })
            .flatten()
    }

    /// Returns `true` if any region uses `method`.
    #[must_use]
    pub fn has_method(&self, method: Method) -> bool {
        self.regions.iter().any(|r| r.elements.method() == method)
    }

    /// Total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.regions.iter().map(|r| r.nodes.len()).sum()
    }
}
