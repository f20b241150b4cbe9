use std::io::Write;

use crate::config::Method;
use crate::error::Result;
use crate::mesh::{Document, HexElement, Node, Particle};

use super::format::Record;

/// Section marker lines.
pub const KEYWORD: &str = "*KEYWORD";
pub const NODE: &str = "*NODE";
pub const ELEMENT_SOLID: &str = "*ELEMENT_SOLID";
pub const ELEMENT_SPH: &str = "*ELEMENT_SPH";
pub const END: &str = "*END";

/// Streams a [`Document`] as keyword text.
///
/// All nodes come first, then solid elements of every FEM region, then
/// particles of every SPH region. Each group keeps region declaration
/// order and the ID order within a region. An element section is written
/// when at least one region of its method is present, even if empty.
pub struct KeywordWriter<W: Write> {
    out: W,
}

impl<W: Write> KeywordWriter<W> {
    /// Creates a writer over `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the whole document.
    ///
    /// # Errors
    ///
    /// Returns an error if a value does not fit its column or the
    /// underlying writer fails.
    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        self.line(KEYWORD)?;

        self.line(NODE)?;
        for node in document.nodes() {
            self.node(node)?;
        }

        if document.has_method(Method::Fem) {
            self.line(ELEMENT_SOLID)?;
            for element in document.solids() {
                self.solid(element)?;
            }
        }

        if document.has_method(Method::Sph) {
            self.line(ELEMENT_SPH)?;
            for particle in document.particles() {
                self.particle(particle)?;
            }
        }

        self.line(END)?;
        self.out.flush()?;
        Ok(())
    }

    /// Returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn node(&mut self, node: &Node) -> Result<()> {
        let mut r = Record::new(NODE);
        r.id(node.id)?
            .fixed(node.position.x)?
            .fixed(node.position.y)?
            .fixed(node.position.z)?;
        self.line(r.as_str())
    }

    fn solid(&mut self, element: &HexElement) -> Result<()> {
        let mut r = Record::new(ELEMENT_SOLID);
        r.id(element.id)?.id(element.part_id)?;
        for &id in &element.nodes {
            r.id(id)?;
        }
        self.line(r.as_str())
    }

    fn particle(&mut self, particle: &Particle) -> Result<()> {
        let mut r = Record::new(ELEMENT_SPH);
        r.id(particle.id)?
            .id(particle.part_id)?
            .id(particle.node)?
            .scientific(particle.mass)?;
        self.line(r.as_str())
    }
}
