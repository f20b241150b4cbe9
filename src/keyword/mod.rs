//! Fixed-width keyword output.
//!
//! Records are laid out in fixed columns: IDs take 8 columns, coordinates
//! 16 columns in fixed-point notation, and masses 16 columns in scientific
//! notation, all with 6 decimals.

mod format;
mod writer;

pub use format::{scientific, Record};
pub use writer::{KeywordWriter, ELEMENT_SOLID, ELEMENT_SPH, END, KEYWORD, NODE};

use std::io::BufWriter;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::Result;
use crate::mesh::Document;

/// Column width of ID fields.
pub const ID_WIDTH: usize = 8;

/// Column width of real fields.
pub const REAL_WIDTH: usize = 16;

/// Decimals written for real fields.
pub const REAL_PRECISION: usize = 6;

/// Largest ID that fits the ID column.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn max_id() -> u64 {
    10u64.pow(ID_WIDTH as u32) - 1
}

/// Renders a document as keyword text.
///
/// # Errors
///
/// Returns an error if a value does not fit its column.
pub fn to_string(document: &Document) -> Result<String> {
    let mut writer = KeywordWriter::new(Vec::new());
    writer.write_document(document)?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Writes a document to `path`.
///
/// The text goes to a temporary file next to `path` that replaces it only
/// once completely written, so a failed run never leaves a truncated file.
///
/// # Errors
///
/// Returns an error if a value does not fit its column or the file cannot
/// be written.
pub fn save(document: &Document, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;

    let mut writer = KeywordWriter::new(BufWriter::new(tmp));
    writer.write_document(document)?;
    let tmp = writer.into_inner().into_inner().map_err(|e| e.into_error())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    info!(
        path = %path.display(),
        nodes = document.node_count(),
        "wrote keyword file"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::JobConfig;
    use crate::operations::compose::ComposeRegions;

    fn document(job: &str) -> Document {
        let regions = JobConfig::parse(job).unwrap().resolve().unwrap();
        ComposeRegions::new(&regions).execute().unwrap().document
    }

    const BOX: &str = r#"
[[region]]
name = "block"
method = "fem"
part_id = 1
start_nid = 1
start_eid = 1
shape = { kind = "box", min = [-1.0, -1.0, 0.0], max = [1.0, 1.0, 1.0] }
resolution = { counts = [2, 2, 2] }
"#;

    #[test]
    fn max_id_fills_the_column() {
        assert_eq!(max_id(), 99_999_999);
        assert_eq!(max_id().to_string().len(), ID_WIDTH);
    }

    #[test]
    fn two_by_two_box_text() {
        let text = to_string(&document(BOX)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // Marker lines plus 27 nodes and 8 elements.
        assert_eq!(lines.len(), 4 + 27 + 8);
        assert_eq!(lines[2], "       1       -1.000000       -1.000000        0.000000");
        assert_eq!(lines[3], "       2       -1.000000       -1.000000        0.500000");
        assert_eq!(lines[29], "*ELEMENT_SOLID");
        assert_eq!(
            lines[30],
            "       1       1       1      10      13       4       2      11      14       5"
        );
        assert_eq!(lines[38], "*END");
    }

    #[test]
    fn save_writes_the_same_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.k");
        let doc = document(BOX);
        save(&doc, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), to_string(&doc).unwrap());

        // Saving again replaces the file.
        save(&Document::new(), &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "*KEYWORD\n*NODE\n*END\n"
        );
    }

    #[test]
    fn failed_save_leaves_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.k");
        std::fs::write(&path, "previous").unwrap();

        let mut region = document(BOX).regions()[0].clone();
        region.nodes[0].position.x = f64::NAN;
        let mut doc = Document::new();
        doc.push(region);

        assert!(save(&doc, &path).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("box.k");
        assert!(save(&Document::new(), &path).is_err());
    }
}
