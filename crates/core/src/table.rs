//! Point-table loading.
//!
//! A point table is an ordered list of (lon, lat) pairs read from one input
//! file. Row order is meaningful: it is the order the polygon boundary is
//! traced in and the order markers are drawn in. Two on-disk formats are
//! supported, chosen by file extension: XML rows (`<row><lon>..</lon>
//! <lat>..</lat></row>`, also accepted as attributes) and CSV with `lon`
//! and `lat` header columns.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use xmltree::Element;

use crate::error::{Error, Result};

/// A single WGS-84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

/// Ordered coordinate rows from one input file.
#[derive(Debug, Clone)]
pub struct PointTable {
    points: Vec<LonLat>,
    source: PathBuf,
}

impl PointTable {
    /// Build a table directly from coordinates (used by tests and callers
    /// that already hold data).
    pub fn from_points(points: Vec<LonLat>, source: impl Into<PathBuf>) -> Self {
        Self {
            points,
            source: source.into(),
        }
    }

    /// Load a table from `path`, dispatching on the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::InputFile {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let is_xml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("xml"));

        let points = if is_xml {
            parse_xml(reader, path)?
        } else {
            parse_csv(reader, path)?
        };

        Ok(Self {
            points,
            source: path.to_path_buf(),
        })
    }

    pub fn points(&self) -> &[LonLat] {
        &self.points
    }

    /// Path the table was loaded from, for error messages.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn parse_csv<R: std::io::Read>(reader: R, path: &Path) -> Result<Vec<LonLat>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut points = Vec::new();
    for (i, record) in rdr.deserialize::<LonLat>().enumerate() {
        let point = record.map_err(|e| Error::MalformedTable {
            path: path.to_path_buf(),
            reason: format!("row {}: {}", i + 1, e),
        })?;
        points.push(point);
    }
    Ok(points)
}

fn parse_xml<R: std::io::Read>(reader: R, path: &Path) -> Result<Vec<LonLat>> {
    let root = Element::parse(reader).map_err(|e| Error::MalformedTable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut points = Vec::new();
    for (i, node) in root.children.iter().enumerate() {
        let Some(row) = node.as_element() else {
            continue;
        };
        let lon = coordinate_field(row, "lon").ok_or(Error::MissingField {
            path: path.to_path_buf(),
            row: i + 1,
            field: "lon",
        })?;
        let lat = coordinate_field(row, "lat").ok_or(Error::MissingField {
            path: path.to_path_buf(),
            row: i + 1,
            field: "lat",
        })?;
        let lon = lon.trim().parse::<f64>().map_err(|e| Error::MalformedTable {
            path: path.to_path_buf(),
            reason: format!("row {}: lon: {}", i + 1, e),
        })?;
        let lat = lat.trim().parse::<f64>().map_err(|e| Error::MalformedTable {
            path: path.to_path_buf(),
            reason: format!("row {}: lat: {}", i + 1, e),
        })?;
        points.push(LonLat { lon, lat });
    }
    Ok(points)
}

/// Read a coordinate from a row element: child element text first, then an
/// attribute of the same name.
fn coordinate_field(row: &Element, name: &str) -> Option<String> {
    if let Some(child) = row.get_child(name) {
        return child.get_text().map(|t| t.into_owned());
    }
    row.attributes.get(name).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_csv_rows_in_order() {
        let (_dir, path) = write_temp(
            "bed.csv",
            "lon,lat\n-8.50,51.70\n-8.52,51.71\n-8.54,51.69\n",
        );
        let table = PointTable::load(&path).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.points()[0], LonLat { lon: -8.50, lat: 51.70 });
        assert_eq!(table.points()[2], LonLat { lon: -8.54, lat: 51.69 });
    }

    #[test]
    fn csv_with_extra_columns_still_loads() {
        let (_dir, path) = write_temp(
            "bed.csv",
            "name,lon,lat\nA,-8.50,51.70\nB,-8.52,51.71\n",
        );
        let table = PointTable::load(&path).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn loads_xml_rows_with_child_elements() {
        let (_dir, path) = write_temp(
            "bed.xml",
            "<data>\
             <row><lon>-8.50</lon><lat>51.70</lat></row>\
             <row><lon>-8.52</lon><lat>51.71</lat></row>\
             </data>",
        );
        let table = PointTable::load(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.points()[1], LonLat { lon: -8.52, lat: 51.71 });
    }

    #[test]
    fn loads_xml_rows_with_attributes() {
        let (_dir, path) = write_temp(
            "bed.xml",
            r#"<data><row lon="-8.5" lat="51.7"/></data>"#,
        );
        let table = PointTable::load(&path).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn xml_row_missing_lat_is_an_error() {
        let (_dir, path) = write_temp(
            "bed.xml",
            "<data><row><lon>-8.5</lon></row></data>",
        );
        let err = PointTable::load(&path).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "lat", .. }));
    }

    #[test]
    fn malformed_csv_number_is_an_error() {
        let (_dir, path) = write_temp("bed.csv", "lon,lat\nnot-a-number,51.7\n");
        let err = PointTable::load(&path).unwrap_err();
        assert!(matches!(err, Error::MalformedTable { .. }));
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = PointTable::load("/no/such/dir/bed.csv").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir/bed.csv"), "message was: {msg}");
    }

    #[test]
    fn empty_csv_loads_as_empty_table() {
        // A zero-row table is not a load error; it fails later, at fill time.
        let (_dir, path) = write_temp("bed.csv", "lon,lat\n");
        let table = PointTable::load(&path).unwrap();
        assert!(table.is_empty());
    }
}
