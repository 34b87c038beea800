use anyhow::{Context, Result};
use serde::Serialize;
use spacious::Polygon;
use std::fs;
use std::path::Path;

/// JSON view of a polygon: vertices (origin first), areas and centroid.
#[derive(Debug, Serialize)]
pub struct Report {
    pub vertices: Vec<[f64; 2]>,
    pub area: f64,
    pub signed_area: f64,
    pub centroid: [f64; 2],
}

impl From<&Polygon> for Report {
    fn from(p: &Polygon) -> Self {
        let c = p.centroid();
        Self {
            vertices: p.vertices().iter().map(|v| [v.x, v.y]).collect(),
            area: p.area(),
            signed_area: p.signed_area(),
            centroid: [c.x, c.y],
        }
    }
}

/// Print the report to stdout, or write it to `out` creating parent dirs.
pub fn emit(report: &Report, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(report)?;
    let Some(path) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(out = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use spacious::Point;
    use tempfile::tempdir;

    fn rectangle() -> Polygon {
        Polygon::new(&[
            Point::new(2.0, 0.0),
            Point::new(2.0, 3.0),
            Point::new(0.0, 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn report_mirrors_polygon() {
        let r = Report::from(&rectangle());
        assert_eq!(r.vertices[0], [0.0, 0.0]);
        assert_eq!(r.vertices.len(), 4);
        assert_eq!(r.area, 6.0);
        assert_eq!(r.centroid, [1.0, 1.5]);
    }

    #[test]
    fn emit_writes_nested_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/rect.json");
        emit(&Report::from(&rectangle()), Some(&out)).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["area"], 6.0);
        assert_eq!(parsed["signed_area"], 6.0);
        assert_eq!(parsed["centroid"][1], 1.5);
        assert_eq!(parsed["vertices"][2][1], 3.0);
    }
}
