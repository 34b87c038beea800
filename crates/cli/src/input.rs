//! Point list sources: inline `x,y` pairs or a JSON file.

use anyhow::{bail, Context, Result};
use clap::Args;
use spacious::Point;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the caller points come from (origin excluded).
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Source {
    /// Points as space-separated `x,y` pairs, e.g. "2,0 2,3 0,3"
    #[arg(long, allow_hyphen_values = true)]
    pub points: Option<String>,
    /// JSON file holding an array of `[x, y]` pairs
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl Source {
    pub fn load(&self) -> Result<Vec<Point>> {
        match (&self.points, &self.input) {
            (Some(inline), _) => parse_points(inline),
            (None, Some(path)) => read_points(path),
            (None, None) => bail!("either --points or --input is required"),
        }
    }
}

/// Parse a single `x,y` pair.
pub fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected `x,y`, got {s:?}"))?;
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("bad x coordinate in {s:?}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("bad y coordinate in {s:?}"))?;
    Ok(Point::new(x, y))
}

/// Parse whitespace- or `;`-separated `x,y` pairs.
pub fn parse_points(s: &str) -> Result<Vec<Point>> {
    s.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|tok| !tok.is_empty())
        .map(parse_point)
        .collect()
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Point::new(x, y)).collect())
}
