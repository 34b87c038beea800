use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spacious::{FixedPointCodec, Polygon, DEFAULT_PRECISION};
use std::path::PathBuf;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod input;
mod report;

use input::Source;
use report::Report;

#[derive(Parser, Debug)]
#[command(name = "spacious")]
#[command(about = "Area, centroid and rotation of origin-anchored polygons")]
struct Cmd {
    /// Decimal digits of the fixed-point codec
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Log filter directive, e.g. "spacious=debug" (default: RUST_LOG, else warn)
    #[arg(long)]
    log: Option<String>,

    /// Write the JSON report here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Print vertices, area and centroid
    Measure {
        #[command(flatten)]
        source: Source,
    },
    /// Rotate about the centroid (or --origin) and print the result
    Rotate {
        /// Angle, counter-clockwise positive; radians unless --degrees
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long)]
        degrees: bool,
        /// Rotation origin as `x,y`
        #[arg(long, allow_hyphen_values = true)]
        origin: Option<String>,
        #[command(flatten)]
        source: Source,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_tracing(cmd.log.as_deref())?;
    let report = run(&cmd)?;
    report::emit(&report, cmd.out.as_deref())
}

fn init_tracing(directive: Option<&str>) -> Result<()> {
    let filter = match directive {
        Some(d) => EnvFilter::try_new(d).with_context(|| format!("invalid log filter {d:?}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    // stderr keeps stdout clean for the JSON report
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(cmd: &Cmd) -> Result<Report> {
    let codec = FixedPointCodec::new(cmd.precision).context("configuring codec")?;
    match &cmd.action {
        Action::Measure { source } => {
            let poly = build(source, codec)?;
            Ok(Report::from(&poly))
        }
        Action::Rotate {
            angle,
            degrees,
            origin,
            source,
        } => {
            let mut poly = build(source, codec)?;
            let theta = if *degrees { angle.to_radians() } else { *angle };
            tracing::info!(theta, origin = ?origin, "rotate");
            let rotated = match origin {
                Some(o) => poly.rotate_about(theta, input::parse_point(o)?),
                None => poly.rotate(theta),
            };
            rotated.context("rotating polygon")?;
            Ok(Report::from(&poly))
        }
    }
}

fn build(source: &Source, codec: FixedPointCodec) -> Result<Polygon> {
    let points = source.load()?;
    tracing::info!(points = points.len(), precision = codec.precision(), "build");
    Polygon::with_codec(&points, codec).context("building polygon")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn measure_inline_rectangle() {
        let cmd = Cmd::try_parse_from(["spacious", "measure", "--points", "2,0 2,3 0,3"]).unwrap();
        let r = run(&cmd).unwrap();
        assert_eq!(r.area, 6.0);
        assert_eq!(r.centroid, [1.0, 1.5]);
    }

    #[test]
    fn rotate_in_degrees() {
        let cmd = Cmd::try_parse_from([
            "spacious",
            "rotate",
            "--angle",
            "90",
            "--degrees",
            "--points",
            "2,0 2,3 0,3",
        ])
        .unwrap();
        let r = run(&cmd).unwrap();
        let expected = [[2.5, 0.5], [2.5, 2.5], [-0.5, 2.5], [-0.5, 0.5]];
        for (got, want) in r.vertices.iter().zip(expected.iter()) {
            assert!((got[0] - want[0]).abs() < 1e-4 && (got[1] - want[1]).abs() < 1e-4);
        }
        assert_eq!(r.area, 6.0);
    }

    #[test]
    fn rotate_about_negative_origin() {
        let cmd = Cmd::try_parse_from([
            "spacious",
            "rotate",
            "--angle",
            "-3.141592653589793",
            "--origin",
            "-1,0",
            "--points",
            "2,0 2,3 0,3",
        ])
        .unwrap();
        let r = run(&cmd).unwrap();
        assert_eq!(r.vertices[0], [-2.0, 0.0]);
        assert_eq!(r.centroid, [-3.0, -1.5]);
    }

    #[test]
    fn source_is_required_and_exclusive() {
        assert!(Cmd::try_parse_from(["spacious", "measure"]).is_err());
        assert!(Cmd::try_parse_from([
            "spacious", "measure", "--points", "1,0", "--input", "a.json"
        ])
        .is_err());
    }

    #[test]
    fn degenerate_input_surfaces_error() {
        let cmd =
            Cmd::try_parse_from(["spacious", "measure", "--points", "0,0 1,1 2,2"]).unwrap();
        let err = run(&cmd).unwrap_err();
        assert!(format!("{err:#}").contains("degenerate"));
    }

    #[test]
    fn bad_precision_is_rejected() {
        let cmd = Cmd::try_parse_from([
            "spacious",
            "--precision",
            "40",
            "measure",
            "--points",
            "2,0 2,3 0,3",
        ])
        .unwrap();
        assert!(run(&cmd).is_err());
    }
}
