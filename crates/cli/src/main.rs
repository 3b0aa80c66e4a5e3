use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use segint::api::{checked_query, QueryCfg, Segment, SegmentPair};
use serde_json::json;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod provenance;
mod record;

use provenance::Payload;
use record::{Record, Scene};

#[derive(Parser, Debug)]
#[command(name = "cli")]
#[command(about = "Planar segment intersection queries")]
struct Cmd {
    /// Decimal places kept in reported intersection points (0..=15)
    #[arg(
        long,
        global = true,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(0..=QueryCfg::MAX_DECIMALS as i64)
    )]
    decimals: u32,

    /// Evaluate input whose four endpoints are all (0,0) instead of rejecting it
    #[arg(long, global = true)]
    allow_origin: bool,

    /// Log per-pair debug lines
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Query one pair of segments given as x1,y1,x2,y2
    Check {
        #[arg(long, allow_hyphen_values = true)]
        s1: Segment,
        #[arg(long, allow_hyphen_values = true)]
        s2: Segment,
        /// Print a JSON record instead of a sentence
        #[arg(long)]
        json: bool,
    },
    /// Evaluate every row of a CSV (p1x,p1y,q1x,q1y,p2x,p2y,q2x,q2y) into a JSON array
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Write a plot-ready JSON scene (segments, intersection point, bounding box)
    Figure {
        #[arg(long, allow_hyphen_values = true)]
        s1: Segment,
        #[arg(long, allow_hyphen_values = true)]
        s2: Segment,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

impl Cmd {
    fn query_cfg(&self) -> QueryCfg {
        QueryCfg {
            decimals: self.decimals,
            reject_all_origin: !self.allow_origin,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let cfg = cmd.query_cfg();
    match cmd.action {
        Action::Check { s1, s2, json } => check(SegmentPair::new(s1, s2), json, cfg),
        Action::Batch { input, out } => run_batch(input, out, cfg),
        Action::Figure { s1, s2, out } => figure(SegmentPair::new(s1, s2), out, cfg),
        Action::Report => report(cfg),
    }
}

fn check(pair: SegmentPair, as_json: bool, cfg: QueryCfg) -> Result<()> {
    let outcome = checked_query(&pair, cfg)?;
    tracing::info!(s1 = ?pair.s1.to_array(), s2 = ?pair.s2.to_array(), outcome = outcome.tag(), "check");
    if as_json {
        let rec = Record::from_outcome(&pair, outcome);
        println!("{}", serde_json::to_string_pretty(&rec)?);
    } else {
        println!("{outcome}");
    }
    Ok(())
}

fn ensure_parent(out_path: &Path) -> Result<()> {
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn run_batch(input: String, out: String, cfg: QueryCfg) -> Result<()> {
    tracing::info!(input, out, decimals = cfg.decimals, "batch");
    let (records, summary) = batch::evaluate_csv(Path::new(&input), cfg)?;
    tracing::info!(
        rows = summary.rows,
        no_intersection = summary.no_intersection,
        point = summary.point,
        collinear_overlap = summary.collinear_overlap,
        degenerate_all_origin = summary.degenerate_all_origin,
        invalid = summary.invalid,
        "batch_summary"
    );

    let out_path = Path::new(&out);
    ensure_parent(out_path)?;
    std::fs::write(out_path, serde_json::to_vec_pretty(&records)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = Payload::new(
        "batch",
        json!({
            "input": input,
            "decimals": cfg.decimals,
            "reject_all_origin": cfg.reject_all_origin,
            "rows": summary.rows,
            "invalid": summary.invalid
        }),
    );
    provenance::write_sidecar(out_path, &payload)?;
    Ok(())
}

fn figure(pair: SegmentPair, out: String, cfg: QueryCfg) -> Result<()> {
    let outcome = checked_query(&pair, cfg)?;
    tracing::info!(out, outcome = outcome.tag(), "figure");
    let scene = Scene::new(&pair, outcome);

    let out_path = Path::new(&out);
    ensure_parent(out_path)?;
    std::fs::write(out_path, serde_json::to_vec_pretty(&scene)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = Payload::new(
        "figure",
        json!({
            "s1": pair.s1.to_array(),
            "s2": pair.s2.to_array(),
            "decimals": cfg.decimals
        }),
    );
    provenance::write_sidecar(out_path, &payload)?;
    Ok(())
}

fn report(cfg: QueryCfg) -> Result<()> {
    let payload = Payload::new(
        "report",
        json!({
            "decimals": cfg.decimals,
            "reject_all_origin": cfg.reject_all_origin
        }),
    );
    let obj = provenance::block(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_negative_coordinates_and_global_flags() {
        let cmd = Cmd::try_parse_from([
            "cli",
            "check",
            "--s1",
            "-1,-1,1,1",
            "--s2=-1,1,1,-1",
            "--decimals",
            "2",
            "--allow-origin",
        ])
        .unwrap();
        let cfg = cmd.query_cfg();
        assert_eq!(cfg.decimals, 2);
        assert!(!cfg.reject_all_origin);
        match cmd.action {
            Action::Check { s1, s2, json } => {
                assert_eq!(s1, Segment::from_coords(-1.0, -1.0, 1.0, 1.0));
                assert_eq!(s2, Segment::from_coords(-1.0, 1.0, 1.0, -1.0));
                assert!(!json);
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_decimals() {
        let base = ["cli", "check", "--s1", "0,0,4,4", "--s2", "0,4,4,0"];
        let ok = Cmd::try_parse_from(base.iter().copied().chain(["--decimals", "15"])).unwrap();
        assert_eq!(ok.query_cfg().decimals, 15);
        for bad in ["16", "308", "400"] {
            assert!(
                Cmd::try_parse_from(base.iter().copied().chain(["--decimals", bad])).is_err(),
                "--decimals {bad} accepted"
            );
        }
    }

    #[test]
    fn rejects_malformed_segment() {
        assert!(Cmd::try_parse_from(["cli", "check", "--s1", "1,2,3", "--s2", "0,0,1,1"]).is_err());
    }

    #[test]
    fn figure_writes_scene_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("plots").join("scene.json");
        let pair = SegmentPair::new(
            Segment::from_coords(0.0, 0.0, 4.0, 4.0),
            Segment::from_coords(0.0, 4.0, 4.0, 0.0),
        );
        figure(pair, out.to_string_lossy().into_owned(), QueryCfg::default()).unwrap();
        let scene: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(scene["point"]["at"], json!([2.0, 2.0]));
        assert_eq!(scene["bounding_box"], json!([-20.0, 20.0, 20.0, -20.0]));
        assert!(dir.path().join("plots").join("scene.provenance.json").exists());
    }

    #[test]
    fn figure_rejects_non_finite_input() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("scene.json");
        let pair = SegmentPair::new(
            Segment::from_coords(0.0, 0.0, f64::NAN, 4.0),
            Segment::from_coords(0.0, 4.0, 4.0, 0.0),
        );
        assert!(figure(pair, out.to_string_lossy().into_owned(), QueryCfg::default()).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn batch_writes_records_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pairs.csv");
        std::fs::write(
            &input,
            "p1x,p1y,q1x,q1y,p2x,p2y,q2x,q2y\n0,0,2,2,2,2,4,0\n",
        )
        .unwrap();
        let out = dir.path().join("results.json");
        run_batch(
            input.to_string_lossy().into_owned(),
            out.to_string_lossy().into_owned(),
            QueryCfg::default(),
        )
        .unwrap();
        let records: Vec<Record> = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].point, Some([2.0, 2.0]));
        assert!(dir.path().join("results.provenance.json").exists());
    }
}
