use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use covector::api::{
    DualBasis, GeomCfg, GridEnumerator, OneForm, Region, ShapeTransform, DEFAULT_MAX, DEFAULT_MIN,
};
use nalgebra::Vector2;
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Level-line grids, dual bases and shape transforms")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Viewport and enumeration settings shared by subcommands.
#[derive(Args, Clone, Copy, Debug)]
struct ViewArgs {
    #[arg(long, default_value_t = DEFAULT_MIN, allow_hyphen_values = true)]
    min: f64,
    #[arg(long, default_value_t = DEFAULT_MAX, allow_hyphen_values = true)]
    max: f64,
    /// Per-direction cap on enumerated levels
    #[arg(long, default_value_t = GeomCfg::default().max_levels)]
    max_levels: usize,
    /// Determinant below which a level line counts as parallel
    #[arg(long, default_value_t = GeomCfg::default().eps_det)]
    eps_det: f64,
}

impl ViewArgs {
    fn cfg(&self) -> GeomCfg {
        GeomCfg {
            eps_det: self.eps_det,
            max_levels: self.max_levels,
            ..GeomCfg::default()
        }
    }

    fn region(&self) -> Result<Region> {
        Region::new(self.min, self.max).context("building viewport region")
    }
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate the level lines of one form and write them as CSV
    Grid {
        #[arg(long, allow_hyphen_values = true)]
        fx: f64,
        #[arg(long, allow_hyphen_values = true)]
        fy: f64,
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long)]
        out: String,
    },
    /// Print the dual-basis map of two forms applied to a vector (JSON)
    Dual {
        #[arg(long, default_value_t = 2.0, allow_hyphen_values = true)]
        x1: f64,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        y1: f64,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        x2: f64,
        #[arg(long, default_value_t = 2.0, allow_hyphen_values = true)]
        y2: f64,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        vx: f64,
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        vy: f64,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Print the rotated and translated default shape (JSON)
    Shape {
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        theta: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        dx: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        dy: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Grid {
            fx,
            fy,
            view,
            out,
        } => grid(fx, fy, view, &out, cmd.tag).map(|_| ()),
        Action::Dual {
            x1,
            y1,
            x2,
            y2,
            vx,
            vy,
            view,
        } => {
            let report = dual([x1, y1], [x2, y2], [vx, vy], view)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Action::Shape { theta, dx, dy } => {
            println!("{}", serde_json::to_string_pretty(&shape(theta, dx, dy))?);
            Ok(())
        }
        Action::Report => report(cmd.tag),
    }
}

/// Write the chords of `(fx, fy)` as one CSV row per chord point.
///
/// Returns the number of rows written.
fn grid(fx: f64, fy: f64, view: ViewArgs, out: &str, tag: Option<String>) -> Result<usize> {
    tracing::info!(fx, fy, min = view.min, max = view.max, out, tag = ?tag, "grid");
    let region = view.region()?;
    let form = OneForm::new(fx, fy).context("building one-form")?;
    let chords = GridEnumerator::with_cfg(&region, view.cfg()).lines(&form);

    let mut level: Vec<i64> = Vec::new();
    let mut primary: Vec<bool> = Vec::new();
    let mut index: Vec<u32> = Vec::new();
    let mut xs: Vec<f64> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();
    for chord in &chords {
        for (i, p) in chord.points.iter().enumerate() {
            level.push(chord.level);
            primary.push(chord.primary);
            index.push(i as u32);
            xs.push(p.x);
            ys.push(p.y);
        }
    }
    let mut df = df!(
        "level" => &level,
        "primary" => &primary,
        "index" => &index,
        "x" => &xs,
        "y" => &ys,
    )?;
    tracing::info!(chords = chords.len(), rows = df.height(), "grid_table");

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = std::fs::File::create(out_path).with_context(|| format!("creating {out}"))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {out}"))?;

    let prov = Provenance::new(
        json!({
            "fx": fx,
            "fy": fy,
            "min": view.min,
            "max": view.max,
            "max_levels": view.max_levels,
            "chords": chords.len(),
        }),
        tag,
    );
    write_sidecar(out_path, &prov)?;
    Ok(df.height())
}

#[derive(Serialize, Debug)]
struct DualReport {
    /// Row-major `[[α], [β]]`.
    transform: [[f64; 2]; 2],
    image: [f64; 2],
    components: [[f64; 2]; 2],
    decomposition: Option<[[f64; 2]; 2]>,
    x_chords: usize,
    y_chords: usize,
}

fn dual(x_form: [f64; 2], y_form: [f64; 2], v: [f64; 2], view: ViewArgs) -> Result<DualReport> {
    tracing::info!(?x_form, ?y_form, ?v, "dual");
    let alpha = OneForm::new(x_form[0], x_form[1]).context("building x form")?;
    let beta = OneForm::new(y_form[0], y_form[1]).context("building y form")?;
    let basis = DualBasis::new(alpha, beta, Vector2::new(v[0], v[1]));
    let region = view.region()?;
    let cfg = view.cfg();
    let (gx, gy) = basis.grids(&GridEnumerator::with_cfg(&region, cfg));
    let t = basis.transform();
    let [cx, cy] = basis.image_components();
    Ok(DualReport {
        transform: [[t[(0, 0)], t[(0, 1)]], [t[(1, 0)], t[(1, 1)]]],
        image: [basis.image().x, basis.image().y],
        components: [[cx.to.x, cx.to.y], [cy.to.x, cy.to.y]],
        decomposition: basis
            .decomposition(cfg.eps_det)
            .map(|[p, q]| [[p.x, p.y], [q.x, q.y]]),
        x_chords: gx.len(),
        y_chords: gy.len(),
    })
}

#[derive(Serialize, Debug)]
struct ShapeReport {
    theta: f64,
    dx: f64,
    dy: f64,
    original: Vec<[f64; 2]>,
    transformed: Vec<[f64; 2]>,
}

fn shape(theta: f64, dx: f64, dy: f64) -> ShapeReport {
    tracing::info!(theta, dx, dy, "shape");
    let mut t = ShapeTransform::default();
    t.set_params(theta, dx, dy);
    t.recompute();
    ShapeReport {
        theta,
        dx,
        dy,
        original: pairs(t.original_vertices()),
        transformed: pairs(t.transformed_vertices()),
    }
}

fn pairs(vs: Vec<Vector2<f64>>) -> Vec<[f64; 2]> {
    vs.into_iter().map(|p| [p.x, p.y]).collect()
}

fn report(tag: Option<String>) -> Result<()> {
    let prov = Provenance::new(json!({}), tag);
    println!("{}", serde_json::to_string_pretty(&prov.document(&[]))?);
    Ok(())
}
