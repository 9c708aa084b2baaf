use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polyvol::api::{
    cube_facets, hexa_volume, polyhedron_volume_with, unit_cube_vertices, VolumeCfg,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::{read_json, write_json, HexaInput, PolyhedronInput, VolumeOutput};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Volume measurement driver for hexahedra and convex polyhedra")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the hexahedron volume of the unit cube
    Demo,
    /// Volume of an 8-vertex hexahedron read from JSON
    Hexa {
        #[arg(long)]
        input: PathBuf,
        /// Write `{"kind", "volume"}` here plus a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Volume of a convex polyhedron given by outward-wound facets
    Polyhedron {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Fail if the reference centroid lies outside any facet
        #[arg(long)]
        hull_check: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo(),
        Action::Hexa { input, out } => hexa(&input, out.as_deref()),
        Action::Polyhedron {
            input,
            out,
            hull_check,
        } => polyhedron(&input, out.as_deref(), hull_check),
        Action::Report => report(),
    }
}

fn demo() -> Result<()> {
    let hexa = hexa_volume(&unit_cube_vertices())?;
    let facets = polyhedron_volume_with(&cube_facets(1.0), VolumeCfg::checked())?;
    tracing::info!(hexa, facets, "unit_cube");
    println!("{hexa}");
    Ok(())
}

fn hexa(input: &Path, out: Option<&Path>) -> Result<()> {
    tracing::info!(input = %input.display(), "hexa");
    let doc: HexaInput = read_json(input)?;
    let volume = hexa_volume(&doc.points())
        .with_context(|| format!("measuring hexahedron from {}", input.display()))?;
    emit("hexa", volume, out, serde_json::json!({ "input": input.display().to_string() }))
}

fn polyhedron(input: &Path, out: Option<&Path>, hull_check: bool) -> Result<()> {
    let doc: PolyhedronInput = read_json(input)?;
    tracing::info!(input = %input.display(), facets = doc.facets.len(), hull_check, "polyhedron");
    let cfg = VolumeCfg {
        hull_check,
        ..VolumeCfg::default()
    };
    let volume = polyhedron_volume_with(&doc.facets(), cfg)
        .with_context(|| format!("measuring polyhedron from {}", input.display()))?;
    emit(
        "polyhedron",
        volume,
        out,
        serde_json::json!({ "input": input.display().to_string(), "hull_check": hull_check }),
    )
}

fn emit(kind: &'static str, volume: f64, out: Option<&Path>, params: serde_json::Value) -> Result<()> {
    tracing::info!(kind, volume, "measured");
    println!("{volume}");
    if let Some(out) = out {
        let doc = VolumeOutput {
            kind: kind.to_string(),
            volume,
        };
        write_json(out, &doc)?;
        let prov = write_sidecar(out, Payload::new(kind, params))?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote");
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "polyvol": polyvol::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
