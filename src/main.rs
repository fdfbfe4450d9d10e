//! Roadnet Editor Inspektor.
//!
//! Liest einen JSON-Snapshot, prüft die Topologie und gibt eine Übersicht aus.
//! Mit `--normalize <ziel>` wird der Snapshot neu geschrieben (externe
//! Bildquellen entfernt, Nodes nach ID sortiert).

use anyhow::{bail, Context};
use roadnet_editor::snapshot::{read_snapshot_file, write_snapshot_file};
use roadnet_editor::{EditorDocument, RoadKind};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    log::info!(
        "Roadnet Editor Inspektor v{} liest {}",
        env!("CARGO_PKG_VERSION"),
        args.input.display()
    );

    let doc = read_snapshot_file(&args.input)
        .with_context(|| format!("{} ist kein gültiger Snapshot", args.input.display()))?;

    print_summary(&doc);

    let violations = doc.road_map.integrity_violations();
    if violations.is_empty() {
        println!("Topologie: konsistent");
    } else {
        println!("Topologie: {} Abweichung(en)", violations.len());
        for violation in &violations {
            println!("  - {}", violation);
        }
    }

    if let Some(target) = &args.normalize {
        write_snapshot_file(&doc, target)
            .with_context(|| format!("Schreiben nach {} fehlgeschlagen", target.display()))?;
        log::info!("Normalisierter Snapshot geschrieben: {}", target.display());
    }

    if !violations.is_empty() {
        std::process::exit(2);
    }
    Ok(())
}

/// Kommandozeilenargumente: `<snapshot.json> [--normalize <ziel.json>]`
struct CliArgs {
    input: PathBuf,
    normalize: Option<PathBuf>,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut input = None;
        let mut normalize = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--normalize" => {
                    let Some(target) = args.next() else {
                        bail!("--normalize erwartet einen Zielpfad");
                    };
                    normalize = Some(PathBuf::from(target));
                }
                "-h" | "--help" => {
                    println!("Verwendung: roadnet-editor <snapshot.json> [--normalize <ziel.json>]");
                    std::process::exit(0);
                }
                _ if input.is_none() => input = Some(PathBuf::from(arg)),
                other => bail!("Unerwartetes Argument: {}", other),
            }
        }
        let Some(input) = input else {
            bail!("Verwendung: roadnet-editor <snapshot.json> [--normalize <ziel.json>]");
        };
        Ok(Self { input, normalize })
    }
}

fn print_summary(doc: &EditorDocument) {
    let road_map = &doc.road_map;
    println!("Nodes:        {}", road_map.node_count());
    println!("Straßen:      {}", road_map.road_count());
    for kind in [
        RoadKind::Straight,
        RoadKind::Quadratic,
        RoadKind::Circle,
        RoadKind::Cubic,
    ] {
        let count = road_map.roads_iter().filter(|r| r.kind == kind).count();
        if count > 0 {
            println!("  {:<10}  {}", format!("{:?}", kind).to_lowercase(), count);
        }
    }
    println!("Gesamtlänge:  {:.2}", road_map.total_road_length());

    let isolated = road_map.nodes_iter().filter(|n| n.is_isolated()).count();
    if isolated > 0 {
        println!("Isolierte Nodes: {}", isolated);
    }

    println!("Polygone:     {}", doc.polygons.len());
    let total_area: f32 = doc.polygons.iter().filter_map(|p| p.area).sum();
    println!("Gesamtfläche: {:.2} m²", total_area);

    println!("Hintergründe: {}", doc.backgrounds.len());
    println!(
        "Ansicht:      Pan ({:.1}, {:.1}), Zoom {:.2}",
        doc.view.pan_offset.x, doc.view.pan_offset.y, doc.view.zoom
    );
}
