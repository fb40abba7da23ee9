use pair_cluster::config::{self, OutputFormat};
use pair_cluster::io::{load_points_json, write_json_file};
use pair_cluster::ClusterEngine;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;

    let points = load_points_json(&config.input)?;
    let engine = ClusterEngine::new(config.params.resolve()).map_err(|e| e.to_string())?;
    let report = engine.run(&points).map_err(|e| e.to_string())?;

    let format: OutputFormat = config.output.format;
    if format.includes_text() {
        report.print_text_summary();
    }
    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("Wrote clustering JSON to {}", path.display());
    } else if format.includes_json() {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report: {e}"))?;
        println!("{json}");
    }

    Ok(())
}

fn usage() -> String {
    "Usage: pair_cluster <config.json>".to_string()
}
