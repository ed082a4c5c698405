use sobel_edges::config::{load_config, StageToolConfig};
use sobel_edges::diagnostics::StageReport;
use sobel_edges::image::io::write_json_file;
use sobel_edges::process_file;
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
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let reports = run_stages(&config)?;

    if let Some(path) = &config.report {
        write_json_file(path, &reports).map_err(|e| e.to_string())?;
        println!("Saved report for {} stages to {}", reports.len(), path.display());
    }
    Ok(())
}

fn run_stages(config: &StageToolConfig) -> Result<Vec<StageReport>, String> {
    let mut reports = Vec::with_capacity(config.stages.len());
    for entry in &config.stages {
        let output = entry.output_path();
        let report = process_file(&config.input, &output, entry.stage, config.channel_range)
            .map_err(|e| format!("stage {}: {e}", entry.stage.label()))?;
        println!("{}", report.summary());
        reports.push(report);
    }
    Ok(reports)
}

fn usage() -> String {
    "Usage: sobel_stages <config.json>".to_string()
}
