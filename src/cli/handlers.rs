// src/cli/handlers.rs
//! Command dispatch for the `gapscan` binary.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::analysis::Engine;
use crate::config::QualityGateConfig;
use crate::detection::detect_frameworks;
use crate::discovery;
use crate::exit::GapScanExit;
use crate::gate::{self, GateGap};
use crate::types::{AnalysisResult, SourceFile};
use crate::{graph, reporting};

use super::args::{Cli, Commands};

/// Runs the parsed command and maps the outcome to an exit code.
pub fn run(cli: &Cli) -> Result<GapScanExit> {
    match &cli.command {
        Commands::Analyze { paths, json, graph } => handle_analyze(paths, *json, *graph),
        Commands::Gate { paths, config, json } => handle_gate(paths, config.as_deref(), *json),
    }
}

fn handle_analyze(paths: &[PathBuf], json: bool, with_graph: bool) -> Result<GapScanExit> {
    let result = analyze_paths(paths);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", reporting::render_analysis(&result));
    }

    if with_graph {
        let scored = graph::build_scored(&result.gaps, &result.endpoints, &result.api_calls);
        println!("{}", scored.export_json());
    }

    Ok(GapScanExit::Pass)
}

fn handle_gate(paths: &[PathBuf], config_path: Option<&Path>, json: bool) -> Result<GapScanExit> {
    let config = load_gate_config(config_path)?;
    let result = analyze_paths(paths);

    let gate_gaps: Vec<GateGap> = result.gaps.iter().map(GateGap::from).collect();
    let verdict = gate::evaluate(&gate_gaps, &config);

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print!("{}", reporting::render_gate(&verdict));
    }

    Ok(GapScanExit::from(&verdict))
}

fn analyze_paths(paths: &[PathBuf]) -> AnalysisResult {
    let mut sources: Vec<SourceFile> = Vec::new();
    for root in paths {
        let frameworks = detect_frameworks(root);
        if !frameworks.is_empty() {
            let names: Vec<String> = frameworks.iter().map(ToString::to_string).collect();
            info!(root = %root.display(), frameworks = names.join(", "), "detected frameworks");
        }
        sources.extend(discovery::load_sources(root));
    }

    let (frontend, backend) = discovery::partition_display(&sources);
    info!(
        frontend = frontend.len(),
        backend = backend.len(),
        "discovered sources"
    );

    let engine = Engine::new();
    engine.analyze(&sources)
}

/// A missing `--config` means pure defaults.
fn load_gate_config(path: Option<&Path>) -> Result<QualityGateConfig> {
    match path {
        Some(path) => QualityGateConfig::load(path)
            .with_context(|| format!("loading gate config {}", path.display())),
        None => Ok(QualityGateConfig::default()),
    }
}
