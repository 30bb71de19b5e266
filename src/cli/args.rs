// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gapscan", version, about = "Frontend/backend integration gap analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan one or more trees and report orphaned calls and unused endpoints
    Analyze {
        /// Roots to scan (frontend and backend trees may be passed together)
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
        /// Emit the full AnalysisResult as JSON instead of a console report
        #[arg(long)]
        json: bool,
        /// Also emit the scored dependency graph as JSON
        #[arg(long)]
        graph: bool,
    },
    /// Run the analysis and evaluate the quality gate (exit 0/1/2 = pass/fail/warn)
    Gate {
        /// Roots to scan
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
        /// Quality-gate threshold overrides as a JSON file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Emit the GateEvaluationResult as JSON instead of a console report
        #[arg(long)]
        json: bool,
    },
}
