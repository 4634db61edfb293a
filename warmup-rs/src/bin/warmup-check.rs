//! CLI tool for checking a draft from the command line
//!
//! Analyzes an email draft and prints the health report as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a draft file with a subject line
//! warmup-check --subject "Quick question" draft.txt
//!
//! # Read the body from stdin
//! cat draft.txt | warmup-check --subject "Quick question"
//!
//! # Use a different model artifact
//! warmup-check --model models/spam_model.json draft.txt
//! ```

use anyhow::Context;
use clap::Parser;
use std::io::Read;
use std::sync::Arc;
use warmup_rs::analysis::EmailAnalyzer;
use warmup_rs::classifier::BayesianModel;

#[derive(Parser)]
#[command(name = "warmup-check")]
#[command(about = "Score an email draft before sending", long_about = None)]
struct Cli {
    /// Draft body file; reads stdin when omitted
    file: Option<String>,

    /// Subject line of the draft
    #[arg(short, long, default_value = "")]
    subject: String,

    /// Path to the spam model artifact
    #[arg(short, long, default_value = "models/spam_model.json")]
    model: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let body = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read draft {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read draft from stdin")?;
            buf
        }
    };

    let model = BayesianModel::load(&cli.model)
        .with_context(|| format!("cannot load model {}", cli.model))?;
    let analyzer = EmailAnalyzer::new(Arc::new(model))?;

    let report = analyzer.analyze(&cli.subject, &body);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
