//! User-Agent detection CLI.
//!
//! Classifies User-Agent strings given as arguments, or one per line on
//! stdin, and prints a JSON report for each.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use ua_detection::{
    DetectionContext, DetectionOptions, DetectionReport, DetectionService, SignatureTable,
    TagFilter,
};

#[derive(Parser, Debug)]
#[command(name = "ua-detect")]
#[command(author, version, about = "Crawler, device, platform and engine detection from User-Agent strings")]
struct Args {
    /// User-Agent strings to classify (reads stdin when omitted)
    user_agents: Vec<String>,

    /// Path to configuration file (JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a crawler signature table replacing the built-in one
    #[arg(long)]
    signatures: Option<PathBuf>,

    /// Comma-separated crawler names to allow
    #[arg(long)]
    include: Option<String>,

    /// Comma-separated crawler names to suppress
    #[arg(long)]
    exclude: Option<String>,

    /// Extra request header as NAME:VALUE (repeatable)
    #[arg(long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Enable JSON logging format
    #[arg(long)]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got {s:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in {s:?}"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn init_logging(json: bool, level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    // Reports go to stdout; keep logs on stderr.
    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(io::stderr))
            .init();
    }
}

#[derive(Serialize)]
struct Output<'a> {
    user_agent: &'a str,
    #[serde(flatten)]
    report: DetectionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    suppressed: Option<bool>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.json_logs, &args.log_level);

    let options = match &args.config {
        Some(path) => DetectionOptions::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DetectionOptions::default(),
    };

    let signatures = match &args.signatures {
        Some(path) => SignatureTable::load(path)
            .with_context(|| format!("loading signatures {}", path.display()))?,
        None => SignatureTable::defaults(),
    };

    let service = DetectionService::with_signatures(options, signatures)?;
    let filter = TagFilter::new(args.include.as_deref(), args.exclude.as_deref());
    let has_directive = !filter.is_pass_through();

    info!(
        signatures = ?args.signatures,
        directive = has_directive,
        "Detection service configured"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut emit = |ua: &str| -> Result<()> {
        let mut ctx = DetectionContext::from_user_agent(ua);
        for (name, value) in &args.headers {
            ctx = ctx.with_header(name, value.clone());
        }

        let report = service.detect(&ctx);
        let suppressed = has_directive.then(|| filter.suppresses_crawler(&report.crawler));
        debug!(user_agent = ua, ?suppressed, "Classified user agent");

        let output = Output {
            user_agent: ua,
            report,
            suppressed,
        };
        serde_json::to_writer(&mut out, &output)?;
        writeln!(out)?;
        Ok(())
    };

    if args.user_agents.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("reading stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            emit(&line)?;
        }
    } else {
        for ua in &args.user_agents {
            emit(ua)?;
        }
    }

    Ok(())
}
