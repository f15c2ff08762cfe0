//! `vendor-licenses` — inventory a Go project's dependencies and identify their licenses.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and load config ([`config::load_config`]).
//! 2. Detect the dependency source ([`detector::detect_source`]) and enumerate it ([`enumerator`]).
//! 3. Manifest mode: classify each dependency's license file ([`license`]) against the
//!    compiled-in corpus, apply the critical-license policy, print the manifest ([`report::manifest`]).
//! 4. Disclaimer mode: collect every attribution file ([`disclaimer`]) and print them
//!    ([`report::disclaimer`]).
//! 5. Exit `1` when a critical or unresolved license was found, unless ignored.

mod cli;
mod config;
mod detector;
mod disclaimer;
mod enumerator;
mod error;
mod license;
mod models;
mod report;

use std::io::{BufWriter, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, ManifestFormat};
use config::load_config;
use detector::detect_source;
use disclaimer::extract_disclaimer;
use enumerator::gomod::GoModEnumerator;
use enumerator::gopkg::GopkgEnumerator;
use enumerator::Enumerator;
use error::LicenseError;
use license::classifier::{Classification, Classifier, UNRESOLVED_LABEL};
use license::classify_license;
use license::critical::CriticalPolicy;
use license::template::Corpus;
use models::{Dependency, DependencySource, LicenseVerdict};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let config = load_config(&path, cli.config.as_deref())?;
    let ignore_critical = cli.ignore_critical || config.policy.ignore_critical;

    let Some(source) = detect_source(&path) else {
        eprintln!("No Gopkg.lock or go.mod found in {}", path.display());
        std::process::exit(1);
    };

    let mut deps = match source {
        DependencySource::Dep => GopkgEnumerator::new().enumerate(&path).await?,
        DependencySource::GoModules => {
            GoModEnumerator::new(cli.vendor, Duration::from_secs(cli.timeout))
                .enumerate(&path)
                .await?
        }
    };

    if !cli.quiet {
        eprintln!("  {} {} {} dependencies", "→".cyan(), source, deps.len());
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.manifest {
        let corpus = Arc::new(Corpus::load()?);
        let classifier = Classifier::new(corpus, &config.classifier);
        let policy = config.policy.critical_policy();

        let problems =
            identify_licenses(&mut deps, classifier, policy, cli.jobs.into(), cli.quiet).await?;

        if !problems.is_empty() {
            if !ignore_critical {
                for problem in &problems {
                    eprintln!("{} {}", "error:".red().bold(), problem);
                }
                std::process::exit(1);
            }
            for problem in &problems {
                warn!(%problem, "continuing past license problem");
            }
        }

        match cli.format {
            ManifestFormat::Text => report::manifest::render_text(&mut out, &deps)?,
            ManifestFormat::Table => report::manifest::render_table(&mut out, &deps)?,
            ManifestFormat::Json => report::manifest::render_json(&mut out, &deps)?,
        }
    } else {
        create_disclaimer(&mut out, &deps, ignore_critical)?;
    }

    out.flush()?;
    Ok(())
}

/// Classify every dependency, `jobs` at a time, and record the outcome on it.
///
/// Returns one message per dependency whose license is critical or could not
/// be determined, in dependency order.
async fn identify_licenses(
    deps: &mut [Dependency],
    classifier: Classifier,
    policy: CriticalPolicy,
    jobs: usize,
    quiet: bool,
) -> Result<Vec<String>> {
    let classifier = Arc::new(classifier);
    let policy = Arc::new(policy);

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(deps.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        pb
    };

    let mut problems = Vec::new();

    for batch in deps.chunks_mut(jobs) {
        let tasks: Vec<_> = batch
            .iter()
            .map(|dep| {
                let classifier = Arc::clone(&classifier);
                let policy = Arc::clone(&policy);
                let path = dep.path.clone();
                tokio::task::spawn_blocking(move || classify_license(&classifier, &policy, &path))
            })
            .collect();

        let results = join_all(tasks).await;

        for (dep, result) in batch.iter_mut().zip(results) {
            let outcome = result.context("license classification task failed")?;
            if let Some(problem) = record_outcome(dep, outcome) {
                problems.push(format!("{}: {}", dep.name, problem));
            }
            pb.inc(1);
        }
    }

    pb.finish_and_clear();
    Ok(problems)
}

/// Store a classification outcome on the dependency; returns the problem, if any.
fn record_outcome(
    dep: &mut Dependency,
    outcome: Result<Classification, LicenseError>,
) -> Option<String> {
    match outcome {
        Ok(classification) => {
            apply_classification(dep, classification);
            dep.verdict = LicenseVerdict::Pass;
            None
        }
        Err(LicenseError::Critical(critical)) => {
            let problem = critical.to_string();
            apply_classification(dep, *critical.classification);
            dep.nickname = Some(critical.nickname);
            dep.verdict = LicenseVerdict::Critical;
            Some(problem)
        }
        Err(err @ LicenseError::Classify(_)) => {
            dep.license = Some(UNRESOLVED_LABEL.to_string());
            dep.verdict = LicenseVerdict::Unresolved;
            Some(format!("unable to identify license: {err}"))
        }
    }
}

fn apply_classification(dep: &mut Dependency, classification: Classification) {
    dep.license = Some(classification.label);
    dep.nickname = classification.nickname;
    dep.score = Some(classification.score).filter(|s| *s >= 0.0);
}

/// Print the disclaimer of every dependency. A dependency whose directory
/// cannot be listed stops the run unless `skip_unreadable` is set.
fn create_disclaimer<W: Write>(out: &mut W, deps: &[Dependency], skip_unreadable: bool) -> Result<()> {
    for dep in deps {
        match extract_disclaimer(&dep.path) {
            Ok(files) => report::disclaimer::render(out, &dep.name, &files)?,
            Err(err) if skip_unreadable => {
                warn!(dependency = %dep.name, error = %err, "skipping disclaimer");
            }
            Err(err) => {
                return Err(err).with_context(|| format!("building disclaimer of {}", dep.name));
            }
        }
    }
    Ok(())
}
