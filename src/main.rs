use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};

use timetabler::cli::Cli;
use timetabler::models::Problem;
use timetabler::report::ArtifactWriter;
use timetabler::solver::GreedySolver;
use timetabler::{logger, validation};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    info!("loading model from {}", cli.model.display());
    let problem = Problem::from_json_file(&cli.model)
        .with_context(|| format!("failed to load model '{}'", cli.model.display()))?;

    if let Err(errors) = validation::validate_problem(&problem) {
        for e in &errors {
            error!("{e}");
        }
        anyhow::bail!("model validation failed with {} error(s)", errors.len());
    }

    let timetable = GreedySolver::new().with_order(cli.order.into()).solve(&problem);
    info!(
        "seated {} of {} required meetings",
        timetable.meeting_count(),
        timetable.meeting_count() + timetable.unplaced.len()
    );

    let stem = cli
        .model
        .file_stem()
        .and_then(|s| s.to_str())
        .context("model path has no file name")?;
    let writer = ArtifactWriter::new(cli.output_dir.join(stem));
    let report = writer.write_all(&problem, &timetable).with_context(|| {
        format!(
            "failed to write artifacts under '{}'",
            writer.base().display()
        )
    })?;

    for u in &timetable.unplaced {
        warn!(
            "unplaced: group '{}', subject '{}', occurrence {}: {}",
            u.group, u.subject, u.occurrence, u.reason
        );
    }
    if report.is_clean() {
        info!("no conflicts detected in the timetable");
    } else {
        warn!(
            "{} conflicts detected, see conflicts.json for reports",
            report.total()
        );
    }

    info!("results written to {}", writer.base().display());
    Ok(())
}
