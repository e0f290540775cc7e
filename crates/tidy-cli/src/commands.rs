use std::time::Instant;

use anyhow::{Context, Result};
use tidy_model::CleaningConfig;
use tidy_output::{
    CleaningReport, cleaned_output_path, report_output_path, write_csv, write_report,
};
use tidy_transform::Step;
use tracing::{info, info_span};

use tidy_cli::options::{CleanOverrides, apply_overrides, load_config};

use crate::cli::{CleanArgs, ProfileArgs};
use crate::summary::print_profile;
use crate::types::CleanResult;

pub fn run_profile(args: &ProfileArgs) -> Result<()> {
    let span = info_span!("profile", file = %args.file.display());
    let _guard = span.enter();

    let table = tidy_ingest::read_table(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let profile = tidy_transform::profile(&table);

    if args.json {
        let json = serde_json::to_string_pretty(&profile).context("serialize profile")?;
        println!("{json}");
    } else {
        print_profile(&args.file, &profile, &table.head(args.preview_rows));
    }
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean", file = %args.file.display());
    let _guard = span.enter();
    let start = Instant::now();

    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => CleaningConfig::new(),
    };
    let overrides = CleanOverrides {
        missing: args.missing,
        remove_duplicates: args.remove_duplicates,
        drop: args.drop.clone(),
        convert: args.convert.clone(),
    };
    let config = apply_overrides(base, &overrides);
    let steps: Vec<Step> = Step::ORDER
        .into_iter()
        .filter(|step| step.is_requested(&config))
        .collect();

    let input = tidy_ingest::read_table(&args.file);
    let outcome = tidy_transform::run_from(input, &config)
        .with_context(|| format!("clean {}", args.file.display()))?;

    let mut result = CleanResult {
        input: args.file.clone(),
        config,
        steps,
        outcome,
        output: None,
        report: None,
        dry_run: args.dry_run,
    };
    if args.dry_run {
        info!("dry run, no files written");
        return Ok(result);
    }

    let output_dir = args.output_dir.as_deref();
    let output = cleaned_output_path(&args.file, output_dir)?;
    write_csv(result.table(), &output)?;
    if !args.no_report {
        let report_path = report_output_path(&args.file, output_dir)?;
        let report =
            CleaningReport::new(&args.file, &result.config, &result.outcome).with_output(&output);
        write_report(&report, &report_path)?;
        result.report = Some(report_path);
    }
    result.output = Some(output);

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "clean finished"
    );
    Ok(result)
}
