use crate::*;

fn summary_lines(summary: &EvaluationSummary, labels: &Labels) -> String {
    let mut lines = vec![
        format!("verdict: {}", labels.verdict(summary.verdict)),
        format!("accuracy: {}", labels.metric(summary.accuracy.into())),
        format!("f1: {}", labels.metric(summary.f1.into())),
        format!("metrics: {}", summary.metrics_source.status),
    ];
    for c in &summary.checks {
        lines.push(format!(
            "{}\t{}\t{}",
            c.name.as_str(),
            labels.status(c.status),
            c.path
        ));
    }
    if !summary.review_reasons.is_empty() {
        lines.push(format!("review: {}", summary.review_reasons.join(", ")));
    }
    if let Some(p) = &summary.report_path {
        lines.push(format!("report: {}", p));
    }
    lines.join("\n")
}

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Evaluate {
            format,
            lang,
            output,
        } => {
            let overrides = Overrides {
                format: *format,
                lang: *lang,
                output: output.clone(),
            };
            let config = resolve_config(&cli.root, cli.config.as_deref(), &overrides)?;
            let labels = labels(config.lang);
            let evaluator = Evaluator::new(config);
            let report = evaluator.evaluate()?;
            let report_path = evaluator
                .config()
                .output_path
                .to_string_lossy()
                .to_string();
            let summary = EvaluationSummary::from_report(&report, Some(report_path));
            print_one(cli.json, summary, |s| summary_lines(s, labels))?;
        }
        Commands::Check { lang } => {
            let overrides = Overrides {
                lang: *lang,
                ..Overrides::default()
            };
            let config = resolve_config(&cli.root, cli.config.as_deref(), &overrides)?;
            let labels = labels(config.lang);
            let report = Evaluator::new(config).assess();
            log::info!("check only, verdict {}", report.verdict.code());
            let summary = EvaluationSummary::from_report(&report, None);
            print_one(cli.json, summary, |s| summary_lines(s, labels))?;
        }
        Commands::Config { .. } => {}
    }
    Ok(())
}
