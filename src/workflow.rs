//! Command implementations: wire the input provider, the core, and the presenter.
use crate::classify::classify;
use crate::cli::{ClassifyArgs, RenumberArgs};
use crate::diagnostics::{Logger, TracingLogger};
use crate::io::{InputProvider, InputSource, OutputTarget, ResultPresenter, PROMPT_LABEL};
use crate::lines::read_lines;
use crate::patterns::ListPatterns;
use crate::pipeline::classify_and_render;
use crate::report::ClassificationReport;
use anyhow::{Context, Result};

/// Read pasted text, renumber it, and present the result.
pub fn run_renumber(args: &RenumberArgs) -> Result<()> {
    let mut input = InputSource::from_arg(args.input.as_deref());
    let raw = input.prompt(PROMPT_LABEL)?;
    let rendered = classify_and_render(&raw, &TracingLogger)?;
    tracing::info!(output_lines = rendered.lines().count(), "list renumbered");
    OutputTarget::from_arg(args.out.as_deref()).show(&rendered)
}

/// Read pasted text and print how each line was classified.
pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let mut input = InputSource::from_arg(args.input.as_deref());
    let raw = input.prompt(PROMPT_LABEL)?;
    let logger = TracingLogger;
    let (lines, classification) = read_lines(&raw)
        .and_then(|lines| {
            let classification = classify(&lines, &ListPatterns::new(), &logger)?;
            Ok((lines, classification))
        })
        .inspect_err(|err| logger.error(&err.to_string()))?;
    let report = ClassificationReport::new(&lines, &classification);

    let text = if args.json {
        serde_json::to_string_pretty(&report).context("serialize classification report")?
    } else {
        report.to_text()
    };
    OutputTarget::Stdout.show(&text)
}
