//! `catlog emit`: one message through a throwaway context.

use crate::cli::EmitArgs;
use crate::cli::util::{load_catalog, parse_arg};
use crate::context::{ContextBuilder, LogContext};
use crate::internal::Reporter;
use crate::level::Level;
use crate::message::Request;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

#[must_use]
pub fn cmd_emit(args: &EmitArgs, reporter: &Reporter) -> ExitCode {
    let catalog = match load_catalog(args.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            reporter.report("CLI", &format!("Cannot load catalog: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let level = match args.level.as_deref().map(str::parse::<Level>).transpose() {
        Ok(level) => level,
        Err(e) => {
            reporter.report("CLI", &e.to_string());
            return ExitCode::FAILURE;
        }
    };
    let Ok(threshold) = args.threshold.parse::<Level>() else {
        reporter.report("CLI", &format!("Invalid threshold: {}", args.threshold));
        return ExitCode::FAILURE;
    };

    let context = build_context(args, catalog, threshold);
    let category = context.category(args.category.as_str());
    let request = build_request(args, level);

    if args.dry_run {
        let message = category.build_message(request);
        return match serde_json::to_string_pretty(&message) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                reporter.report("CLI", &format!("Cannot serialize message: {e}"));
                ExitCode::FAILURE
            }
        };
    }

    for _ in 0..args.repeat {
        category.log(request.clone());
    }
    context.flush();
    context.close(Duration::from_secs(1));
    ExitCode::SUCCESS
}

fn build_context(
    args: &EmitArgs,
    catalog: crate::catalog::Catalog,
    threshold: Level,
) -> Arc<LogContext> {
    let mut builder = ContextBuilder::new()
        .catalog(catalog)
        .console()
        .threshold(threshold)
        .colors(!args.no_color)
        .done();

    if let Some(path) = &args.json {
        builder = builder.json().threshold(threshold).path(path).done();
    }
    if let Some(dir) = &args.file {
        builder = builder
            .file()
            .threshold(threshold)
            .base_dir(dir.as_str())
            .done();
    }

    builder.build()
}

fn build_request(args: &EmitArgs, level: Option<Level>) -> Request {
    let mut request = if args.text {
        Request::text(args.id.as_str())
    } else {
        // Ids typed on a command line are usually format strings.
        Request::id(args.id.as_str()).fallback_to_format(true)
    };
    request = request.args(args.args.iter().map(|raw| parse_arg(raw)));
    if let Some(level) = level {
        request = request.level(level);
    }
    if args.once {
        request = request.once();
    }
    request.maybe_source(args.source.as_deref())
}
