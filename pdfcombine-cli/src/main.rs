//! pdfcombine - Flexibly combine (parts of) PDF files.

mod cli;

use std::ffi::OsString;
use std::process;

use pdfcombine::output::{OutputFormatter, display_summary};
use pdfcombine::{ArgumentParser, CombineError, CombinePipeline, Invocation, USAGE};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::debug!("{} v{}", pdfcombine::NAME, pdfcombine::VERSION);

    let tokens: Vec<OsString> = std::env::args_os().skip(1).collect();
    let formatter = OutputFormatter::new(false);

    if let Err(err) = run(&tokens, &formatter).await {
        formatter.error(&err);
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(tokens: &[OsString], formatter: &OutputFormatter) -> Result<(), CombineError> {
    if cli::is_version_request(tokens) {
        formatter.usage(&cli::version_text());
        return Ok(());
    }

    match ArgumentParser::new().parse(tokens)? {
        Invocation::Help => formatter.usage(USAGE),
        Invocation::Combine(plan) => {
            let summary = CombinePipeline::new(formatter).run(&plan).await?;
            display_summary(formatter, &summary);
        }
    }

    Ok(())
}
