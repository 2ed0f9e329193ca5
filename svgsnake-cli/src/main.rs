#![forbid(unsafe_code)]

use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;
use svgsnake::SvgsnakeOptions;

mod cli;

fn main() -> ExitCode {
    env_logger::builder()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(LevelFilter::Info)
        .init();

    let args = cli::SvgsnakeCli::parse();

    if let Some(completion_generator) = args.completions {
        cli::SvgsnakeCli::print_completions(completion_generator);
        return ExitCode::SUCCESS;
    }

    let options = SvgsnakeOptions {
        directory: args.directory,
        dry_run: args.dry_run,
    };

    svgsnake::run(options)
}
