use clap::{CommandFactory, Parser};
use clap_complete::{Generator, Shell};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct SvgsnakeCli {
    #[clap(
        default_value = ".",
        help = "The directory containing the SVG files to rename. Defaults to the current working directory."
    )]
    pub(crate) directory: PathBuf,

    #[clap(
        long,
        default_value_t = false,
        help = "Only show what would be renamed, without touching any files."
    )]
    pub(crate) dry_run: bool,

    #[clap(
        long,
        value_enum,
        help = "Print the completion script for the given shell and exit."
    )]
    pub(crate) completions: Option<Shell>,
}

impl SvgsnakeCli {
    pub(crate) fn print_completions(completion_generator: impl Generator) {
        let mut command = Self::command();
        let command_name = command.get_name().to_string();

        clap_complete::generate(
            completion_generator,
            &mut command,
            command_name,
            &mut std::io::stdout(),
        );
    }
}
