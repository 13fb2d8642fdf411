use crate::client::{BruClient, BruConfig};
use crate::commands::shared::{EnvArgs, FileArgs, OutputArgs};
use crate::core::error::BruError;
use crate::core::formatter::Formatter;
use clap::{ArgAction, Args};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub file: FileArgs,

    #[command(flatten)]
    pub env_args: EnvArgs,

    #[arg(
        short = 's',
        long = "save-output",
        help = "Save the response body to a file",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub save_output: bool,

    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "PATH",
        help = "Output file path (defaults to a file in the temp dir)"
    )]
    pub output_file: Option<PathBuf>,

    #[arg(
        short = 'p',
        long = "pretty-print",
        help = "Pretty print JSON output",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub pretty_print: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub async fn execute_run(args: &RunArgs) -> Result<(), BruError> {
    tracing::debug!(file_path = %args.file.file, "Running bru file");
    let config = BruConfig::new(
        &args.file.file,
        args.env_args.environment.clone(),
        args.save_output,
        args.output_file.clone(),
        args.pretty_print,
    )?;

    let client = BruClient::load(config)?;
    let result = client.run().await?;

    let formatter = Formatter::new(args.output.format);
    print!("{}", formatter.format(&result));

    Ok(())
}
