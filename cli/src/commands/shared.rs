use crate::commands::validators;
use crate::core::formatter::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'f',
        long = "format",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct FileArgs {
    #[arg(
        value_name = "FILE",
        help = "Path to the .bru file",
        value_parser = validators::validate_path_exists
    )]
    pub file: String,
}

#[derive(Debug, Args)]
pub struct EnvArgs {
    #[arg(
        short = 'e',
        long = "env",
        alias = "environment",
        help = "Environment name (file name under the 'environments' directory, without .bru)",
        value_parser = validators::validate_name
    )]
    pub environment: Option<String>,
}
