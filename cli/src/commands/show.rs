use crate::client::{BruClient, BruConfig};
use crate::commands::shared::{EnvArgs, FileArgs, OutputArgs};
use crate::core::error::BruError;
use crate::core::formatter::Formatter;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub file: FileArgs,

    #[command(flatten)]
    pub env_args: EnvArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_show(args: &ShowArgs) -> Result<(), BruError> {
    let config = BruConfig::for_show(&args.file.file, args.env_args.environment.clone())?;
    let client = BruClient::load(config)?;
    let view = client.show()?;

    let formatter = Formatter::new(args.output.format);
    print!("{}", formatter.format(&view));

    Ok(())
}
