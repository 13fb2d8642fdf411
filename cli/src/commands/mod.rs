pub mod run;
pub mod shared;
pub mod show;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run a Bru file")]
    Run(run::RunArgs),
    #[command(about = "Show the resolved request of a Bru file without sending it")]
    Show(show::ShowArgs),
}
