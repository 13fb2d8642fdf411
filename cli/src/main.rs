use brux::commands::{self, Commands};
use brux::core::error::BruError;
use brux::core::exit_code::ExitCode;
use brux::core::logger::Logger;
use clap::Parser;

#[derive(Parser)]
#[command(name = "brux")]
#[command(about = "Run HTTP requests described in Bruno .bru files")]
#[command(version = brux::core::version::app_version())]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

async fn run() -> Result<(), BruError> {
    let args = Args::parse();
    Logger::init(args.debug);

    match args.command {
        Commands::Run(run_args) => commands::run::execute_run(&run_args).await,
        Commands::Show(show_args) => commands::show::execute_show(&show_args),
    }
}
