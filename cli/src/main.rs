use clap::Parser;

mod client;
mod collection;
mod commands;
mod core;

use commands::Commands;
use crate::core::error::ClirkError;
use crate::core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "clirk")]
#[command(about = "List and run the requests of an exported Postman collection.")]
#[command(version = crate::core::version::app_version())]
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
        if let Some((status, body)) = e.response_details() {
            eprintln!("Response status: {status}");
            if !body.is_empty() {
                eprintln!("{}", crate::core::json::pretty_body(body));
            }
        }
        std::process::exit(ExitCode::from(&e).code());
    }
}

async fn run() -> Result<(), ClirkError> {
    let args = Args::parse();
    crate::core::logger::Logger::init(args.debug)?;

    match args.command {
        Commands::List(list_args) => commands::request::execute_list(&list_args),
        Commands::Show(show_args) => commands::request::execute_show(&show_args),
        Commands::Run(run_args) => commands::request::execute_run(&run_args).await,
    }
}
