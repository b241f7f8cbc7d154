pub mod request;
pub mod shared;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List all the requests in the collection, grouped by folder")]
    List(request::ListArgs),
    #[command(about = "Show a request with its variables substituted, without sending it")]
    Show(request::ShowArgs),
    #[command(about = "Run the specified request")]
    Run(request::RunArgs),
}
