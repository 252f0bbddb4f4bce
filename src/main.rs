use clap::Parser;
use miette::{IntoDiagnostic, Result};
use orderdesk::application::session::OrderSession;
use orderdesk::domain::ports::OrderSinkBox;
use orderdesk::infrastructure::text_file::TextFileOrderSink;
use orderdesk::interfaces::console::Console;
use orderdesk::telemetry::setup_tracing;
use std::path::PathBuf;
use tokio::io::{self, BufReader};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File that finished orders are appended to
    #[arg(long, default_value = "orders.txt")]
    orders_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing();

    let sink: OrderSinkBox = Box::new(TextFileOrderSink::new(cli.orders_file));
    let session = OrderSession::new(sink);

    let mut console = Console::new(BufReader::new(io::stdin()), io::stdout());
    session.run(&mut console).await.into_diagnostic()?;

    Ok(())
}
