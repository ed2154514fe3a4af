mod action;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log directive, using the tracing env filter syntax.
    #[arg(long, env = "LOG", default_value = "provisioning=info,tower_http=info")]
    log: String,
    /// Enables colors in the logs.
    #[arg(long, env = "LOG_COLOR", default_value_t = false)]
    log_color: bool,
    #[command(subcommand)]
    action: action::Action,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(err) = provisioning::init_logs(&args.log, args.log_color) {
        eprintln!("unable to initialize logs: {err:?}");
    }
    if let Err(err) = args.action.execute().await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
