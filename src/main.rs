use clap::Parser;

use rocket_notify::config::Args;
use rocket_notify::error::NotifyError;
use rocket_notify::fields::build_field_map;
use rocket_notify::message::compose_message;
use rocket_notify::webhook::send_notification;

#[tokio::main]
async fn main() {
    // Icinga2 notification scripts conventionally exit 1 on bad arguments.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(), // --help / --version
    };

    if let Err(e) = run(&args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), NotifyError> {
    let fields = build_field_map(&args.field);
    let message = compose_message(&fields)?;

    let client = reqwest::Client::new();
    send_notification(&client, &args.url, &message).await
}
