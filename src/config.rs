use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The URL of the incoming webhook generated in the Rocket.Chat administration
    #[arg(short = 'u', long)]
    pub url: String,

    /// Notification field as KEY=VALUE, repeatable. These get filled in by Icinga2
    #[arg(short = 'f', long = "field", required = true)]
    pub field: Vec<String>,
}
