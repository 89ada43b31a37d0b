use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use rimsdk::errors::SdkError;

#[derive(Parser)]
#[command(
    name = "rimsdk",
    about = "rimsdk — About.xml build tool for mod projects",
    long_about = "rimsdk generates the About/About.xml descriptor for a mod project, resolving dependencies against locally installed workshop content and sibling projects.",
    version,
    help_template = "{bin} — {about}\n\nUsage: {usage}\n\nCommands:\n{subcommands}\n\nOptions:\n{options}\n"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the About.xml descriptor for a mod project
    Generate(rimsdk::cmds::generate::GenerateArgs),

    /// Look up a mod in the local workshop content folder
    Locate(rimsdk::cmds::locate::LocateArgs),

    /// Check a generated descriptor for problems
    Validate(rimsdk::cmds::validate::ValidateArgs),
}

fn main() -> Result<(), SdkError> {
    dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => rimsdk::cmds::generate::run(args),
        Commands::Locate(args) => rimsdk::cmds::locate::run(args),
        Commands::Validate(args) => rimsdk::cmds::validate::run(args),
    }
}
