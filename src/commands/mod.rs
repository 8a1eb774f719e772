pub mod apply;
pub mod generate;
pub mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Apply a schedule file to the remote service", arg_required_else_help = true)]
    Apply(apply::ApplyArgs),
    #[command(about = "Generate a monthly schedule template", arg_required_else_help = true)]
    Generate(generate::GenerateArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Apply(args) => apply::cmd(args).await,
            Commands::Generate(args) => generate::cmd(args).await,
        }
    }
}
