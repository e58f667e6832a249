use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "deskpad")]
#[command(about = "A terminal productivity dashboard", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Section to open on startup (or set DESKPAD_SECTION env var)
    #[arg(long, value_name = "SECTION", env = "DESKPAD_SECTION")]
    pub section: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
