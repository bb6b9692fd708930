use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sarabun::{AppError, DraftOptions, RequestType};

#[derive(Parser)]
#[command(name = "sarabun")]
#[command(version)]
#[command(
    about = "Draft Thai asset-management memos (บันทึกข้อความ) with an AI assistant",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft a memo from the interactive form or a request file
    #[clap(visible_alias = "d")]
    Draft {
        /// Load the request from a TOML file instead of the interactive form
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,
        /// Write the Word (.doc) export to PATH (file or directory)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        /// Copy the generated memo to the clipboard
        #[arg(long)]
        copy: bool,
        /// Open the print preview with the system browser
        #[arg(long)]
        print_preview: bool,
        /// Print the compiled prompt and exit without calling the API
        #[arg(long)]
        show_prompt: bool,
    },
    /// Show the supporting-document checklist for a request type
    #[clap(visible_alias = "c")]
    Checklist {
        /// Request type: update or disposal
        #[arg(long, default_value = "update")]
        request_type: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Draft { from, out, copy, print_preview, show_prompt } => {
            let options = DraftOptions { from, out, copy, print_preview, show_prompt };
            sarabun::draft(options).map(|_| ())
        }
        Commands::Checklist { request_type } => {
            RequestType::parse(&request_type).map(sarabun::checklist)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
