use clap::{Parser, Subcommand};
use solcheck_lib::{log_level_for, resolve_delay, resolve_prefill};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "solcheck",
    about = "Solana address validator",
    version,
    long_about = "Checks whether text looks like a valid Solana wallet address.\n\nExamples:\n  solcheck                                   # Open the interactive form\n  solcheck validate <ADDRESS>                # Validate one or more addresses\n  solcheck validate --file addrs.txt --json  # Validate a file, print JSON\n  solcheck tui --test <ADDRESS>              # Open the form pre-filled and validated\n  solcheck copy <ADDRESS>                    # Copy a valid address to the clipboard"
)]
struct Solcheck {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in verbose mode with detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in debug mode with extensive details
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate one or more addresses
    Validate {
        /// Addresses to validate
        addresses: Vec<String>,

        /// Read newline-separated addresses from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive validation form
    Tui {
        /// Address to pre-fill and validate on startup
        #[arg(short, long)]
        test: Option<String>,

        /// Page URL whose `test` query parameter pre-fills the form
        #[arg(long)]
        url: Option<String>,

        /// Delay before a submitted address is validated, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Show the built-in sample addresses
    Samples,

    /// Validate an address and copy it to the clipboard
    Copy {
        /// Address to copy
        address: String,
    },
}

async fn open_tui(prefill: Option<String>, delay_ms: Option<u64>) {
    if let Err(e) = ui::run_solcheck_tui(prefill, resolve_delay(delay_ms)).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[tokio::main]
async fn main() {
    let cli = Solcheck::parse();
    let verbose = cli.verbose;
    let debug = cli.debug;

    logging::set_log_level(log_level_for(verbose, debug));
    if debug {
        logging::debug("Debug mode enabled - showing detailed logs");
    } else if verbose {
        logging::info("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Validate {
            addresses,
            file,
            json,
        }) => {
            let mut candidates = addresses;
            if let Some(path) = &file {
                match ui::read_candidates(path) {
                    Ok(from_file) => candidates.extend(from_file),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }

            match ui::validate_addresses(&candidates, json, verbose || debug) {
                Ok(true) => {}
                Ok(false) => std::process::exit(1),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Tui {
            test,
            url,
            delay_ms,
        }) => {
            let prefill = resolve_prefill(test.as_deref(), url.as_deref());
            open_tui(prefill, delay_ms).await;
        }

        Some(Commands::Samples) => ui::print_samples(),

        Some(Commands::Copy { address }) => {
            if let Err(e) = ui::copy_address(&address).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }

        None => open_tui(None, None).await,
    }
}
