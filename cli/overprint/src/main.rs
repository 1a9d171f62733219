//! overprint CLI — prints one line per `print` overload and explains which
//! overload a given argument type binds.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "overprint",
    version,
    about = "Shows which print overload binds each argument category"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Call every print overload once, in fixed order (the default)
    Demo {
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// List the print overload set
    Overloads {
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Show which overload an lvalue argument of the given C++ type binds
    Resolve {
        /// Argument type, e.g. "unsigned int" or "const char*"
        arg_type: String,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None => commands::demo::run(None),
        Some(Commands::Demo { format }) => commands::demo::run(format.as_deref()),
        Some(Commands::Overloads { format }) => commands::overloads::run(format.as_deref()),
        Some(Commands::Resolve { arg_type, format }) => {
            commands::resolve::run(&arg_type, format.as_deref())
        }
    }
}
