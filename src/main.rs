//  ____                    __  __        _
// |  _ \   __ _  ___  ___ |  \/  |  ___ | |_   ___  _ __
// | |_) | / _` |/ __|/ __|| |\/| | / _ \| __| / _ \| '__|
// |  __/ | (_| |\__ \\__ \| |  | ||  __/| |_ |  __/| |
// |_|     \__,_||___/|___/|_|  |_| \___| \__| \___||_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength meter and random password generator.

use std::process::ExitCode;
use clap::{Args, Parser, Subcommand};
use passmeter::configtool::Settings;

mod commands;

use commands::password_gen::GenOptions;

#[derive(Debug, Parser)]
#[command(name = "passmeter")]
#[command(about = "Check password strength and generate secure passwords", long_about = None)]
struct Cli {
    /// Print debug logs
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check password strength
    Check(CheckArgs),

    /// Generate a new random password
    Gen(GenArgs),

    /// Check and generate passwords in a prompt loop
    Interactive,

    /// Show or change generator defaults
    Config {
        /// Print the current settings
        #[arg(long, default_value_t = false)]
        show: bool,

        /// Set the default password length
        #[arg(short, long)]
        length: Option<usize>,

        /// Restore the default settings
        #[arg(long, default_value_t = false)]
        reset: bool,
    },
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Password to check, read from the terminal if omitted
    password: Option<String>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Args)]
struct GenArgs {
    /// Length of the password
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Also check the strength of the generated password
    #[arg(short, long, default_value_t = false)]
    check: bool,
}

impl From<GenArgs> for GenOptions {
    fn from(args: GenArgs) -> Self {
        Self {
            length: args.length,
            no_uppercase: args.no_uppercase,
            no_lowercase: args.no_lowercase,
            no_numbers: args.no_numbers,
            no_special: args.no_special,
            check: args.check,
        }
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Check(args) => commands::testpass::test_password(args.password, args.json),
        Command::Gen(args) => {
            let settings = Settings::load()?;
            commands::password_gen::generate_random(args.into(), &settings)
        }
        Command::Interactive => {
            let settings = Settings::load()?;
            commands::interactive::run_interactive(settings)
        }
        Command::Config { show, length, reset } => {
            commands::settings::manage_settings(show, length, reset)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
