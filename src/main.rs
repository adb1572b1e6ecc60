use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use addressbook::cli::{
    finish_session, handle_birthdays_command, handle_export_command, handle_history_command,
    handle_list_command, ExportFormat, Shell,
};
use addressbook::config::{paths::AddressBookPaths, settings::Settings};
use addressbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "addressbook",
    version,
    about = "Terminal contact manager with birthday reminders",
    long_about = "A personal address book for the terminal. Keep names, phone numbers \
                  and birthdays, and see who to congratulate in the coming week. \
                  Run without a subcommand to start the interactive shell."
)]
struct Cli {
    /// Directory holding settings, contacts and the audit log
    #[arg(long, global = true, env = "ADDRESSBOOK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,

    /// List all contacts
    #[command(alias = "all")]
    List,

    /// Show upcoming birthdays
    Birthdays {
        /// Days to look ahead (defaults to the configured window)
        #[arg(short, long)]
        days: Option<u32>,
        /// Reference date (DD-MM-YYYY), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the address book to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => AddressBookPaths::with_base_dir(dir),
        None => AddressBookPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.set_audit_enabled(settings.audit_enabled);
    storage.load_all()?;
    let storage = Arc::new(storage);

    match cli.command {
        None | Some(Commands::Shell) => {
            save_on_interrupt(Arc::clone(&storage))?;
            let shell = Shell::new(&storage, &settings);
            shell.run(io::stdin().lock(), &mut io::stdout())?;
        }
        Some(Commands::List) => handle_list_command(&storage)?,
        Some(Commands::Birthdays { days, date, output }) => {
            handle_birthdays_command(&storage, &settings, days, date, output)?;
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => handle_export_command(&storage, output, format, pretty)?,
        Some(Commands::History { limit }) => handle_history_command(&storage, limit)?,
        Some(Commands::Config) => {
            println!("Address Book Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Contacts file:  {}", paths.contacts_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Birthday window (days): {}", settings.birthday_window_days);
            println!("  Autosave:               {}", settings.autosave);
            println!("  Audit enabled:          {}", settings.audit_enabled);
        }
    }

    Ok(())
}

/// Ctrl-C in the shell saves the address book and leaves like `exit`
fn save_on_interrupt(storage: Arc<Storage>) -> Result<()> {
    ctrlc::set_handler(move || {
        let code = match finish_session(&storage) {
            Ok(farewell) => {
                println!();
                println!("{}", farewell);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
        process::exit(code);
    })?;
    Ok(())
}
