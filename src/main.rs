use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use bankdesk::config::{paths::BankPaths, settings::Settings};
use bankdesk::console::{Console, SecretSource};
use bankdesk::gateway::LocalGateway;
use bankdesk::session::{Menu, Navigator, Session};
use bankdesk::storage::{seed_demo_data, Storage};

#[derive(Parser)]
#[command(
    name = "bankdesk",
    version,
    about = "Interactive console for a small banking back office",
    long_about = "bankdesk lets customers log in to view their accounts, pay services \
                  and find ATMs, and lets managers create users, accounts, services \
                  and ATMs or run data export/import, all from a text console."
)]
struct Cli {
    /// Start in the manager menu instead of the customer login
    #[arg(long)]
    manager: bool,

    /// Data directory
    #[arg(long, env = "BANKDESK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log filter (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, settings and demo data
    Init,

    /// Show current configuration and paths
    Config,

    /// Show the most recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the menus on stdout stay readable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let paths = match cli.data_dir {
        Some(dir) => BankPaths::with_base_dir(dir),
        None => BankPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing bankdesk at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            if seed_demo_data(&storage)? {
                println!("Demo customer created: login 'alice', password 'secret123'");
                println!("Demo service #1 and one ATM registered.");
            } else {
                println!("Existing data found, nothing seeded.");
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("bankdesk Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Exit manager menu after user creation: {}", settings.exit_on_user_created);
            println!("  Default service ID: {}", settings.default_service_id);
            println!("  Mask password input: {}", settings.mask_password);
        }
        Some(Commands::Audit { limit }) => {
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        None => run_console(&storage, settings, cli.manager),
    }

    Ok(())
}

fn run_console(storage: &Storage, settings: Settings, manager: bool) {
    let gateway = LocalGateway::new(storage);

    let stdin = io::stdin();
    let secrets = if settings.mask_password && stdin.is_terminal() {
        SecretSource::Terminal
    } else {
        SecretSource::Inline
    };
    let console = Console::new(stdin.lock(), io::stdout().lock(), secrets);

    let (session, initial) = if manager {
        (Session::manager(), Menu::ManagerHome)
    } else {
        (Session::guest(), Menu::Unauthorized)
    };

    let mut navigator = Navigator::new(&gateway, console, settings, session);
    let result = navigator.run(initial);
    drop(navigator);

    if let Err(e) = result {
        log::error!("console terminated: {}", e);
        eprintln!("Fatal: {}", e);
        std::process::exit(1);
    }
}
