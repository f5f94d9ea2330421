use anyhow::Result;
use clap::{Parser, Subcommand};

use spendscope::config::SpendscopePaths;
use spendscope::display;
use spendscope::registry::CategoryRegistry;
use spendscope::reports::CategoryFilter;
use spendscope::session::Session;

#[derive(Parser)]
#[command(
    name = "spendscope",
    version,
    about = "Terminal personal-finance dashboard for CSV transaction exports",
    long_about = "spendscope loads a personal-finance CSV export (date, description, \
                  amount, category, currency, account), classifies rows into expenses \
                  and income, and renders summary tables and charts in the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a CSV transaction export
    Summary {
        /// Path to the CSV file
        file: String,
        /// Restrict expenses to these categories (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        categories: Vec<String>,
    },

    /// Category registry commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Show current configuration and paths
    Config,
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// List known category names
    List,
    /// Add a new category name
    Add {
        /// Category name
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendscopePaths::new()?;
    paths.ensure_directories()?;

    match cli.command {
        Some(Commands::Summary { file, categories }) => {
            let session = Session::load(&file)?;
            let filter = if categories.is_empty() {
                CategoryFilter::All
            } else {
                CategoryFilter::only(categories)
            };
            let summary = session.summarize(&filter);
            print!("{}", display::render_summary(&summary));
        }
        Some(Commands::Category(cmd)) => {
            let mut registry = CategoryRegistry::load(paths.categories_file());
            match cmd {
                CategoryCommands::List => {
                    for name in registry.names() {
                        println!("{}", name);
                    }
                }
                CategoryCommands::Add { name } => {
                    if registry.add(&name)? {
                        println!("Added category '{}'", name.trim());
                    } else {
                        println!("Category '{}' already exists or is empty", name.trim());
                    }
                }
            }
        }
        Some(Commands::Config) => {
            println!("spendscope Configuration");
            println!("========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Category file:  {}", paths.categories_file().display());
        }
        None => {
            println!("spendscope - Terminal personal-finance dashboard");
            println!();
            println!("Run 'spendscope --help' for usage information.");
            println!("Run 'spendscope summary <file.csv>' to summarize an export.");
        }
    }

    Ok(())
}
