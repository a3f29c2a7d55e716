use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use network_topology::config::LOG_CONFIG_FILE;
use network_topology::inventory::{load_inventory, read_inventory_cache};
use network_topology::output::print_summary;
use network_topology::{build_network, OutputFormat, TopologyService};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "network-topology")]
#[command(about = "Build a network topology from a MAAS style host inventory.")]
struct CommandLine {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the node-link JSON for force-directed visualization
    #[command(alias = "g")]
    Graph { file: PathBuf },
    /// Print a Mermaid diagram
    #[command(alias = "d")]
    Diagram { file: PathBuf },
    /// Render with an explicit format
    Render {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Graph)]
        format: OutputFormat,
    },
    /// Print a summary of subnets and nodes
    #[command(alias = "s")]
    Summary { file: PathBuf },
    /// Fetch the inventory from MAAS (or today's cache) and print it as YAML
    Fetch {
        /// Use this cache file instead of today's
        #[arg(long)]
        cache: Option<String>,
    },
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn render(file: &Path, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let inventory = load_inventory(file)?;
    let output = TopologyService::new(format).render_inventory(&inventory)?;
    println!("{output}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    match CommandLine::parse().command {
        Commands::Graph { file } => render(&file, OutputFormat::Graph)?,
        Commands::Diagram { file } => render(&file, OutputFormat::Mermaid)?,
        Commands::Render { file, format } => render(&file, format)?,
        Commands::Summary { file } => {
            let network = build_network(&load_inventory(&file)?)?;
            print_summary(&network);
        }
        Commands::Fetch { cache } => {
            let inventory = read_inventory_cache(cache.as_deref()).await?;
            print!("{}", serde_yaml::to_string(&inventory)?);
        }
    }

    Ok(())
}
