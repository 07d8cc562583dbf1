use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// TrailService command-line client
#[derive(Parser)]
#[command(name = "trails")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TrailService base URL
    #[arg(
        short,
        long,
        env = "TRAILS_API_URL",
        default_value = trails::DEFAULT_BASE_URL,
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    Users {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show one user by name
    User {
        /// User name, e.g. "Ada Lovelace"
        name: String,
    },

    /// List all trails
    Trails {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List location points of every trail, or of one trail
    Points {
        /// Trail name (all trails if omitted)
        trail: Option<String>,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the comment ids of a trail and count the real comments
    Comments {
        /// Trail name
        trail: String,
    },

    /// Plot a trail as an SVG scatter coloured by elevation
    Plot {
        /// Trail name
        trail: String,

        /// Output file (defaults to the trail name with .svg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a marker map of a trail
    Map {
        /// Trail name
        trail: String,

        /// Output file (defaults to the trail name with .html or .geojson)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write GeoJSON instead of a Leaflet HTML page
        #[arg(short, long)]
        geojson: bool,
    },

    /// Export the extracted fields of a trail as CSV
    Export {
        /// Trail name
        trail: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the read endpoints answer 200 OK
    Check {
        /// Trail name used for the per-trail endpoint
        #[arg(default_value = commands::demo::CADOVER)]
        trail: String,
    },

    /// Walk through every endpoint, plot a trail and build its map
    Demo {
        /// Directory for the plot and map files
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trails=info,trails_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let url = cli.url;

    match cli.command {
        Commands::Users { json } => commands::fetch::list_users(&url, json),
        Commands::User { name } => commands::fetch::show_user(&url, &name),
        Commands::Trails { json } => commands::fetch::list_trails(&url, json),
        Commands::Points { trail, json } => {
            commands::fetch::list_points(&url, trail.as_deref(), json)
        }
        Commands::Comments { trail } => commands::comments::run(&url, &trail),
        Commands::Plot { trail, output } => commands::plot::run(&url, &trail, output),
        Commands::Map {
            trail,
            output,
            geojson,
        } => commands::map::run(&url, &trail, output, geojson),
        Commands::Export { trail, output } => commands::export::run(&url, &trail, output),
        Commands::Check { trail } => commands::check::run(&url, &trail),
        Commands::Demo { output_dir } => commands::demo::run(&url, &output_dir),
    }
}
