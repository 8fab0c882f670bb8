//! CLI definition using clap

use clap::{Parser, Subcommand};
use skiphire_types::OutputFormat;

#[derive(Parser)]
#[command(name = "skiphire")]
#[command(version)]
#[command(about = "Browse and compare waste skips by location")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Location postcode. Uses config value if not specified.
    #[arg(long, global = true)]
    pub postcode: Option<String>,

    /// Location area. Uses config value if not specified.
    #[arg(long, global = true)]
    pub area: Option<String>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List skips available at the location, filtered and sorted by size
    List {
        /// Only show skips allowed on a public road
        #[arg(long)]
        road_only: bool,

        /// Heavy-waste sub-categories present in the load
        /// (soil, concrete, bricks, rubble); restricts to heavy-capable skips
        #[arg(long = "heavy", value_name = "TYPE")]
        heavy: Vec<String>,

        /// Minimum skip size in cubic yards
        #[arg(long)]
        min_size: Option<u32>,

        /// Maximum skip size in cubic yards
        #[arg(long)]
        max_size: Option<u32>,

        /// Minimum price before VAT
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price before VAT
        #[arg(long)]
        max_price: Option<f64>,
    },

    /// Compare up to three skips side by side
    Compare {
        /// Skip ids to compare. More than three keeps the last three added.
        #[arg(required = true)]
        ids: Vec<u32>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the default postcode
        #[arg(long)]
        set_postcode: Option<String>,

        /// Set the default area
        #[arg(long)]
        set_area: Option<String>,

        /// Set the skip source base URL
        #[arg(long)]
        set_base_url: Option<String>,

        /// Set the default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,
    },
}
