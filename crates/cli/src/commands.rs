use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline: extract, transform, load
    Run {
        #[arg(long, help = "Source kind: \"sqlite\" or \"csv\"", default_value = "sqlite")]
        source: String,

        #[arg(long, help = "Path to the Northwind database or flat CSV extract")]
        input: String,

        #[arg(
            long,
            help = "Directory for the enriched table and reports",
            default_value = "data/processed"
        )]
        output_dir: String,

        #[arg(long, help = "Process only the first N extracted rows")]
        limit: Option<usize>,
    },
    /// Extract and transform only, reporting data quality
    Quality {
        #[arg(long, help = "Source kind: \"sqlite\" or \"csv\"", default_value = "sqlite")]
        source: String,

        #[arg(long, help = "Path to the Northwind database or flat CSV extract")]
        input: String,

        #[arg(
            long,
            help = "If specified, writes the JSON report to this file instead of stdout"
        )]
        output: Option<String>,

        #[arg(long, help = "Process only the first N extracted rows")]
        limit: Option<usize>,
    },
    /// Print the expected input schema as JSON
    Schema,
}
