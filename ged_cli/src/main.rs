//! ged - Graph edit distance CLI
//!
//! Loads two graph documents, pads the smaller one with placeholder
//! vertices and prints the cheapest edit script found by the search.

#[global_allocator]
/// Global allocator using jemalloc.
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

mod args;
mod document;
mod report;

use clap::Parser;
use ged_search::{AllowAll, GedSearch, SameKindOrPlaceholder, pad_to_equal_size};
use tracing::info;

use args::{Args, OutputFormat};
use document::GraphDocument;
use report::Report;

/// Executes one diff.
///
/// This function:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Loads and pads both graphs
/// 4. Runs the search with the selected oracle
/// 5. Prints the report
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut source = GraphDocument::load(&args.source)?.into_graph()?;
    let mut target = GraphDocument::load(&args.target)?.into_graph()?;
    info!(
        "Loaded graphs: source {} vertices / {} edges, target {} vertices / {} edges",
        source.vertex_count(),
        source.edge_count(),
        target.vertex_count(),
        target.edge_count()
    );

    let padded = pad_to_equal_size(&mut source, &mut target);
    info!("Added {} placeholder vertices", padded);

    let config = args.to_config();
    let result = if args.same_kind_only {
        let oracle = SameKindOrPlaceholder::new(&source, &target);
        GedSearch::new(&source, &target, &oracle).config(config).run()?
    } else {
        GedSearch::new(&source, &target, &AllowAll).config(config).run()?
    };

    let report = Report::new(&result, &source, &target);
    match args.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
