use std::{collections::HashSet, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use entitywalk::{
    fs::{DocumentEntity, DocumentGraph, Relation},
    graph::GraphNode,
    traversal::GraphTraversal,
};
use tracing_subscriber::EnvFilter;

type DocumentNode = GraphNode<Arc<DocumentEntity>, Relation>;

/// Walks an entity graph document and prints every entity once, depth-first
#[derive(Parser, Debug)]
#[command(name = "entitywalk")]
#[command(about = "Depth-first walk over an entity graph document", long_about = None)]
struct Args {
    /// Path to the graph document (JSON)
    #[arg(short, long)]
    graph: PathBuf,

    /// Use the suspendable traversal instead of the blocking one
    #[arg(short, long)]
    suspendable: bool,

    /// Entity ids whose children should not be visited (comma-separated list, e.g., "line-1,line-2")
    #[arg(short, long, value_delimiter = ',')]
    prune: Vec<String>,
}

fn render(node: &DocumentNode, pruned: &HashSet<String>) -> bool {
    let entity = node.entity();
    let indent = "  ".repeat(node.depth());
    match node.relationship() {
        Some(relation) => println!("{indent}{relation} -> {entity}"),
        None => println!("{indent}{entity}"),
    }
    !pruned.contains(entity.id())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let graph = DocumentGraph::load_from_path(&args.graph)
        .with_context(|| format!("loading {}", args.graph.display()))?;
    let root = graph.root();
    let pruned: HashSet<String> = args.prune.into_iter().collect();
    let engine = GraphTraversal::new(graph);

    let mut visited = 0usize;
    if args.suspendable {
        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        runtime.block_on(engine.traverse_async(root, async |node: &DocumentNode| {
            visited += 1;
            tokio::task::yield_now().await;
            Ok::<_, anyhow::Error>(render(node, &pruned))
        }))?;
    } else {
        engine.traverse(root, |node: &DocumentNode| {
            visited += 1;
            Ok::<_, anyhow::Error>(render(node, &pruned))
        })?;
    }

    tracing::info!(visited, total = engine.enumerator().len(), "walk complete");
    Ok(())
}
