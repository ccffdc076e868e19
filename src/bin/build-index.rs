//! One-shot batch index build.
//!
//! Usage: `build-index <docs-dir> <artifact-dir>` with `OPENAI_API_KEY` set.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use ragbot::openai::OpenAIEmbeddingProvider;
use ragbot::{IndexPipeline, RagConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (Some(docs_dir), Some(artifact_dir)) = (args.next(), args.next()) else {
        bail!("usage: build-index <docs-dir> <artifact-dir>");
    };

    let embedder =
        Arc::new(OpenAIEmbeddingProvider::from_env().context("embedding provider setup failed")?);

    let pipeline = IndexPipeline::builder()
        .config(RagConfig::default())
        .embedding_provider(embedder)
        .build()?;

    let report = pipeline.build(Path::new(&docs_dir), Path::new(&artifact_dir)).await?;
    println!("indexed {} chunks from {} documents into {artifact_dir}", report.chunks, report.documents);
    Ok(())
}
