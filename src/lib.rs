//! # ragbot
//!
//! Retrieval-grounded chat core: build a vector index over a directory of
//! text and PDF documents, then retrieve the nearest chunks at query time
//! as grounding context for a downstream completion call.
//!
//! ## Overview
//!
//! Two workflows share one pair of persisted artifacts:
//!
//! - **Offline build** — [`IndexPipeline`] loads documents, chunks them with
//!   a [`FixedSizeChunker`], embeds every chunk through an
//!   [`EmbeddingProvider`], and persists a [`VectorIndex`] plus the parallel
//!   chunk metadata. A build fully replaces the previous artifacts and
//!   persists nothing on failure.
//! - **Online serving** — [`Retriever`] loads the artifacts once, embeds
//!   each incoming query, and returns the nearest chunks with source
//!   attribution. [`ChatEngine`] composes that context into a prompt for an
//!   opaque [`CompletionModel`], degrading to an ungrounded reply whenever
//!   retrieval fails or finds nothing.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ragbot::openai::{OpenAIChatModel, OpenAIEmbeddingProvider};
//! use ragbot::{ChatEngine, IndexPipeline, RagConfig, Retriever};
//!
//! let embedder = Arc::new(OpenAIEmbeddingProvider::from_env()?);
//!
//! // One-shot batch build.
//! let pipeline = IndexPipeline::builder()
//!     .config(RagConfig::default())
//!     .embedding_provider(embedder.clone())
//!     .build()?;
//! pipeline.build("knowledge_base".as_ref(), "vector_index".as_ref()).await?;
//!
//! // Serving: load once, share across tasks.
//! let retriever = Arc::new(Retriever::open("vector_index".as_ref(), embedder)?);
//! let engine = ChatEngine::new(Arc::new(OpenAIChatModel::from_env()?), "You are a helpful assistant.")
//!     .with_retriever(retriever);
//! let reply = engine.reply("How much PIT should I pay on 300,000?").await?;
//! ```

pub mod chat;
pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod index;
pub mod loader;
#[cfg(feature = "openai")]
pub mod openai;
pub mod pipeline;
pub mod retriever;
pub mod store;

pub use chat::{ChatEngine, CompletionModel};
pub use chunking::FixedSizeChunker;
pub use config::{RagConfig, RagConfigBuilder};
pub use document::{ChunkRecord, Document, RetrievedChunk};
pub use embedding::EmbeddingProvider;
pub use error::{RagbotError, Result};
pub use index::VectorIndex;
pub use pipeline::{BuildReport, IndexPipeline, IndexPipelineBuilder};
pub use retriever::Retriever;
