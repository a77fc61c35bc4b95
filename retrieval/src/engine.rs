//! Grounded-summary retrieval pipeline.
//!
//! Chunks a document and a query, embeds both sides, ranks document chunks
//! by cosine similarity to the query, and answers the query with a chat
//! completion grounded in one relevant chunk. The pipeline is a single
//! linear pass: no retry, no caching, no rate limiting.

use rand::Rng;
use tracing::{debug, info};

use quill_api::chat::Message;

use crate::Embedding;
use crate::backend::{CompletionBackend, EmbeddingBackend};
use crate::chunker::Chunker;
use crate::error::{Result, RetrievalError};
use crate::ranker::rank;

const SYSTEM_INSTRUCTION: &str =
    "You summarize the answer to the user's question using the provided content, \
     clearly and concisely.";

fn grounding_prompt(query: &str, chunk: &str) -> String {
    format!(
        "Write a short, clear answer to the question {query} based on the \
         following content: {chunk}"
    )
}

/// Composes chunking, embedding, ranking, and summarization.
pub struct RetrievalEngine<E, C> {
    chunker: Chunker,
    embeddings: E,
    completions: C,
}

impl<E, C> RetrievalEngine<E, C>
where
    E: EmbeddingBackend,
    C: CompletionBackend,
{
    /// Create an engine with the default chunk size.
    pub fn new(embeddings: E, completions: C) -> Self {
        Self {
            chunker: Chunker::default(),
            embeddings,
            completions,
        }
    }

    /// Set the chunk size in tokens; zero falls back to the default.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunker = Chunker::new(chunk_size);
        self
    }

    /// Document chunks ordered by similarity to the query, most relevant
    /// first.
    ///
    /// Both sides are chunked and embedded; any collaborator failure
    /// propagates immediately. Ranking compares the first query vector
    /// against every document vector.
    pub async fn relevant_chunks(&self, document: &str, query: &str) -> Result<Vec<String>> {
        let query_chunks = self.chunker.chunk(query);
        let document_chunks = self.chunker.chunk(document);

        debug!(
            "ranking {} document chunk(s) against {} query chunk(s)",
            document_chunks.len(),
            query_chunks.len()
        );

        let query_vectors = self.embed_chunks(&query_chunks).await?;
        let document_vectors = self.embed_chunks(&document_chunks).await?;

        let ranked = rank(&query_vectors, &document_vectors)?;
        Ok(ranked
            .into_iter()
            .map(|index| document_chunks[index].clone())
            .collect())
    }

    /// Embed chunks and verify the backend returned one vector per input.
    ///
    /// Ranked indices address the chunk list, so a vector count that
    /// disagrees with the input count must fail here rather than later.
    async fn embed_chunks(&self, chunks: &[String]) -> Result<Vec<Embedding>> {
        let vectors = self.embeddings.embed(chunks).await?;
        if vectors.len() != chunks.len() {
            return Err(RetrievalError::EmbeddingCountMismatch {
                expected: chunks.len(),
                actual: vectors.len(),
            });
        }
        Ok(vectors)
    }

    /// Answer the query grounded in one of the given chunks.
    ///
    /// The chunk is picked uniformly at random for variety, not by rank.
    /// An empty chunk list fails with `NoRelevantChunks` before any
    /// network call.
    pub async fn summarize_chunks(&self, chunks: &[String], query: &str) -> Result<String> {
        if chunks.is_empty() {
            return Err(RetrievalError::NoRelevantChunks);
        }

        let index = rand::rng().random_range(0..chunks.len());
        let chunk = &chunks[index];
        debug!("grounding summary on chunk {index} of {}", chunks.len());

        let messages = vec![
            Message::system(SYSTEM_INSTRUCTION),
            Message::user(grounding_prompt(query, chunk)),
        ];
        self.completions.complete(messages).await
    }

    /// Chunk, embed, rank, and summarize in one pass.
    pub async fn summarize_relevant(&self, document: &str, query: &str) -> Result<String> {
        let chunks = self.relevant_chunks(document, query).await?;
        info!("retrieved {} relevant chunk(s)", chunks.len());
        self.summarize_chunks(&chunks, query).await
    }
}
