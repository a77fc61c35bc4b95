//! Grounded summary demo against the live API.
//!
//! Requires `OPENAI_API_KEY`. Run with:
//!
//! ```sh
//! cargo run -p quill-retrieval --example grounded_summary
//! ```

use quill_api::Client;
use quill_retrieval::{ApiBackend, RetrievalEngine};

const DOCUMENT: &str = "The sky is blue. The grass is green. The sun rises in \
                        the east and sets in the west. At night the sky turns \
                        dark and the stars come out.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::new();
    anyhow::ensure!(client.is_available(), "OPENAI_API_KEY is not set");

    let backend = ApiBackend::new(client);
    let engine = RetrievalEngine::new(backend.clone(), backend).with_chunk_size(16);

    let query = "What color is the sky?";
    let summary = engine.summarize_relevant(DOCUMENT, query).await?;

    println!("Q: {query}");
    println!("A: {summary}");
    Ok(())
}
