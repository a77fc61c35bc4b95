//! Word-bounded text chunking.
//!
//! Splits a text into consecutive runs of whitespace-delimited tokens.
//! Chunk boundaries never split a token, and rejoining all chunks
//! reproduces the original token sequence exactly.

/// Default chunk size in tokens.
pub const DEFAULT_CHUNK_SIZE: usize = 512;

/// Splits text into word-bounded chunks of a target token count.
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    chunk_size: usize,
}

impl Chunker {
    /// Create a chunker with the given chunk size in tokens.
    ///
    /// A zero size falls back to [`DEFAULT_CHUNK_SIZE`].
    pub fn new(chunk_size: usize) -> Self {
        let chunk_size = if chunk_size == 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            chunk_size
        };
        Self { chunk_size }
    }

    /// The effective chunk size in tokens.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Split `text` into chunks of at most `chunk_size` tokens each.
    ///
    /// The final chunk may be shorter. Empty or whitespace-only input
    /// yields an empty vector.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        words
            .chunks(self.chunk_size)
            .map(|run| run.join(" "))
            .collect()
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chunk_sizes_and_count() {
        let chunker = Chunker::new(3);
        let text = "one two three four five six seven";

        let chunks = chunker.chunk(text);
        assert_eq!(
            chunks,
            vec!["one two three", "four five six", "seven"]
        );

        // All chunks except the last hold exactly chunk_size tokens.
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.split_whitespace().count(), 3);
        }
        assert_eq!(chunks.len(), 7usize.div_ceil(3));
    }

    #[test]
    fn test_round_trip_preserves_tokens() {
        let chunker = Chunker::new(4);
        let text = "  The   quick\tbrown fox\njumps over the lazy dog  ";

        let chunks = chunker.chunk(text);
        let rejoined = chunks.join(" ");

        let original: Vec<&str> = text.split_whitespace().collect();
        let recovered: Vec<&str> = rejoined.split_whitespace().collect();
        assert_eq!(original, recovered);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let chunker = Chunker::new(8);
        assert!(chunker.chunk("").is_empty());
        assert!(chunker.chunk("   \t\n  ").is_empty());
    }

    #[test]
    fn test_zero_size_falls_back_to_default() {
        let fallback = Chunker::new(0);
        let explicit = Chunker::new(DEFAULT_CHUNK_SIZE);
        assert_eq!(fallback.chunk_size(), DEFAULT_CHUNK_SIZE);

        let text = "alpha beta gamma delta";
        assert_eq!(fallback.chunk(text), explicit.chunk(text));
    }

    #[test]
    fn test_sentence_boundaries_do_not_matter() {
        let chunker = Chunker::new(3);
        let chunks = chunker.chunk("The sky is blue. The grass is green.");
        assert_eq!(chunks, vec!["The sky is", "blue. The grass", "is green."]);
    }
}
