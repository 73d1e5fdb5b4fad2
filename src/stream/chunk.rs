//! Chunk and step iterators over a string slice.

/// Byte offset reached after advancing `count` characters from `offset`,
/// clamped to the end of `data`.
fn advance(data: &str, offset: usize, count: usize) -> usize {
    data[offset..]
        .char_indices()
        .nth(count)
        .map_or(data.len(), |(i, _)| offset + i)
}

/// Iterator over consecutive top-level chunks of a text.
///
/// Each chunk holds at most `chunk_size` characters; only the last one may be
/// shorter. The stream is single-pass and never revisits consumed input.
///
/// # Examples
///
/// ```
/// use chunklex::stream::ChunkStream;
///
/// let chunks: Vec<&str> = ChunkStream::new("  abcdefg ", 3, true).collect();
/// assert_eq!(chunks, vec!["abc", "def", "g"]);
/// ```
#[derive(Debug, Clone)]
pub struct ChunkStream<'a> {
    data: &'a str,
    offset: usize,
    chunk_size: usize,
}

impl<'a> ChunkStream<'a> {
    /// Open a stream over `text`, trimming surrounding whitespace if `trim` is set.
    pub fn new(text: &'a str, chunk_size: usize, trim: bool) -> Self {
        ChunkStream {
            data: if trim { text.trim() } else { text },
            offset: 0,
            chunk_size,
        }
    }

    /// The text being streamed, after trimming.
    pub fn data(&self) -> &'a str {
        self.data
    }

    /// Byte offset of the next chunk.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a> Iterator for ChunkStream<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let next_offset = advance(self.data, self.offset, self.chunk_size);
        if next_offset <= self.offset {
            return None;
        }

        let chunk = &self.data[self.offset..next_offset];
        self.offset = next_offset;
        Some(chunk)
    }
}

/// Iterator over contiguous steps of a single chunk.
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    chunk: &'a str,
    offset: usize,
    step_size: usize,
}

impl<'a> Steps<'a> {
    /// Split `chunk` into steps of at most `step_size` characters.
    pub fn new(chunk: &'a str, step_size: usize) -> Self {
        Steps {
            chunk,
            offset: 0,
            step_size,
        }
    }
}

impl<'a> Iterator for Steps<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let next_offset = advance(self.chunk, self.offset, self.step_size);
        if next_offset <= self.offset {
            return None;
        }

        let step = &self.chunk[self.offset..next_offset];
        self.offset = next_offset;
        Some(step)
    }
}
