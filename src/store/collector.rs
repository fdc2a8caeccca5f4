//! Collection of streamed generation output.
//!
//! The writer model streams an article chunk by chunk. A [`StreamCollector`]
//! keeps a copy of every forwarded chunk and, once the stream ends, registers
//! the full text in a [`ContentStore`]. [`CollectingStream`] wraps a chunk
//! iterator and appends the content identifier trailer as a final item.

use super::ContentStore;

/// Tag that opens the content identifier trailer.
pub const CONTENT_ID_TAG: &str = "[CONTENT_ID:";

/// Trailer appended after the last streamed chunk.
pub fn content_id_trailer(id: &str) -> String {
    format!("\n{}{}]", CONTENT_ID_TAG, id)
}

/// Split streamed text into the article body and its content identifier.
///
/// Returns the input unchanged and `None` when no trailer is present.
pub fn split_content_id(text: &str) -> (&str, Option<&str>) {
    let marker = format!("\n{}", CONTENT_ID_TAG);
    let Some(start) = text.rfind(&marker) else {
        return (text, None);
    };

    let tail = &text[start + marker.len()..];
    match tail.strip_suffix(']') {
        Some(id) if !id.is_empty() && !id.contains(']') => (&text[..start], Some(id)),
        _ => (text, None),
    }
}

/// Accumulates streamed chunks and registers the full text when done.
pub struct StreamCollector<'a> {
    store: &'a ContentStore,
    buffer: String,
}

impl<'a> StreamCollector<'a> {
    /// Start collecting into `store`.
    pub fn new(store: &'a ContentStore) -> Self {
        Self {
            store,
            buffer: String::new(),
        }
    }

    /// Record a chunk and hand it back for forwarding.
    pub fn push<'c>(&mut self, chunk: &'c str) -> &'c str {
        self.buffer.push_str(chunk);
        chunk
    }

    /// Text collected so far.
    pub fn collected(&self) -> &str {
        &self.buffer
    }

    /// Store the collected text, returning its identifier and the trailer.
    pub fn finish(self) -> (String, String) {
        let id = self.store.insert(self.buffer);
        log::debug!("Stored streamed content as {}", id);
        let trailer = content_id_trailer(&id);
        (id, trailer)
    }
}

/// Iterator adapter over a chunk source that yields every chunk and then
/// the content identifier trailer.
pub struct CollectingStream<'a, I> {
    chunks: I,
    collector: Option<StreamCollector<'a>>,
    content_id: Option<String>,
}

impl<'a, I> CollectingStream<'a, I>
where
    I: Iterator<Item = String>,
{
    /// Wrap a chunk source.
    pub fn new<S>(chunks: S, store: &'a ContentStore) -> Self
    where
        S: IntoIterator<Item = String, IntoIter = I>,
    {
        Self {
            chunks: chunks.into_iter(),
            collector: Some(StreamCollector::new(store)),
            content_id: None,
        }
    }

    /// Identifier of the stored content, once the source is exhausted.
    pub fn content_id(&self) -> Option<&str> {
        self.content_id.as_deref()
    }

    /// Text collected so far.
    pub fn collected(&self) -> &str {
        self.collector.as_ref().map_or("", |c| c.collected())
    }
}

impl<I> Iterator for CollectingStream<'_, I>
where
    I: Iterator<Item = String>,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let collector = self.collector.as_mut()?;

        if let Some(chunk) = self.chunks.next() {
            collector.push(&chunk);
            return Some(chunk);
        }

        let (id, trailer) = self.collector.take()?.finish();
        self.content_id = Some(id);
        Some(trailer)
    }
}
