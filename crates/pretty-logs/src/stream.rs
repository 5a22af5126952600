//! Stream driver — the strictly sequential read → classify → render → write
//! loop with a per-line flush.
//!
//! Guarantees the never-drop invariant at the outermost layer: every
//! consumed input line produces at least one output line before the next
//! read, and only stream I/O failure terminates the run early.

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::conf::PrettyConfig;
use crate::parser::Classifier;
use crate::render;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("failed to read input stream: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write output stream: {0}")]
    Write(#[source] std::io::Error),
}

/// Owns the classifier (and with it the single piece of cross-line state)
/// plus the read-only ignore-pattern set for one run.
pub struct StreamDriver {
    classifier: Classifier,
    ignore_patterns: Vec<String>,
}

impl StreamDriver {
    pub fn new(config: &PrettyConfig) -> Self {
        Self {
            classifier: Classifier::new(),
            ignore_patterns: config.ignore_errors.clone(),
        }
    }

    /// Consume `input` to end of stream, writing prettified lines to
    /// `output`. Each line is fully classified, rendered, written, and
    /// flushed before the next read — no batching, no reordering — so a
    /// live pipe sees output as soon as its source produced a line.
    pub async fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<(), StreamError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines_in: u64 = 0;
        let mut buf: Vec<u8> = Vec::new();

        loop {
            buf.clear();
            // read_until has no length limit; arbitrarily long lines are
            // buffered in full, never truncated. Reading raw bytes keeps a
            // stray binary line from poisoning the whole stream: invalid
            // UTF-8 degrades to lossy text instead of a fatal read error.
            let n = input
                .read_until(b'\n', &mut buf)
                .await
                .map_err(StreamError::Read)?;
            if n == 0 {
                break;
            }
            lines_in += 1;

            // The terminator stays in the buffer; the final line may lack one.
            let mut end = buf.len();
            if end > 0 && buf[end - 1] == b'\n' {
                end -= 1;
            }
            if end > 0 && buf[end - 1] == b'\r' {
                end -= 1;
            }
            let line = String::from_utf8_lossy(&buf[..end]);

            let record = self.classifier.classify(&line);
            let mut rendered = render::render(&record, &self.ignore_patterns);
            if rendered.is_empty() {
                // Rendering is infallible by contract; this guard keeps the
                // never-drop invariant even if that contract is broken.
                rendered.push(line.to_string());
            }

            for out in &rendered {
                output
                    .write_all(out.as_bytes())
                    .await
                    .map_err(StreamError::Write)?;
                output.write_all(b"\n").await.map_err(StreamError::Write)?;
            }
            output.flush().await.map_err(StreamError::Write)?;
        }

        output.flush().await.map_err(StreamError::Write)?;
        tracing::debug!(lines_in, "input stream fully consumed");
        Ok(())
    }
}
