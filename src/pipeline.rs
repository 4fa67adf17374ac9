//! Producer/consumer hand-off between the line reader and the renderer.
//!
//! The reader task parses every incoming line and offers it to a shared
//! [`Queue`]. The drain loop wakes on a fixed interval, takes a bounded batch
//! from the queue, normalizes it and hands the results to a [`ChatSink`].
//! The queue lock is held only for `offer` and the batch take, never across
//! an await or sink I/O.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use chatfeed_proto::{IrcMessage, Normalizer, Queue};
use parking_lot::Mutex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{Instrument, debug, info, trace};

use crate::config::{Config, PipelineConfig};
use crate::error::{FeedError, FeedResult};
use crate::sink::ChatSink;
use crate::telemetry::spans;

/// Queue shared between the reader task and the drain loop.
pub type SharedQueue = Arc<Mutex<Queue<IrcMessage>>>;

/// Counters reported when the feed ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    /// Lines offered to the queue.
    pub buffered: u64,
    /// Lines skipped before buffering (blank or filtered command).
    pub skipped: u64,
    /// Messages handed to the sink.
    pub rendered: u64,
    /// Buffered lines the normalizer rejected.
    pub dropped: u64,
}

#[derive(Debug, Clone, Copy, Default)]
struct ReaderStats {
    buffered: u64,
    skipped: u64,
}

/// The assembled feed: shared queue, hand-off settings, normalizer.
pub struct Feed {
    queue: SharedQueue,
    pipeline: PipelineConfig,
    normalizer: Normalizer,
}

impl Feed {
    pub fn new(config: &Config) -> Self {
        Self {
            queue: Arc::new(Mutex::new(Queue::new())),
            pipeline: config.pipeline.clone(),
            normalizer: Normalizer::new(config.normalizer.clone()),
        }
    }

    /// Handle to the shared queue.
    pub fn queue(&self) -> SharedQueue {
        Arc::clone(&self.queue)
    }

    /// Read lines from `input` until EOF, rendering chat messages into `sink`.
    ///
    /// Returns once the input is exhausted and every buffered line has been
    /// drained, preserving input order.
    pub async fn run<R, S>(self, input: R, sink: &mut S) -> FeedResult<FeedStats>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        S: ChatSink + ?Sized,
    {
        let reader = spawn_reader(input, self.queue(), self.pipeline.clone());

        let interval = Duration::from_millis(self.pipeline.drain_interval_ms);
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut stats = FeedStats::default();
        let mut tick: u64 = 0;

        loop {
            ticker.tick().await;
            tick += 1;

            // Checked before draining: once the reader is done, every line it
            // will ever offer is already queued.
            let reader_done = reader.is_finished();

            let batch: Vec<IrcMessage> = {
                let mut queue = self.queue.lock();
                queue.drain_up_to(self.pipeline.max_batch).collect()
            };

            if !batch.is_empty() {
                let _span = spans::drain(tick, batch.len()).entered();
                for msg in &batch {
                    match self.normalizer.to_chat_message(msg) {
                        Some(chat) => {
                            sink.render(&chat)?;
                            stats.rendered += 1;
                        }
                        None => stats.dropped += 1,
                    }
                }
                sink.flush()?;
                debug!(
                    rendered = stats.rendered,
                    dropped = stats.dropped,
                    backlog = self.queue.lock().len(),
                    "drained batch"
                );
            }

            if reader_done && self.queue.lock().is_empty() {
                break;
            }
        }

        let reader_stats = reader.await??;
        stats.buffered = reader_stats.buffered;
        stats.skipped = reader_stats.skipped;

        info!(
            buffered = stats.buffered,
            skipped = stats.skipped,
            rendered = stats.rendered,
            dropped = stats.dropped,
            "feed finished"
        );
        Ok(stats)
    }
}

fn spawn_reader<R>(
    input: R,
    queue: SharedQueue,
    pipeline: PipelineConfig,
) -> JoinHandle<FeedResult<ReaderStats>>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(
        async move {
            let mut input = input;
            let mut buf = Vec::new();
            let mut stats = ReaderStats::default();

            loop {
                buf.clear();
                if input.read_until(b'\n', &mut buf).await? == 0 {
                    break;
                }

                let line = match std::str::from_utf8(&buf) {
                    Ok(line) => Cow::Borrowed(line),
                    Err(e) => {
                        debug!(error = %e, "line is not valid UTF-8, decoding lossily");
                        String::from_utf8_lossy(&buf)
                    }
                };
                let line = line.trim_end_matches(['\r', '\n']);
                if line.is_empty() {
                    stats.skipped += 1;
                    continue;
                }

                let msg = IrcMessage::parse(line);
                if !pipeline.accepts(&msg.command) {
                    trace!(command = %msg.command, "not buffered");
                    stats.skipped += 1;
                    continue;
                }

                queue.lock().offer(msg);
                stats.buffered += 1;
            }

            debug!(buffered = stats.buffered, "input closed");
            Ok::<_, FeedError>(stats)
        }
        .in_current_span(),
    )
}
