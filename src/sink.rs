//! Output sinks standing in for the chat renderer.

use std::io::Write;

use chatfeed_proto::ChatMessage;

use crate::config::OutputFormat;
use crate::error::FeedResult;

/// Receives finished chat messages.
pub trait ChatSink {
    /// Hand one message to the renderer.
    fn render(&mut self, msg: &ChatMessage) -> FeedResult<()>;

    /// Push buffered output through. Called after every drain.
    fn flush(&mut self) -> FeedResult<()>;
}

/// Writes each message as a single-line JSON object.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChatSink for JsonLinesSink<W> {
    fn render(&mut self, msg: &ChatMessage) -> FeedResult<()> {
        serde_json::to_writer(&mut self.out, msg)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> FeedResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Writes `sender: message` lines.
#[derive(Debug)]
pub struct TextSink<W> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChatSink for TextSink<W> {
    fn render(&mut self, msg: &ChatMessage) -> FeedResult<()> {
        writeln!(self.out, "{}: {}", msg.sender_name(), msg.message())?;
        Ok(())
    }

    fn flush(&mut self) -> FeedResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Build the sink selected by `format` over `out`.
pub fn for_format<W: Write + 'static>(format: OutputFormat, out: W) -> Box<dyn ChatSink> {
    match format {
        OutputFormat::Json => Box::new(JsonLinesSink::new(out)),
        OutputFormat::Text => Box::new(TextSink::new(out)),
    }
}

impl<S: ChatSink + ?Sized> ChatSink for Box<S> {
    fn render(&mut self, msg: &ChatMessage) -> FeedResult<()> {
        (**self).render(msg)
    }

    fn flush(&mut self) -> FeedResult<()> {
        (**self).flush()
    }
}
