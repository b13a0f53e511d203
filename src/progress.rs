use super::*;
use std::io::Write;

/// Receives loop positions from long-running computations.
///
/// Reporting is cosmetic: implementations must not influence results.
pub trait Progress {
    fn update(&mut self, index: usize);
}

/// Discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Progress for Silent {
    fn update(&mut self, _: usize) {}
}

/// Single overwriting `index/last` line on a diagnostic stream.
///
/// Writes a header when created, then rewrites one line per update with
/// a carriage return. When the last index is zero only the bare index is
/// written.
pub struct LoopProgress<W = std::io::Stderr>
where
    W: Write,
{
    last: usize,
    sink: W,
}

impl LoopProgress {
    /// Reports a loop of `total` iterations on stderr.
    pub fn new(total: usize) -> Self {
        Self::with_writer(total, std::io::stderr())
    }
}

impl<W> LoopProgress<W>
where
    W: Write,
{
    pub fn with_writer(total: usize, sink: W) -> Self {
        let mut progress = Self {
            last: total.saturating_sub(1),
            sink,
        };
        if let Err(e) = writeln!(progress.sink, "{}", PROGRESS_HEADER) {
            log::trace!("progress header dropped: {}", e);
        }
        progress
    }
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W> Progress for LoopProgress<W>
where
    W: Write,
{
    fn update(&mut self, index: usize) {
        let written = match self.last {
            0 => write!(self.sink, "\r{}", index),
            last => write!(self.sink, "\r{}/{}", index, last),
        };
        if let Err(e) = written.and_then(|_| self.sink.flush()) {
            log::trace!("progress update dropped: {}", e);
        }
    }
}
