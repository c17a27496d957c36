//! Streaming reader for recorded movement traces.
//!
//! # Trace file format
//!
//! The first line is the offset header:
//!
//! ```text
//! minTime maxTime minX maxX minY maxY minZ maxZ
//! ```
//!
//! The Z bounds are accepted but unused.  Every following line is either
//! empty, a comment starting with `#`, or a data line:
//!
//! ```text
//! time id xPos yPos
//! ```
//!
//! where `id` is an opaque token naming a host.  Runs of repeated spaces
//! count as one separator.  Lines must be sorted ascending by time, and the
//! step between distinct time values should be uniform across the file —
//! the reader only relies on equal-time lines being contiguous.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use dtn_core::Position;

use crate::{TraceError, TraceResult};

// ── Records and batches ───────────────────────────────────────────────────────

/// One parsed data line of a trace file.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceRecord {
    pub time: f64,
    /// Opaque host token from the trace; mapping it onto simulated hosts is
    /// the engine's concern.
    pub host: String,
    pub pos: Position,
}

/// All position updates sharing one timestamp.
///
/// An empty batch signals a clean end of stream — repeated reads past the
/// end keep returning empty batches, never an error.
#[derive(Clone, Debug, PartialEq)]
pub struct MovementBatch {
    /// The batch timestamp (normalized if normalization is on).
    pub time: f64,
    /// `(host, position)` pairs, in file order.
    pub moves: Vec<(String, Position)>,
}

impl MovementBatch {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }
}

// ── TraceReader ───────────────────────────────────────────────────────────────

/// Streaming decoder that groups trace lines into per-timestamp batches.
///
/// The file is read strictly forward with a single-record lookahead: the
/// reader always holds the next not-yet-consumed record, so grouping never
/// needs to seek.  Blank and comment lines are skipped transparently and
/// never start or end a batch.
///
/// With `normalize` on (the default), every emitted record has the header's
/// minimum offsets subtracted: `time -= min_time`, `x -= min_x`,
/// `y -= min_y`.  Batch grouping always compares raw times, so toggling
/// normalization never changes batch boundaries.
pub struct TraceReader<R: Read> {
    records: csv::StringRecordsIntoIter<R>,

    /// Raw (unnormalized) lookahead record; `None` once the stream is done.
    pending: Option<TraceRecord>,

    normalize: bool,

    /// Timestamp of the last batch read, `-1.0` before the first one.
    last_timestamp: f64,

    min_time: f64,
    max_time: f64,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl TraceReader<File> {
    /// Open a trace file and read its header.
    ///
    /// # Errors
    ///
    /// `TraceError::Config` if the file cannot be opened or its header line
    /// is malformed.
    pub fn open(path: impl AsRef<Path>) -> TraceResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TraceError::Config(format!("couldn't open trace file {}: {e}", path.display()))
        })?;
        Self::from_reader(file)
    }
}

impl<R: Read> TraceReader<R> {
    /// Like [`TraceReader::open`] but accepts any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) or for decompressing
    /// wrappers.
    pub fn from_reader(reader: R) -> TraceResult<Self> {
        let csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b' ')
            .comment(Some(b'#'))
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut this = Self {
            records: csv_reader.into_records(),
            pending: None,
            normalize: true,
            last_timestamp: -1.0,
            min_time: 0.0,
            max_time: 0.0,
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        };

        this.read_header()?;
        this.pending = this.next_record()?;
        Ok(this)
    }

    /// Sets normalizing of read values on/off.
    ///
    /// If on, values returned by [`next_batch`][Self::next_batch] are
    /// decremented by the minimum values of the offsets.  Default is on.
    pub fn set_normalize(&mut self, normalize: bool) {
        self.normalize = normalize;
    }

    /// Read all records that belong to the next time instance.
    ///
    /// The lookahead record's time names the batch; records keep being
    /// consumed while the following data line carries the same time.  A line
    /// with a different time becomes the new lookahead; end of input flushes
    /// exactly the one pending record.
    ///
    /// # Errors
    ///
    /// `TraceError::Parse` on a malformed data line.  Parse failures abort
    /// the read — no partial batch is returned.
    pub fn next_batch(&mut self) -> TraceResult<MovementBatch> {
        let Some(mut held) = self.pending.take() else {
            // End of stream: keep answering with empty batches.
            return Ok(MovementBatch { time: self.last_timestamp, moves: Vec::new() });
        };

        let batch_time = held.time;
        let mut moves = Vec::new();

        loop {
            let next = self.next_record()?;
            moves.push(self.emit(held));
            match next {
                Some(rec) if rec.time == batch_time => held = rec,
                Some(rec) => {
                    self.pending = Some(rec);
                    break;
                }
                None => break,
            }
        }

        let time = if self.normalize { batch_time - self.min_time } else { batch_time };
        self.last_timestamp = time;
        Ok(MovementBatch { time, moves })
    }

    /// The timestamp the last batch belonged to (post-normalization), or
    /// `-1.0` if no batch has been read yet.
    #[inline]
    pub fn last_timestamp(&self) -> f64 {
        self.last_timestamp
    }

    // Offset-header accessors.

    #[inline]
    pub fn min_time(&self) -> f64 {
        self.min_time
    }

    #[inline]
    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Parse the `minTime maxTime minX maxX minY maxY minZ maxZ` header.
    fn read_header(&mut self) -> TraceResult<()> {
        let tokens = loop {
            let Some(result) = self.records.next() else {
                return Err(TraceError::Config("trace file has no offset header".into()));
            };
            let record = result.map_err(|e| TraceError::Config(format!("bad offset header: {e}")))?;
            let tokens: Vec<String> = record
                .iter()
                .filter(|t| !t.is_empty())
                .map(str::to_owned)
                .collect();
            if !tokens.is_empty() {
                break tokens;
            }
        };

        if tokens.len() < 6 {
            return Err(TraceError::Config(format!(
                "invalid offset header {:?}: expected at least 6 values",
                tokens.join(" ")
            )));
        }

        let parse = |i: usize| -> TraceResult<f64> {
            tokens[i].parse::<f64>().map_err(|_| {
                TraceError::Config(format!(
                    "invalid offset header {:?}: bad number {:?}",
                    tokens.join(" "),
                    tokens[i]
                ))
            })
        };

        self.min_time = parse(0)?;
        self.max_time = parse(1)?;
        self.min_x = parse(2)?;
        self.max_x = parse(3)?;
        self.min_y = parse(4)?;
        self.max_y = parse(5)?;
        // Tokens 6 and 7 are the Z bounds — accepted, unused.
        Ok(())
    }

    /// Pull the next data record, skipping blank lines.  Comment lines are
    /// already stripped by the underlying reader.
    fn next_record(&mut self) -> TraceResult<Option<TraceRecord>> {
        while let Some(result) = self.records.next() {
            let record = result.map_err(|e| TraceError::Parse(e.to_string()))?;
            let line = record.position().map_or(0, |p| p.line());

            let tokens: Vec<&str> = record.iter().filter(|t| !t.is_empty()).collect();
            if tokens.is_empty() {
                continue; // whitespace-only line
            }
            if tokens.len() != 4 {
                return Err(TraceError::Parse(format!(
                    "line {line}: expected `time id xPos yPos`, got {} fields",
                    tokens.len()
                )));
            }

            return Ok(Some(TraceRecord {
                time: parse_field(tokens[0], line, "time")?,
                host: tokens[1].to_string(),
                pos: Position::new(
                    parse_field(tokens[2], line, "xPos")?,
                    parse_field(tokens[3], line, "yPos")?,
                ),
            }));
        }
        Ok(None)
    }

    /// Apply normalization and strip a record down to its `(host, position)`
    /// pair for the outgoing batch.
    fn emit(&self, record: TraceRecord) -> (String, Position) {
        let pos = if self.normalize {
            Position::new(record.pos.x - self.min_x, record.pos.y - self.min_y)
        } else {
            record.pos
        };
        (record.host, pos)
    }
}

fn parse_field(token: &str, line: u64, field: &str) -> TraceResult<f64> {
    token.parse::<f64>().map_err(|_| {
        TraceError::Parse(format!("line {line}: invalid {field} value {token:?}"))
    })
}
