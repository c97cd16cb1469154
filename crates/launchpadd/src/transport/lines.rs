//! Newline-delimited JSON framing.

use std::io::{self, Read, Write};

use super::{Channel, CloseCause, TransportError};

/// Largest frame accepted from a peer.
pub const MAX_FRAME_BYTES: usize = 1024 * 1024;

const CHUNK_BYTES: usize = 4096;

/// Channel that exchanges one JSON document per `\n`-terminated line.
///
/// Carriage returns before the newline are stripped and blank lines are
/// skipped. Frames are handed over undecoded. End of stream is an orderly close; a trailing unterminated line
/// is still delivered before the close is reported.
#[derive(Debug)]
pub struct LineChannel<S> {
    stream: S,
    pending: Vec<u8>,
    finished: bool,
}

impl<S: Read + Write> LineChannel<S> {
    pub const fn new(stream: S) -> Self {
        Self {
            stream,
            pending: Vec::new(),
            finished: false,
        }
    }

    fn next_buffered_line(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        let Some(end) = self.pending.iter().position(|byte| *byte == b'\n') else {
            if self.finished && !self.pending.is_empty() {
                let rest = std::mem::take(&mut self.pending);
                return decode_line(rest).map(Some);
            }
            return Ok(None);
        };
        let mut line: Vec<u8> = self.pending.drain(..=end).collect();
        line.pop();
        decode_line(line).map(Some)
    }

    fn fill(&mut self) -> Result<(), TransportError> {
        let mut chunk = [0_u8; CHUNK_BYTES];
        let read = read_chunk_with_retry(&mut self.stream, &mut chunk)?;
        if read == 0 {
            self.finished = true;
            return Ok(());
        }
        self.pending.extend_from_slice(&chunk[..read]);
        if !self.pending.contains(&b'\n') {
            enforce_frame_limit(self.pending.len())?;
        }
        Ok(())
    }
}

impl<S: Read + Write> Channel for LineChannel<S> {
    fn receive(&mut self) -> Result<Vec<u8>, CloseCause> {
        loop {
            match self.next_buffered_line() {
                Ok(Some(line)) if line.trim_ascii().is_empty() => continue,
                Ok(Some(line)) => return Ok(line),
                Ok(None) if self.finished => return Err(CloseCause::RemoteClosed),
                Ok(None) => {}
                Err(error) => return Err(CloseCause::Transport(error)),
            }
            self.fill().map_err(CloseCause::Transport)?;
        }
    }

    fn send(&mut self, frame: &str) -> Result<(), TransportError> {
        self.stream.write_all(frame.as_bytes())?;
        self.stream.write_all(b"\n")?;
        self.stream.flush()?;
        Ok(())
    }
}

fn read_chunk_with_retry(stream: &mut impl Read, chunk: &mut [u8]) -> io::Result<usize> {
    loop {
        match stream.read(chunk) {
            Ok(read) => return Ok(read),
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        }
    }
}

fn decode_line(mut line: Vec<u8>) -> Result<Vec<u8>, TransportError> {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    enforce_frame_limit(line.len())?;
    Ok(line)
}

fn enforce_frame_limit(size: usize) -> Result<(), TransportError> {
    if size > MAX_FRAME_BYTES {
        return Err(TransportError::FrameTooLarge {
            size,
            max: MAX_FRAME_BYTES,
        });
    }
    Ok(())
}
