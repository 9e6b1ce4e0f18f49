//! Subprocess execution with line-streamed output.
//!
//! Runs one child process per call, draining stdout and stderr concurrently
//! and handing each line to a [`LineSink`] as it arrives. Reading one pipe to
//! exhaustion before touching the other can deadlock once the child fills the
//! untouched pipe's buffer, so each stream gets a dedicated reader thread and
//! both feed a single channel consumed by the calling thread. Per-stream line
//! order is preserved; the interleaving between the two streams is whatever
//! arrival timing produces.
//!
//! A non-zero exit code is a normal return value here, not an error. Errors
//! are reserved for malformed invocations and spawn failures. There is no
//! cancellation or timeout: a hung child hangs the calling thread.

use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;

use serde::Serialize;

use crate::error::{Error, Result};

/// Which pipe of the child a line was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Stdout,
    Stderr,
}

/// One line of child output, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedLine {
    /// Basename of the program that produced the line.
    pub producer: String,
    pub kind: StreamKind,
    pub content: String,
    /// False when the raw bytes were not valid UTF-8 and `content` holds a
    /// placeholder rendering instead.
    pub decode_ok: bool,
}

/// Consumer of tagged output lines.
///
/// Implementations must not block indefinitely and must tolerate arbitrary
/// content, including placeholder text for undecodable bytes.
pub trait LineSink {
    fn emit(&mut self, line: &TaggedLine);
}

/// A single child-process run: argument list, working directory, and whether
/// output should be suppressed. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Invocation {
    args: Vec<String>,
    cwd: PathBuf,
    silent: bool,
}

impl Invocation {
    pub fn new(args: impl IntoIterator<Item = impl Into<String>>, cwd: impl AsRef<Path>) -> Self {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.as_ref().to_path_buf(),
            silent: false,
        }
    }

    /// Drain the child's output without forwarding any of it.
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

/// Derive the producer name from the program path: the final component after
/// either kind of path separator.
pub fn producer_name(program: &str) -> String {
    program
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(program)
        .to_string()
}

/// Run the invocation to completion, forwarding each output line to `sink`,
/// and return the child's exit code verbatim.
///
/// The child inherits the caller's environment; its stdin is disconnected.
/// Returns `validation.invalid_argument` for an empty argument list (nothing
/// is spawned) and `process.spawn_failed` when the OS cannot start the
/// program. Signal-terminated children report exit code -1.
pub fn execute(invocation: &Invocation, sink: &mut dyn LineSink) -> Result<i32> {
    let (program, rest) = invocation.args.split_first().ok_or_else(|| {
        Error::validation_invalid_argument("args", "argument list must not be empty")
    })?;

    let producer = producer_name(program);

    let mut child = Command::new(program)
        .args(rest)
        .current_dir(&invocation.cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::spawn_failed(program, e.to_string()))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::internal_unexpected("child stdout pipe missing"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| Error::internal_unexpected("child stderr pipe missing"))?;

    let (tx, rx) = mpsc::channel::<(StreamKind, Vec<u8>)>();
    let out_reader = spawn_reader(stdout, StreamKind::Stdout, tx.clone());
    let err_reader = spawn_reader(stderr, StreamKind::Stderr, tx);

    // The channel closes only after both readers hit their own EOF, so one
    // stream ending early never cuts the other one short.
    for (kind, raw) in rx {
        if invocation.silent {
            continue;
        }
        let (content, decode_ok) = decode_line(raw);
        sink.emit(&TaggedLine {
            producer: producer.clone(),
            kind,
            content,
            decode_ok,
        });
    }

    let _ = out_reader.join();
    let _ = err_reader.join();

    let status = child
        .wait()
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("wait for {}", producer))))?;

    Ok(status.code().unwrap_or(-1))
}

/// Read `stream` line by line until EOF, sending raw bytes down the channel.
fn spawn_reader<R: Read + Send + 'static>(
    stream: R,
    kind: StreamKind,
    tx: mpsc::Sender<(StreamKind, Vec<u8>)>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut reader = BufReader::new(stream);
        loop {
            let mut buf = Vec::new();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    // Receiver gone means the run was abandoned; stop reading.
                    if tx.send((kind, buf)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    })
}

/// Decode one raw line. Invalid UTF-8 never fails the run: it yields a lossy
/// rendering with an explicit marker and `decode_ok = false`.
fn decode_line(mut raw: Vec<u8>) -> (String, bool) {
    while raw.last() == Some(&b'\n') || raw.last() == Some(&b'\r') {
        raw.pop();
    }

    match String::from_utf8(raw) {
        Ok(line) => (line, true),
        Err(err) => {
            let lossy = String::from_utf8_lossy(err.as_bytes()).into_owned();
            (format!("{} (failed to decode as UTF-8)", lossy), false)
        }
    }
}
