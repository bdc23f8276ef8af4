use crate::config::OutputMode;
use github_lib::Repo;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{self, Write};

const INDENT: &[u8] = b"    ";

/// Writes repositories to `out` in the configured [`OutputMode`].
///
/// Array mode spans the whole run: the array is opened by the first record
/// shown (or by `finish` when there are none), so a run that fails before
/// producing anything leaves stdout empty.
pub struct Renderer<W: Write> {
    out: W,
    mode: OutputMode,
    first: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, mode: OutputMode) -> Self {
        Self {
            out,
            mode,
            first: true,
        }
    }

    pub fn show(&mut self, repo: &Repo) -> io::Result<()> {
        match self.mode {
            OutputMode::Plain => writeln!(self.out, "{}", repo.full_name)?,
            OutputMode::JsonLines => {
                serde_json::to_writer(&mut self.out, repo.raw())?;
                self.out.write_all(b"\n")?;
            }
            OutputMode::Array => {
                let sep: &[u8] = if self.first { b"[\n" } else { b",\n" };
                self.out.write_all(sep)?;
                self.write_indented(repo)?;
            }
        }
        self.first = false;
        Ok(())
    }

    pub fn finish(&mut self) -> io::Result<()> {
        if self.mode == OutputMode::Array {
            let close: &[u8] = if self.first { b"[]\n" } else { b"\n]\n" };
            self.out.write_all(close)?;
        }
        self.out.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_indented(&mut self, repo: &Repo) -> io::Result<()> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        repo.raw().serialize(&mut ser)?;
        for (i, line) in buf.split(|b| *b == b'\n').enumerate() {
            if i > 0 {
                self.out.write_all(b"\n")?;
            }
            self.out.write_all(INDENT)?;
            self.out.write_all(line)?;
        }
        Ok(())
    }
}
