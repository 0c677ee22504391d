use std::io::{self, BufRead, BufReader, ErrorKind, Lines, Read, Write};
use tracing::instrument;

/// Line oriented message passing.
#[cfg_attr(test, mockall::automock)]
pub trait Io {
    /// Receive a line, without the line break.
    fn recv(&mut self) -> io::Result<String>;

    /// Send a message followed by a line break.
    fn send(&mut self, msg: &str) -> io::Result<()>;

    /// Flush the internal buffers.
    fn flush(&mut self) -> io::Result<()>;
}

/// An [`Io`] over a pair of byte streams, such as standard output and input.
#[derive(Debug)]
pub struct Terminal<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Terminal<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Terminal {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }
}

impl<W: Write, R: Read> Io for Terminal<W, R> {
    /// Fails with [`ErrorKind::UnexpectedEof`] once the reader is exhausted.
    #[instrument(level = "trace", skip(self), ret, err)]
    fn recv(&mut self) -> io::Result<String> {
        self.reader.next().ok_or(ErrorKind::UnexpectedEof)?
    }

    #[instrument(level = "trace", skip(self), err)]
    fn send(&mut self, msg: &str) -> io::Result<()> {
        writeln!(&mut self.writer, "{}", msg)
    }

    #[instrument(level = "trace", skip(self), err)]
    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::VecDeque, io::empty, str};
    use test_strategy::proptest;

    #[proptest]
    fn recv_strips_the_line_break(#[strategy("[^\r\n]*")] s: String) {
        let mut buf = VecDeque::new();
        writeln!(&mut buf, "{}", s)?;
        let mut terminal = Terminal::new(empty(), &mut buf);
        assert_eq!(terminal.recv()?, s);
    }

    #[test]
    fn recv_fails_at_end_of_input() {
        let mut terminal = Terminal::new(empty(), empty());
        let e = terminal.recv().unwrap_err();
        assert_eq!(e.kind(), ErrorKind::UnexpectedEof);
    }

    #[proptest]
    fn send_appends_line_break(s: String) {
        let mut buf = Vec::new();
        let mut terminal = Terminal::new(&mut buf, empty());
        terminal.send(&s)?;
        terminal.flush()?;
        drop(terminal);
        assert_eq!(str::from_utf8(&buf)?, format!("{s}\n"));
    }
}
