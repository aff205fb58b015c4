//! Line-oriented console used by the interactive menu.
//!
//! Stdin is read on a background thread that forwards each line into a
//! channel. The Ctrl-C handler feeds the same channel, so a prompt blocked
//! waiting for input returns as soon as the user interrupts it.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// Result of asking the user for a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted {
    /// A line of input, without the trailing newline.
    Line(String),
    /// Ctrl-C was pressed while the prompt was open.
    Interrupted,
    /// Input is exhausted.
    Closed,
}

/// Reads answers to prompts and shows output lines.
pub trait Console {
    fn prompt(&mut self, label: &str) -> io::Result<Prompted>;

    fn say(&mut self, line: &str);
}

type Event = io::Result<Prompted>;

/// Console over stdin/stdout that reacts to Ctrl-C mid-prompt.
pub struct Terminal {
    events: Receiver<Event>,
    closed: bool,
}

impl Terminal {
    /// Start the stdin reader thread and install the Ctrl-C handler.
    pub fn new() -> Result<Self, ctrlc::Error> {
        let (events, terminal) = Self::channel();

        let lines = events.clone();
        thread::spawn(move || forward_lines(io::stdin().lock(), &lines));

        ctrlc::set_handler(move || {
            let _ = events.send(Ok(Prompted::Interrupted));
        })?;

        Ok(terminal)
    }

    fn channel() -> (Sender<Event>, Self) {
        let (sender, events) = mpsc::channel();
        (
            sender,
            Self {
                events,
                closed: false,
            },
        )
    }

    /// Next event for a freshly opened prompt.
    fn next_event(&mut self) -> Event {
        if self.closed {
            return Ok(Prompted::Closed);
        }

        // Interrupts raised while no prompt was open are stale.
        let event = loop {
            match self.events.try_recv() {
                Ok(Ok(Prompted::Interrupted)) => continue,
                Ok(event) => break event,
                Err(TryRecvError::Empty) => {
                    break self.events.recv().unwrap_or(Ok(Prompted::Closed));
                }
                Err(TryRecvError::Disconnected) => break Ok(Prompted::Closed),
            }
        };

        if matches!(event, Ok(Prompted::Closed)) {
            self.closed = true;
        }
        event
    }
}

/// Send every line of `input` as a [`Prompted::Line`], then
/// [`Prompted::Closed`] at end of input.
fn forward_lines<R: BufRead>(mut input: R, events: &Sender<Event>) {
    loop {
        let mut line = String::new();
        let event = match input.read_line(&mut line) {
            Ok(0) => Ok(Prompted::Closed),
            Ok(_) => Ok(Prompted::Line(
                line.trim_end_matches(['\r', '\n']).to_string(),
            )),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => Err(e),
        };

        let last = !matches!(event, Ok(Prompted::Line(_)));
        if events.send(event).is_err() || last {
            return;
        }
    }
}

impl Console for Terminal {
    fn prompt(&mut self, label: &str) -> io::Result<Prompted> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", label)?;
        stdout.flush()?;

        let event = self.next_event()?;
        if !matches!(event, Prompted::Line(_)) {
            println!();
        }
        Ok(event)
    }

    fn say(&mut self, line: &str) {
        println!("{}", line);
    }
}
