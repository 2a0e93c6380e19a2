//! Interactive study prompt.
//!
//! Each card shows its front, waits for Enter, shows the back, then asks
//! whether the answer was right. `q` (or end of input) stops the session at
//! any prompt; answers given so far are already saved.

use colored::Colorize;
use flashdeck::api::FlashApi;
use flashdeck::error::Result;
use flashdeck::store::StorageBackend;
use flashdeck::study::StudySession;
use std::io::{BufRead, Write};

pub(super) fn run_session<B, R, W>(
    api: &mut FlashApi<B>,
    session: &mut StudySession,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(card) = session.current().cloned() else {
            break;
        };

        let counter = format!("[{}/{}]", session.position() + 1, session.len());
        writeln!(out, "\n{} {}", counter.yellow(), card.front.bold())?;
        for media in &card.media {
            writeln!(out, "      {} {}", format!("[{}]", media.media_type).cyan(), media.path)?;
        }

        write!(out, "{} ", "Press Enter to show the answer (q to quit)".dimmed())?;
        out.flush()?;
        match read_line(input)? {
            Some(line) if !is_quit(&line) => {}
            _ => break,
        }
        writeln!(out, "      {} {}", "→".dimmed(), card.back)?;

        let Some(correct) = ask_verdict(input, out)? else {
            break;
        };
        if !api.answer(session, correct) {
            log::warn!("card {} disappeared during the session", card.id);
        }
    }
    Ok(())
}

/// `Some(true)` for yes, `Some(false)` for no, `None` to quit.
fn ask_verdict<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<bool>> {
    loop {
        write!(out, "Did you get it right? [y/n/q] ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ if is_quit(&line) => return Ok(None),
            _ => writeln!(out, "{}", "Please answer y or n.".yellow())?,
        }
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "q" | "quit")
}

/// `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
