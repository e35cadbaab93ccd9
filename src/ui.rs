//! End-of-game console prompts

use std::io::{self, BufRead, Write};

use crate::sim::GameEvent;

pub const GAME_OVER_MESSAGE: &str = "Game Over!";
pub const WIN_MESSAGE: &str = "You Win!";
pub const CLOSE_PROMPT: &str = "Press Enter to close the game.";

/// Console message for a terminal event
pub fn end_message(event: &GameEvent) -> Option<&'static str> {
    match event {
        GameEvent::GameOver => Some(GAME_OVER_MESSAGE),
        GameEvent::Victory => Some(WIN_MESSAGE),
        _ => None,
    }
}

/// Print the end message for `event` and wait for one line of input
///
/// Returns `Ok(false)` without touching either stream for non-terminal events.
pub fn announce<W: Write, R: BufRead>(
    event: &GameEvent,
    out: &mut W,
    input: &mut R,
    wait_for_enter: bool,
) -> io::Result<bool> {
    let Some(message) = end_message(event) else {
        return Ok(false);
    };

    writeln!(out, "{message}")?;
    if wait_for_enter {
        writeln!(out, "{CLOSE_PROMPT}")?;
        out.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
    } else {
        out.flush()?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_game_over_prompt_consumes_one_line() {
        let mut out = Vec::new();
        let mut input = Cursor::new("\nleftover\n");

        let shown = announce(&GameEvent::GameOver, &mut out, &mut input, true).unwrap();

        assert!(shown);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Game Over!\nPress Enter to close the game.\n"
        );
        assert_eq!(input.position(), 1);
    }

    #[test]
    fn test_win_prompt() {
        let mut out = Vec::new();
        let mut input = Cursor::new("\n");
        announce(&GameEvent::Victory, &mut out, &mut input, true).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("You Win!\n"));
    }

    #[test]
    fn test_closed_stdin_still_returns() {
        let mut out = Vec::new();
        let mut input = Cursor::new("");
        assert!(announce(&GameEvent::Victory, &mut out, &mut input, true).unwrap());
    }

    #[test]
    fn test_no_wait() {
        let mut out = Vec::new();
        let mut input = Cursor::new("\n");
        announce(&GameEvent::GameOver, &mut out, &mut input, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Game Over!\n");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_other_events_are_silent() {
        let mut out = Vec::new();
        let mut input = Cursor::new("\n");
        let shown = announce(&GameEvent::PaddleHit, &mut out, &mut input, true).unwrap();
        assert!(!shown);
        assert!(out.is_empty());
    }
}
