use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::board::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Up,
    Down,
    Left,
    Right,
    Quit,
}

impl Intent {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Intent::Up => Some(Direction::Up),
            Intent::Down => Some(Direction::Down),
            Intent::Left => Some(Direction::Left),
            Intent::Right => Some(Direction::Right),
            Intent::Quit => None,
        }
    }
}

pub trait InputSource {
    /// Everything queued since the last poll, oldest first. Never blocks.
    fn poll(&mut self) -> io::Result<Vec<Intent>>;
}

/// Reads key presses from the terminal.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> io::Result<Vec<Intent>> {
        let mut intents = vec![];

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(intent) = intent_for(key) {
                    intents.push(intent);
                }
            }
        }

        Ok(intents)
    }
}

pub fn intent_for(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Intent::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Intent::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Intent::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Intent::Right),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}
