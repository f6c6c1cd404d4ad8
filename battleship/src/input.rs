// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Reading and parsing commands typed by the player.

use std::io::{self, BufRead, Write};

use once_cell::sync::Lazy;
use regex::Regex;

use seabattle::board::Vector2;

/// A command entered during play.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Fire at a cell.
    Fire(Vector2),
    /// List the ships and their health.
    Ships,
    /// Flip hidden rendering.
    Toggle,
    /// Print the board again.
    Show,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Command list printed by `help`.
pub const HELP: &str = "Available Commands:
    <x> <y>, <x>,<y>    fire at the cell in column x, row y. Also accepts \"fire <x> <y>\".
    ships               list every ship with its position and health.
    toggle              switch between showing and hiding unhit ships.
    show                print the board.
    quit                leave the game.";

/// Parse one line of (already lowercased) input. Returns an error message to show the
/// player if the line is not a command.
pub fn parse_command(input: &str) -> Result<Command, String> {
    static FIRE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:(?:fire|shoot|hit)\s+)?
        (?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+)$",
        )
        .unwrap()
    });

    match input {
        "?" | "help" | "h" => Ok(Command::Help),
        "ships" | "fleet" => Ok(Command::Ships),
        "toggle" | "hide" | "reveal" => Ok(Command::Toggle),
        "show" | "board" | "" => Ok(Command::Show),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => {
            let captures = FIRE.captures(other).ok_or_else(|| {
                format!("Invalid command \"{}\". Use '?' for help", other)
            })?;
            let coord = |name: &str| {
                let text = &captures[name];
                text.parse::<i32>()
                    .map_err(|_| format!("invalid {}: {}", name, text))
            };
            Ok(Command::Fire(Vector2::new(coord("x")?, coord("y")?)))
        }
    }
}

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker. Returns `None` at end of input.
    pub fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns
    /// false at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}
