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
//! Reading numbers from the player.

use std::io::{self, BufRead, Write};

use seabattle::config::QUIT_WORDS;
use thiserror::Error;

/// Error returned when no number could be read.
#[derive(Debug, Error)]
pub enum InputError {
    /// The player asked to quit, or input ended.
    #[error("Game halted")]
    Halted,
    /// Reading or prompting failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Helper to read input from the player.
pub struct InputReader<B, W> {
    read: B,
    prompt_out: W,
    buf: String,
}

impl<B: BufRead, W: Write> InputReader<B, W> {
    /// Read lines from `read`, writing prompts and complaints to `prompt_out`.
    pub fn new(read: B, prompt_out: W) -> Self {
        Self {
            read,
            prompt_out,
            buf: String::new(),
        }
    }

    /// Repeatedly asks for `what` until the player enters a whole number in
    /// `min..=max`. Non-numbers are complained about, out of range numbers are just
    /// asked for again. Any of the quit words, or the end of input, halts.
    pub fn read_int(&mut self, what: &str, min: usize, max: usize) -> Result<usize, InputError> {
        loop {
            self.read_line(&format!("Input {}:", what))?;
            self.buf.make_ascii_lowercase();
            let answer = self.buf.trim();
            if QUIT_WORDS.iter().any(|&word| word == answer) {
                return Err(InputError::Halted);
            }
            match answer.parse::<i64>() {
                Err(_) => writeln!(self.prompt_out, "Not a number")?,
                Ok(n) if n >= min as i64 && n <= max as i64 => return Ok(n as usize),
                Ok(_) => {}
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_line(&mut self, prompt: &str) -> Result<(), InputError> {
        write!(self.prompt_out, "{} ", prompt)?;
        self.prompt_out.flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            writeln!(self.prompt_out)?;
            return Err(InputError::Halted);
        }
        Ok(())
    }
}
