use crate::traits::Confirm;
use colored::Colorize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Yes/no prompt over any reader/writer pair.
///
/// `y` (any case) confirms, `n` or an empty line declines, anything else
/// asks again. End of input or a broken terminal declines.
pub struct PromptGate<R, W> {
    input: R,
    output: W,
}

impl PromptGate<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptGate<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Confirm for PromptGate<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        loop {
            let shown = write!(self.output, "{} {} [y/N] ", "?".yellow().bold(), question)
                .and_then(|()| self.output.flush());
            if let Err(e) = shown {
                eprintln!("\nWarning: Failed to write prompt: {}", e);
                return false;
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return false,
                Ok(_) => {
                    if let Some(answer) = parse_answer(&line) {
                        return answer;
                    }
                }
                Err(e) => {
                    eprintln!("\nWarning: Failed to read input: {}", e);
                    return false;
                }
            }
        }
    }
}

fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" | "" => Some(false),
        _ => None,
    }
}
