use crate::error::AppImgError;
use dialoguer::{Confirm, Input};
use std::collections::VecDeque;
use std::fmt;

pub trait Prompter {
    /// Reads one line of free-form input. `None` means input has ended.
    fn input(&mut self, prompt: &str) -> Result<Option<String>, AppImgError>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, AppImgError>;
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> Result<Option<String>, AppImgError> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(answer) => Ok(Some(answer)),
            Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, AppImgError> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}

/// Answers prompts from a fixed list. Once the list is exhausted, input ends
/// and every yes/no question takes its default, which makes an empty script
/// the non-interactive prompter.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    pub fn non_interactive() -> Self {
        Self::default()
    }

    /// Every prompt shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> Result<Option<String>, AppImgError> {
        self.asked.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, AppImgError> {
        self.asked.push(prompt.to_string());
        let Some(answer) = self.answers.pop_front() else {
            return Ok(default);
        };

        Ok(match answer.trim().to_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }
}

/// Asks `prompt` until `validate` accepts the answer. Rejections are logged.
/// Gives up after `max_attempts` answers (never, when `None`) or when input ends.
pub fn ask_until_valid<T, E, F>(
    prompter: &mut dyn Prompter,
    prompt: &str,
    max_attempts: Option<usize>,
    mut validate: F,
) -> Result<T, AppImgError>
where
    E: fmt::Display,
    F: FnMut(&str) -> Result<T, E>,
{
    let cancelled = || AppImgError::PromptCancelled {
        prompt: prompt.to_string(),
    };

    let mut attempts = 0;
    loop {
        if max_attempts.is_some_and(|max| attempts >= max) {
            return Err(cancelled());
        }
        attempts += 1;

        let Some(answer) = prompter.input(prompt)? else {
            return Err(cancelled());
        };

        match validate(answer.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => tracing::error!("{}. Please try again.", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_even(input: &str) -> Result<u32, String> {
        match input.parse::<u32>() {
            Ok(n) if n % 2 == 0 => Ok(n),
            _ => Err(format!("{input} is not an even number")),
        }
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut prompter = ScriptedPrompter::new(["x", "3", " 4 ", "6"]);

        let value = ask_until_valid(&mut prompter, "Even", None, parse_even).unwrap();

        assert_eq!(value, 4);
        assert_eq!(prompter.asked().len(), 3);
        assert_eq!(prompter.remaining(), 1);
    }

    #[test]
    fn test_bounded_attempts_give_up() {
        let mut prompter = ScriptedPrompter::new(["1", "3", "4"]);

        let result = ask_until_valid(&mut prompter, "Even", Some(2), parse_even);

        assert!(matches!(
            result,
            Err(AppImgError::PromptCancelled { prompt }) if prompt == "Even"
        ));
        assert_eq!(prompter.remaining(), 1);
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut prompter = ScriptedPrompter::new(["1"]);

        let result = ask_until_valid(&mut prompter, "Even", None, parse_even);

        assert!(matches!(result, Err(AppImgError::PromptCancelled { .. })));
    }

    #[test]
    fn test_scripted_confirm_answers() {
        let mut prompter = ScriptedPrompter::new(["y", "YES", "n", "", "maybe"]);

        assert!(prompter.confirm("q", false).unwrap());
        assert!(prompter.confirm("q", false).unwrap());
        assert!(!prompter.confirm("q", true).unwrap());
        assert!(prompter.confirm("q", true).unwrap());
        assert!(!prompter.confirm("q", true).unwrap());
    }

    #[test]
    fn test_non_interactive_takes_defaults() {
        let mut prompter = ScriptedPrompter::non_interactive();

        assert!(prompter.confirm("Throttle?", true).unwrap());
        assert!(!prompter.confirm("Open folder?", false).unwrap());
        assert_eq!(prompter.input("Profile").unwrap(), None);
    }
}
