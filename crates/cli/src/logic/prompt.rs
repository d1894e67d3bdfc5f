use crate::prelude::*;

use std::{
    io::{BufRead, StdinLock, Stdout, Write},
    str::FromStr,
};

const CONFIRMATION_WORD: &str = "yes";

/// Asks the operator questions on `output` and reads the answers from `input`,
/// one line each.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the trimmed answer. End of input is an error.
    pub fn ask_line(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(PromptError::InputClosed {
                question: question.trim().to_owned(),
            });
        }
        Ok(answer.trim().to_owned())
    }

    /// Asks until the answer parses and passes `check`.
    pub fn ask_parsed_with<T, F>(&mut self, question: &str, check: F) -> Result<T, PromptError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
        F: Fn(&T) -> Option<String>,
    {
        loop {
            let answer = self.ask_line(question)?;
            let problem = match answer.parse::<T>() {
                Ok(value) => match check(&value) {
                    None => return Ok(value),
                    Some(problem) => problem,
                },
                Err(e) => e.to_string(),
            };
            writeln!(self.output, "⚠️ Invalid value `{answer}`: {problem}")?;
        }
    }

    pub fn ask_parsed<T>(&mut self, question: &str) -> Result<T, PromptError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.ask_parsed_with(question, |_| None)
    }

    pub fn ask_amount(&mut self, question: &str) -> Result<Decimal, PromptError> {
        self.ask_parsed_with(question, |amount: &Decimal| {
            amount
                .is_sign_negative()
                .then(|| "amount must not be negative".to_owned())
        })
    }

    /// `true` only when the operator typed `yes`, in any case.
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        let answer = self.ask_line(question)?;
        Ok(answer.eq_ignore_ascii_case(CONFIRMATION_WORD))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.output.clone()).unwrap()
    }

    #[test]
    fn reads_answers_in_order() {
        let mut prompter = prompter("first\n  second \r\n");
        assert_eq!(prompter.ask_line("a? ").unwrap(), "first");
        assert_eq!(prompter.ask_line("b? ").unwrap(), "second");
        assert_eq!(output(&prompter), "a? b? ");
    }

    #[test]
    fn reprompts_until_answer_parses() {
        let mut prompter = prompter("ten\n\n10\n");
        assert_eq!(prompter.ask_parsed::<u64>("Min delay: ").unwrap(), 10);
        let output = output(&prompter);
        assert_eq!(output.matches("Min delay: ").count(), 3);
        assert!(output.contains("Invalid value `ten`"));
    }

    #[test]
    fn negative_amounts_are_asked_again() {
        let mut prompter = prompter("-0.5\n0.25\n");
        assert_eq!(
            prompter.ask_amount("Min amount: ").unwrap(),
            Decimal::new(25, 2)
        );
        assert!(output(&prompter).contains("must not be negative"));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut prompter = prompter("abc\n");
        assert!(matches!(
            prompter.ask_parsed::<u64>("Max delay: "),
            Err(PromptError::InputClosed { question }) if question == "Max delay:"
        ));
    }

    #[test]
    fn only_yes_confirms() {
        let cases = [
            ("yes", true),
            ("YES", true),
            (" Yes ", true),
            ("y", false),
            ("no", false),
            ("", false),
        ];
        for (answer, expected) in cases {
            let mut prompter = prompter(&format!("{answer}\n"));
            assert_eq!(prompter.confirm("Type 'yes': ").unwrap(), expected, "{answer:?}");
        }
    }
}
