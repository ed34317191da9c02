//! A rough lexical sanity check for generated fragments.
//!
//! This is nowhere near a JavaScript tokenizer. It knows about brackets
//! and single or double quoted strings, which is all the generator ever
//! emits on its own. Regex and template literals from an expression
//! generator will confuse it.

#[derive(::thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unbalanced {
    #[error("unexpected `{found}` at byte {at}")]
    UnexpectedCloser { found: char, at: usize },
    #[error("`{opener}` at byte {at} is never closed")]
    Unclosed { opener: char, at: usize },
    #[error("string starting at byte {at} is never terminated")]
    UnterminatedString { at: usize },
}

fn closer_for(opener: char) -> char {
    match opener {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        _ => unreachable!("not an opener: {}", opener),
    }
}

pub fn check_balanced(text: &str) -> Result<(), Unbalanced> {
    enum State {
        Code,
        Str { quote: char, start: usize },
        Escape { quote: char, start: usize },
    }
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut state = State::Code;
    for (at, c) in text.char_indices() {
        state = match state {
            State::Code => match c {
                '(' | '[' | '{' => {
                    stack.push((c, at));
                    State::Code
                }
                ')' | ']' | '}' => match stack.pop() {
                    Some((opener, _)) if closer_for(opener) == c => State::Code,
                    _ => return Err(Unbalanced::UnexpectedCloser { found: c, at }),
                },
                '\'' | '"' => State::Str { quote: c, start: at },
                _ => State::Code,
            },
            State::Str { quote, start } => match c {
                '\\' => State::Escape { quote, start },
                c if c == quote => State::Code,
                _ => State::Str { quote, start },
            },
            State::Escape { quote, start } => State::Str { quote, start },
        };
    }
    match state {
        State::Code => match stack.pop() {
            Some((opener, at)) => Err(Unbalanced::Unclosed { opener, at }),
            None => Ok(()),
        },
        State::Str { start, .. } | State::Escape { start, .. } => Err(Unbalanced::UnterminatedString { at: start }),
    }
}

pub fn is_balanced(text: &str) -> bool {
    check_balanced(text).is_ok()
}
