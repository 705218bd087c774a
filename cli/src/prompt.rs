//! Interactive yes/no prompt.

use std::io::{self, BufRead, Write};

/// Asks a yes/no question and reads one line from stdin.
///
/// Any answer other than `y`/`n` (case-insensitive, surrounding whitespace
/// ignored) applies the default.
pub fn ask(question: &str, default_yes: bool) -> io::Result<bool> {
    let hint = if default_yes { "(Y/n)" } else { "(y/N)" };
    print!("{question} {hint}: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(parse_answer(&answer, default_yes))
}

fn parse_answer(answer: &str, default_yes: bool) -> bool {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" => true,
        "n" => false,
        _ => default_yes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_answers() {
        assert!(parse_answer("y\n", false));
        assert!(parse_answer(" Y \n", false));
        assert!(!parse_answer("n\n", true));
        assert!(!parse_answer("N\n", true));
    }

    #[test]
    fn test_default_applies_to_anything_else() {
        assert!(parse_answer("\n", true));
        assert!(!parse_answer("\n", false));
        assert!(parse_answer("yes\n", true));
        assert!(!parse_answer("yes\n", false));
        assert!(!parse_answer("maybe\n", false));
    }
}
