use crate::app::error::AppError;
use crate::app::formatter::OutputGenerator;
use crate::app::models::RuntimeConfig;
use std::io::{self, BufRead, Write};

/// Accepts `y`/`yes` in any case, ignoring surrounding whitespace (CRLF included).
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

fn show_request<W: Write>(config: &RuntimeConfig, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", OutputGenerator::confirmation_request(config))?;
    write!(output, "Confirm: ")?;
    output.flush()
}

/// Shows the resolved parameters and reads one line of confirmation.
pub fn confirm<R: BufRead, W: Write>(
    config: &RuntimeConfig,
    mut input: R,
    output: &mut W,
) -> Result<bool, AppError> {
    show_request(config, output)
        .map_err(|e| AppError::system("failed to write confirmation prompt", e))?;

    let mut answer = String::new();
    let read = input.read_line(&mut answer).map_err(AppError::Input)?;
    if read == 0 {
        return Err(AppError::Input(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        )));
    }

    Ok(is_affirmative(&answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::error::EXIT_INVALID_INPUT;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn config() -> RuntimeConfig {
        RuntimeConfig {
            name: "img".to_string(),
            directory: PathBuf::from("/data"),
            separator: "-".to_string(),
            pad_width: 3,
            include_directories: false,
            skip_confirmation: false,
        }
    }

    #[test]
    fn accepts_yes_variants() {
        for answer in ["y\n", "Y\n", "yes\n", "YES\r\n", "  Yes  \n", "y"] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for answer in ["n\n", "no\n", "\n", "yess\n", "ye\n", "y e s\n"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn prompt_shows_directory_and_pattern() {
        let mut output = Vec::new();
        let confirmed = confirm(&config(), Cursor::new("yes\n"), &mut output).unwrap();
        let shown = String::from_utf8(output).unwrap();

        assert!(confirmed);
        assert!(shown.contains("Directory: /data"));
        assert!(shown.contains("img-###.ext"));
        assert!(shown.ends_with("Confirm: "));
    }

    #[test]
    fn declining_returns_false() {
        let mut output = Vec::new();
        assert!(!confirm(&config(), Cursor::new("n\n"), &mut output).unwrap());
    }

    #[test]
    fn closed_input_is_an_input_error() {
        let mut output = Vec::new();
        let err = confirm(&config(), Cursor::new(""), &mut output).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
        assert_eq!(err.exit_code(), EXIT_INVALID_INPUT);
    }
}
