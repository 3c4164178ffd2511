use std::fmt;

/// Characters the decoder accepts in symbol positions, for error hints.
const SYMBOL_CHARS: &str = "A-Za-z0-9+/";

/// Errors that can occur during decoding.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character that is not a base64 symbol
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
    },
    /// The padding is malformed or misplaced
    InvalidPadding,
    /// The input length is not a multiple of 4
    InvalidLength { actual: usize },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub(crate) fn invalid_character(input: &str, position: usize) -> Self {
        let char = input[position..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);

        // Truncate long inputs
        let display_input = if input.chars().count() > 60 {
            let head: String = input.chars().take(60).collect();
            format!("{}...", head)
        } else {
            input.to_string()
        };

        DecodeError::InvalidCharacter {
            char,
            position,
            input: display_input,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid character '{}' at position {}",
                        c, position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: invalid character '{}' at position {}",
                        c, position
                    )?;
                }
                writeln!(f)?;

                // Show input with caret pointing at error position; the
                // caret is dropped when the position falls past the
                // truncated echo
                writeln!(f, "  {}", input)?;
                if *position < 60 {
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                }
                writeln!(f)?;

                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m valid characters: {}",
                        SYMBOL_CHARS
                    )
                } else {
                    write!(f, "hint: valid characters: {}", SYMBOL_CHARS)
                }
            }
            DecodeError::InvalidPadding => {
                if use_color {
                    writeln!(f, "\x1b[1;31merror:\x1b[0m invalid padding")?;
                    write!(
                        f,
                        "\n\x1b[1;36mhint:\x1b[0m at most two '=' may appear, and only at the end of the input"
                    )
                } else {
                    writeln!(f, "error: invalid padding")?;
                    write!(
                        f,
                        "\nhint: at most two '=' may appear, and only at the end of the input"
                    )
                }
            }
            DecodeError::InvalidLength { actual } => {
                if use_color {
                    writeln!(f, "\x1b[1;31merror:\x1b[0m invalid length for decode")?;
                } else {
                    writeln!(f, "error: invalid length for decode")?;
                }
                writeln!(f)?;
                writeln!(f, "  input is {} bytes, expected a multiple of 4", actual)?;
                writeln!(f)?;
                if use_color {
                    write!(
                        f,
                        "\x1b[1;36mhint:\x1b[0m add padding (=) or check for missing characters"
                    )
                } else {
                    write!(f, "hint: add padding (=) or check for missing characters")
                }
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_character_display_no_color() {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let err = DecodeError::invalid_character("SGVsbG9faW52YWxpZA==", 7);
        let display = format!("{}", err);

        assert!(display.contains("invalid character '_' at position 7"));
        assert!(display.contains("SGVsbG9faW52YWxpZA=="));
        assert!(display.contains("^"));
        assert!(display.contains("hint:"));
        assert!(display.contains("valid characters: A-Za-z0-9+/"));

        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    fn test_invalid_character_truncates_long_input() {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let input: String = std::iter::repeat('A').take(96).collect();
        let err = DecodeError::invalid_character(&input, 80);
        let display = format!("{}", err);

        assert!(display.contains("at position 80"));
        assert!(display.contains("..."));

        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    fn test_invalid_length_display() {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let err = DecodeError::InvalidLength { actual: 13 };
        let display = format!("{}", err);

        assert!(display.contains("invalid length"));
        assert!(display.contains("input is 13 bytes"));
        assert!(display.contains("multiple of 4"));
        assert!(display.contains("add padding"));

        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    fn test_invalid_padding_display() {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let err = DecodeError::InvalidPadding;
        let display = format!("{}", err);

        assert!(display.contains("invalid padding"));
        assert!(display.contains("at most two '='"));

        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }
}
