use rhakimi::{CodecError, ConfigError};
use std::error::Error;
use std::io::IsTerminal;

/// Check if colored output should be used
pub fn should_use_color(no_color: bool) -> bool {
    // Respect NO_COLOR environment variable
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    std::io::stderr().is_terminal()
}

/// Prints `error: ...` and, when one applies, a `hint: ...` line to stderr.
pub fn print_error(err: &(dyn Error + 'static), no_color: bool) {
    let use_color = should_use_color(no_color);

    if use_color {
        eprintln!("\x1b[1;31merror:\x1b[0m {}", err);
    } else {
        eprintln!("error: {}", err);
    }

    for hint in hints(err) {
        if use_color {
            eprintln!("\x1b[1;36mhint:\x1b[0m {}", hint);
        } else {
            eprintln!("hint: {}", hint);
        }
    }
}

fn hints(err: &(dyn Error + 'static)) -> Vec<String> {
    if let Some(codec) = err.downcast_ref::<CodecError>() {
        return codec.hint().map(str::to_string).into_iter().collect();
    }

    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::UnknownTable { suggestion, .. }) => {
            let mut hints = Vec::new();
            if let Some(suggestion) = suggestion {
                hints.push(format!("did you mean '{}'?", suggestion));
            }
            hints.push("run `rhakimi tables` to see all tables".to_string());
            hints
        }
        Some(ConfigError::Table { source, .. }) => {
            source.hint().map(str::to_string).into_iter().collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!should_use_color(true));
    }

    #[test]
    fn test_codec_error_hint() {
        let err = CodecError::TruncatedInput { actual: 1 };
        let hints = hints(&err);
        assert_eq!(hints.len(), 1);
        assert!(hints[0].contains("cut off"));
    }

    #[test]
    fn test_unknown_table_hints() {
        let err = ConfigError::UnknownTable {
            name: "hakmi".to_string(),
            suggestion: Some("hakimi".to_string()),
        };
        let hints = hints(&err);
        assert_eq!(hints[0], "did you mean 'hakimi'?");
        assert!(hints[1].contains("rhakimi tables"));
    }

    #[test]
    fn test_plain_error_has_no_hint() {
        let err: Box<dyn Error> = "plain".into();
        assert!(hints(err.as_ref()).is_empty());
    }
}
