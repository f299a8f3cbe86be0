//! Command-line normalization and quote-aware tokenization.

use system_shell_contract::{ParsedCommandLine, ShellError, ShellErrorCode};

/// Normalizes and tokenizes `line`.
///
/// The line is trimmed and lower-cased before tokenizing, so `  Theme AMBER ` and `theme amber`
/// parse identically. Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns a [`ShellErrorCode::Usage`] error for an unterminated quote or a dangling escape.
pub fn parse_command_line(line: &str) -> Result<Option<ParsedCommandLine>, ShellError> {
    let normalized = line.trim().to_lowercase();
    let mut tokens = tokenize(&normalized)?.into_iter();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };
    Ok(Some(ParsedCommandLine {
        name,
        args: tokens.collect(),
    }))
}

/// Splits `line` on unquoted whitespace. Single and double quotes group words; a backslash
/// escapes the next character.
///
/// # Errors
///
/// Returns a usage error for an unterminated quote or a trailing backslash.
pub fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote = None::<char>;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (Some(active), _) if ch == active => quote = None,
            (_, '\\') => {
                let next = chars
                    .next()
                    .ok_or_else(|| usage_error("dangling escape at end of line"))?;
                current.push(next);
                in_token = true;
            }
            (Some(_), _) => current.push(ch),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_token = true;
            }
            (None, _) if ch.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, _) => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err(usage_error("unterminated quoted string"));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn usage_error(message: &str) -> ShellError {
    ShellError::new(ShellErrorCode::Usage, message)
}
