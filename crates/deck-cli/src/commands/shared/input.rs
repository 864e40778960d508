use std::io::{BufRead, IsTerminal};

/// Use the `--password` flag when given, otherwise read one line from stdin.
pub fn read_password(flag: Option<&str>) -> anyhow::Result<String> {
    if let Some(password) = flag {
        return Ok(password.to_string());
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
    }
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("a password is required (pass --password or pipe it on stdin)");
    }
    Ok(password)
}

/// Treat an empty flag value as "clear this field".
#[must_use]
pub fn blank_to_none(raw: Option<&str>) -> Option<Option<String>> {
    raw.map(|value| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{blank_to_none, read_password};

    #[test]
    fn flag_password_skips_stdin() {
        assert_eq!(read_password(Some("hunter2")).expect("flag should win"), "hunter2");
    }

    #[test]
    fn blank_values_clear_fields() {
        assert_eq!(blank_to_none(None), None);
        assert_eq!(blank_to_none(Some("  ")), Some(None));
        assert_eq!(blank_to_none(Some(" notes ")), Some(Some("notes".to_string())));
    }
}
