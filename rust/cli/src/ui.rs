//! Small helpers for consistent terminal messages.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message with a "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Writes a prompt without a newline and flushes so it shows before input.
pub fn prompt(out: &mut dyn Write, text: &str) -> std::io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        let mut buf = Vec::new();
        write_error(&mut buf, "boom").unwrap();
        display_warning(&mut buf, "careful").unwrap();
        prompt(&mut buf, "> ").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: boom\nWARNING: careful\n> ");
    }
}
