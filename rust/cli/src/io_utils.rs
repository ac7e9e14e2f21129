//! Reading interactive input.

use std::io::BufRead;

/// Reads one line, trimmed. `None` on EOF or a read error, which callers
/// treat as the player leaving the table.
///
/// ```rust
/// use std::io::Cursor;
/// # use felt_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  raise 50 \n");
/// assert_eq!(read_stdin_line(&mut input), Some("raise 50".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
