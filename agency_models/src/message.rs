/// Split a message into its lines, accepting both LF and CRLF line endings.
pub fn message_lines(message: &str) -> Vec<String> {
    message
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
        .collect()
}
