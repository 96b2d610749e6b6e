use tfl_entail::types::err::ErrorKind;

/// The exit code for an error: 1 for bad input, and 2 for a check or search which could not be completed.
pub fn exit_code(error: &ErrorKind) -> i32 {
    match error {
        ErrorKind::Config(_) | ErrorKind::Parse(_) => 1,
        ErrorKind::Encoding(_) | ErrorKind::Generation(_) | ErrorKind::Oracle(_) => 2,
    }
}

/// Reads a count of premises, written either as `N` or as `MIN..=MAX`.
pub fn premise_range(text: &str) -> Option<(usize, usize)> {
    match text.split_once("..=") {
        Some((min, max)) => Some((min.trim().parse().ok()?, max.trim().parse().ok()?)),
        None => {
            let count = text.trim().parse().ok()?;
            Some((count, count))
        }
    }
}
