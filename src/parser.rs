/// Splits one raw input line into a lower-cased command and its arguments.
///
/// Arguments are whitespace-delimited words, or spans wrapped in `"` or `'`.
/// A quoted span keeps embedded spaces and the other quote kind verbatim;
/// there is no escape for the active quote character inside its own span.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    // Collapse every whitespace run to a single space and trim the ends.
    let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ");

    if normalized.is_empty() {
        return (String::new(), Vec::new());
    }

    let (first, rest) = match normalized.split_once(' ') {
        Some((first, rest)) => (first, rest),
        None => return (normalized.to_lowercase(), Vec::new()),
    };

    (first.to_lowercase(), split_args(rest))
}

// Character-by-character scan with two states: outside any quote, or inside
// a span opened by `quote`. Only the matching character closes the span; the
// other quote kind is literal inside it.
fn split_args(raw: &str) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in raw.chars() {
        match in_quotes {
            Some(quote) => {
                if ch == quote {
                    in_quotes = None;
                } else {
                    current.push(ch);
                }
            }
            None => match ch {
                '"' | '\'' => in_quotes = Some(ch),
                ' ' => {
                    if !current.is_empty() {
                        args.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(ch),
            },
        }
    }

    // Final flush. A quoted empty argument survives only as the sole argument
    // of a line that ends on its closing quote; empty tokens anywhere else
    // are dropped. An unclosed quote keeps whatever it accumulated.
    if !current.is_empty() || (in_quotes.is_none() && args.is_empty() && raw.ends_with(['"', '\'']))
    {
        args.push(current);
    }

    args
}
