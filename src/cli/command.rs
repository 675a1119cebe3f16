/// The fixed verb set of the assistant. The first whitespace-delimited token
/// of a line selects one of these, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Exit,
}

impl Command {
    /// Looks up a verb. Both `exit` and `close` end the session. An
    /// unrecognized verb is not a failure kind; the session loop prints a
    /// fixed notice for it instead.
    pub fn parse(verb: &str) -> Option<Command> {
        match verb.to_lowercase().as_str() {
            "hello" => Some(Command::Hello),
            "add" => Some(Command::Add),
            "change" => Some(Command::Change),
            "phone" => Some(Command::Phone),
            "all" => Some(Command::All),
            "exit" | "close" => Some(Command::Exit),
            _ => None,
        }
    }
}
