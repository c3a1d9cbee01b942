/// A prefixed message command split into its name and first argument.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandLine<'a> {
    /// Command name exactly as typed, prefix removed.
    pub name: &'a str,
    pub arg1: Option<&'a str>,
}

/// Split `content` into a command invocation if it starts with `prefix`.
///
/// The name must follow the prefix directly and is matched case-sensitively.
pub fn parse_command_line(content: &str, prefix: char) -> Option<CommandLine<'_>> {
    let content = content.trim_end().strip_prefix(prefix)?;

    let mut words = content.split_whitespace();
    let name = words.next()?;
    if !content.starts_with(name) {
        return None;
    }

    Some(CommandLine {
        name,
        arg1: words.next(),
    })
}

/// Parse a rule number argument; any integer is accepted, range is checked later.
pub fn parse_rule_number(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
