/// A command line entered after `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExCommand {
    /// `q` / `q!`
    Quit { force: bool },
    /// `w`
    Write,
    /// `wq`
    WriteQuit,
    /// The prompt was dismissed or left empty.
    Cancelled,
    Unknown(String),
}

impl ExCommand {
    /// Parses the prompt text (without the leading `:`). Matching is exact;
    /// surrounding whitespace makes a command unknown.
    pub fn parse(text: &str) -> Self {
        match text {
            "" => ExCommand::Cancelled,
            "q" => ExCommand::Quit { force: false },
            "q!" => ExCommand::Quit { force: true },
            "w" => ExCommand::Write,
            "wq" => ExCommand::WriteQuit,
            other => ExCommand::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit() {
        assert_eq!(ExCommand::parse("q"), ExCommand::Quit { force: false });
        assert_eq!(ExCommand::parse("q!"), ExCommand::Quit { force: true });
    }

    #[test]
    fn test_parse_write() {
        assert_eq!(ExCommand::parse("w"), ExCommand::Write);
        assert_eq!(ExCommand::parse("wq"), ExCommand::WriteQuit);
    }

    #[test]
    fn test_parse_empty_is_cancelled() {
        assert_eq!(ExCommand::parse(""), ExCommand::Cancelled);
    }

    #[test]
    fn test_parse_unknown() {
        match ExCommand::parse("x") {
            ExCommand::Unknown(s) => assert_eq!(s, "x"),
            other => panic!("expected Unknown, got {:?}", other),
        }
        assert_eq!(ExCommand::parse(" q"), ExCommand::Unknown(" q".to_string()));
    }
}
