//! Plugin command parsing

/// Words that make the plugin print its usage.
pub const HELP_SYNONYMS: [&str; 5] = ["commands", "Kommandos", "hilfe", "Hilfe", "help"];

/// A parsed plugin command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Toggle the nickname animation. Missing tags are filled in by the caller.
    Toggle {
        /// Tag used on odd ticks.
        first_tag: Option<&'a str>,
        /// Tag used on even ticks.
        last_tag: Option<&'a str>,
    },
    /// Print the usage.
    Help,
    /// Anything we don't understand, including an empty line.
    Unknown,
}

impl<'a> Command<'a> {
    /// Parses a command line, without the plugin keyword.
    ///
    /// Tokens are separated by one or more spaces and trailing tokens are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clientmanager::command::Command;
    ///
    /// assert_eq!(
    ///     Command::parse("movename * ~"),
    ///     Command::Toggle { first_tag: Some("*"), last_tag: Some("~") }
    /// );
    /// assert_eq!(Command::parse("help"), Command::Help);
    /// assert_eq!(Command::parse("foo bar"), Command::Unknown);
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Command<'a> {
        let mut tokens = line.split(' ').filter(|token| !token.is_empty());

        match tokens.next() {
            Some("movename") => Command::Toggle {
                first_tag: tokens.next(),
                last_tag: tokens.next(),
            },
            Some(word) if HELP_SYNONYMS.contains(&word) => Command::Help,
            _ => Command::Unknown,
        }
    }
}

/// Returns the one-line usage printed for [`Command::Help`].
#[must_use]
pub fn usage(keyword: &str) -> String {
    format!(
        "Commands: \n\t /{keyword} movename firsttag lasttag\t\tanimates tags around your nickname. Stop with the same command."
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("commands")]
    #[case("Kommandos")]
    #[case("hilfe")]
    #[case("Hilfe")]
    #[case("help")]
    #[case("help me please")]
    fn help_synonyms(#[case] line: &str) {
        assert_eq!(Command::parse(line), Command::Help);
    }

    #[rstest]
    #[case("", Command::Unknown)]
    #[case("   ", Command::Unknown)]
    #[case("foo bar", Command::Unknown)]
    #[case("HELP", Command::Unknown)]
    #[case("MoveName", Command::Unknown)]
    #[case("movenames", Command::Unknown)]
    fn unknown_commands(#[case] line: &str, #[case] expected: Command<'_>) {
        assert_eq!(Command::parse(line), expected);
    }

    #[test]
    fn toggle_without_tags() {
        assert_eq!(
            Command::parse("movename"),
            Command::Toggle {
                first_tag: None,
                last_tag: None
            }
        );
    }

    #[test]
    fn toggle_with_one_tag() {
        assert_eq!(
            Command::parse("movename *"),
            Command::Toggle {
                first_tag: Some("*"),
                last_tag: None
            }
        );
    }

    #[test]
    fn toggle_skips_repeated_spaces_and_extra_tokens() {
        assert_eq!(
            Command::parse("  movename   *  ~ ignored"),
            Command::Toggle {
                first_tag: Some("*"),
                last_tag: Some("~")
            }
        );
    }

    #[test]
    fn usage_mentions_keyword() {
        assert!(usage("ClientManager").contains("/ClientManager movename firsttag lasttag"));
    }
}
