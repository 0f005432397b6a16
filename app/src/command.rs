//! User commands read from the terminal.

/// The two controls of the game, plus housekeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Draw a new random pair
    Select,
    /// Start a battle with the current pair
    Battle,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; `None` for blank or unknown input
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "select" | "s" => Some(Command::Select),
            "battle" | "start" | "b" => Some(Command::Battle),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "exit" | "q" => Some(Command::Quit),
            _ => None,
        }
    }
}

pub const HELP: &str = "\
Commands:
  select (s)   Select Pokémon
  battle (b)   Start Battle!
  help   (h)   Show this help
  quit   (q)   Exit
";
