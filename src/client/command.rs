// src/client/command.rs

/// One line of chat input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Blank,
    Exit,
    ShowDialog,
    Reset,
    /// A message for the bot, exactly as typed.
    Say(&'a str),
}

impl<'a> Input<'a> {
    /// Commands and blank lines match on the trimmed line; messages keep their whitespace.
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Input::Blank,
            "/exit" | "/quit" => Input::Exit,
            "/dialog" => Input::ShowDialog,
            "/reset" => Input::Reset,
            _ => Input::Say(line),
        }
    }
}
