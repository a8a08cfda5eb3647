//! Line command parsing for the interactive session.

use notepad_core::NoteId;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <title> | <content>`; without `|` the whole text is the title.
    Add { title: String, content: String },
    List,
    Edit(NoteId),
    Title(String),
    Content(String),
    Save,
    Cancel,
    Delete(NoteId),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
commands:
  add <title> | <content>   create a note
  list                      show all notes
  edit <id>                 start editing a note
  title <text>              set the working title
  content <text>            set the working content
  save                      save the note being edited
  cancel                    discard working changes
  delete <id>               delete a note
  help                      show this text
  quit                      leave";

/// Parses one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_end_matches(['\n', '\r']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "add" | "a" => {
            let (title, content) = rest.split_once('|').unwrap_or((rest, ""));
            Command::Add {
                title: title.to_string(),
                content: content.to_string(),
            }
        }
        "list" | "ls" => Command::List,
        "edit" | "e" => Command::Edit(parse_id(rest)?),
        "title" => Command::Title(rest.to_string()),
        "content" => Command::Content(rest.to_string()),
        "save" => Command::Save,
        "cancel" => Command::Cancel,
        "delete" | "rm" => Command::Delete(parse_id(rest)?),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };

    Ok(Some(command))
}

fn parse_id(value: &str) -> Result<NoteId, String> {
    let value = value.trim();
    value
        .parse::<i64>()
        .map(NoteId)
        .map_err(|_| format!("expected a note id, got `{value}`"))
}

#[cfg(test)]
mod tests {
    use super::{parse_line, Command};
    use notepad_core::NoteId;

    #[test]
    fn add_splits_title_and_content() {
        let command = parse_line("add Groceries | Milk, eggs\n").expect("line should parse");
        assert_eq!(
            command,
            Some(Command::Add {
                title: "Groceries ".to_string(),
                content: " Milk, eggs".to_string(),
            })
        );
    }

    #[test]
    fn add_without_separator_is_title_only() {
        let command = parse_line("add just a title").expect("line should parse");
        assert_eq!(
            command,
            Some(Command::Add {
                title: "just a title".to_string(),
                content: String::new(),
            })
        );
    }

    #[test]
    fn id_commands_require_numbers() {
        assert_eq!(
            parse_line("delete 1700000000000").expect("line should parse"),
            Some(Command::Delete(NoteId(1_700_000_000_000)))
        );
        assert!(parse_line("edit abc").is_err());
        assert!(parse_line("edit").is_err());
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_line("   \n").expect("line should parse"), None);
        assert!(parse_line("frobnicate").is_err());
        assert_eq!(parse_line("QUIT").expect("line should parse"), Some(Command::Quit));
    }

    #[test]
    fn title_keeps_text_verbatim() {
        assert_eq!(
            parse_line("title Shopping list").expect("line should parse"),
            Some(Command::Title("Shopping list".to_string()))
        );
        assert_eq!(
            parse_line("content").expect("line should parse"),
            Some(Command::Content(String::new()))
        );
    }
}
