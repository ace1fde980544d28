//! Line-oriented operation scripts.
//!
//! One command per line, words separated by whitespace. Blank lines and lines
//! starting with `#` are ignored.
//!
//! ```text
//! add-node Auckland
//! add-edge Auckland Christchurch Plane
//! has-edge Christchurch Auckland Plane
//! print
//! ```

use crate::types::{GraphError, GraphResult};

/// A single graph operation parsed from a script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddNode(String),
    RemoveNode(String),
    AddEdge { from: String, to: String, kind: String },
    RemoveEdge { from: String, to: String, kind: String },
    HasEdge { from: String, to: String, kind: String },
    EdgesOfType(String),
    Print,
}

impl Command {
    /// The script keyword for this command.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::AddNode(_) => "add-node",
            Self::RemoveNode(_) => "remove-node",
            Self::AddEdge { .. } => "add-edge",
            Self::RemoveEdge { .. } => "remove-edge",
            Self::HasEdge { .. } => "has-edge",
            Self::EdgesOfType(_) => "edges-of-type",
            Self::Print => "print",
        }
    }
}

/// Parse a whole script. Returns each command with its 1-based line number.
///
/// Fails on the first malformed line; nothing is executed by parsing.
pub fn parse_script(source: &str) -> GraphResult<Vec<(usize, Command)>> {
    let mut commands = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        if let Some(command) = parse_line(line, line_no)? {
            commands.push((line_no, command));
        }
    }
    Ok(commands)
}

/// Parse one line. Blank and comment lines yield `None`.
pub fn parse_line(line: &str, line_no: usize) -> GraphResult<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let (keyword, args) = match words.split_first() {
        Some((keyword, args)) => (*keyword, args),
        None => return Ok(None),
    };

    let command = match (keyword.to_lowercase().as_str(), args) {
        ("add-node", [name]) => Command::AddNode(name.to_string()),
        ("remove-node", [name]) => Command::RemoveNode(name.to_string()),
        ("add-edge", [from, to, kind]) => Command::AddEdge {
            from: from.to_string(),
            to: to.to_string(),
            kind: kind.to_string(),
        },
        ("remove-edge", [from, to, kind]) => Command::RemoveEdge {
            from: from.to_string(),
            to: to.to_string(),
            kind: kind.to_string(),
        },
        ("has-edge", [from, to, kind]) => Command::HasEdge {
            from: from.to_string(),
            to: to.to_string(),
            kind: kind.to_string(),
        },
        ("edges-of-type", [kind]) => Command::EdgesOfType(kind.to_string()),
        ("print", []) => Command::Print,
        (kw, _) => {
            let message = match expected_arity(kw) {
                Some(n) => format!("{} expects {} argument(s), got {}", kw, n, args.len()),
                None => format!("unknown command: {}", keyword),
            };
            return Err(GraphError::Script {
                line: line_no,
                message,
            });
        }
    };
    Ok(Some(command))
}

fn expected_arity(keyword: &str) -> Option<usize> {
    match keyword {
        "add-node" | "remove-node" | "edges-of-type" => Some(1),
        "add-edge" | "remove-edge" | "has-edge" => Some(3),
        "print" => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_commands() {
        let script = "\
# sample
add-node Auckland

add-edge Auckland Christchurch Plane
remove-edge Auckland Christchurch Plane
has-edge Auckland Christchurch Plane
edges-of-type Plane
remove-node Auckland
print
";
        let commands = parse_script(script).unwrap();
        let keywords: Vec<&str> = commands.iter().map(|(_, c)| c.keyword()).collect();
        assert_eq!(
            keywords,
            [
                "add-node",
                "add-edge",
                "remove-edge",
                "has-edge",
                "edges-of-type",
                "remove-node",
                "print"
            ]
        );
        assert_eq!(commands[0].0, 2);
        assert_eq!(commands[1].0, 4);
        assert_eq!(
            commands[1].1,
            Command::AddEdge {
                from: "Auckland".into(),
                to: "Christchurch".into(),
                kind: "Plane".into(),
            }
        );
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        assert_eq!(
            parse_line("ADD-NODE Nelson", 1).unwrap(),
            Some(Command::AddNode("Nelson".into()))
        );
    }

    #[test]
    fn test_wrong_arity_reports_line() {
        let err = parse_script("print\nadd-edge A B\n").unwrap_err();
        match err {
            GraphError::Script { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("expects 3"));
            }
            e => panic!("Expected Script error, got {:?}", e),
        }
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_line("shortest-path A B", 7).unwrap_err();
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("unknown command"));
    }
}
