//! Reading scenario text from a file or standard input.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use crate::config::END_OF_DATA;

/// Usage text printed alongside input errors.
pub const USAGE: &str = "\
Usage: volley [FILE]
Leave FILE blank (or pass `stdin`) to read from standard input; enter 'EOD' to end the input.

Input:
The first line holds the width (1 to 999) and the height of the battle area; the height is a letter (A = 1 .. Z = 26).
The second line holds the number of battleships each player gets.
Each following ship line holds the type (P or Q), the width, the height, and the
coordinates of the ship for Player-1 and for Player-2.
The next line holds the target locations of the missiles fired by Player-1.
The last line holds the target locations of the missiles fired by Player-2.

Example:
5 E
2
Q 1 1 A1 B2
P 2 1 D4 C3
A1 B2 B2 B3
A1 B2 B3 A1 D1 E1 D4 D4 D5 D5";

/// Where the scenario comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// No argument, or the literal `stdin`, selects standard input.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path != Path::new("stdin") => Source::File(path),
            _ => Source::Stdin,
        }
    }

    /// Read every scenario line from this source.
    pub fn read_lines(&self) -> io::Result<Vec<String>> {
        match self {
            Source::Stdin => read_until_end_of_data(io::stdin().lock()),
            Source::File(path) => {
                let text = fs::read_to_string(path)?;
                Ok(text.lines().map(str::to_owned).collect())
            }
        }
    }
}

/// Collect lines until end of input or a line starting with `EOD` in any case.
pub fn read_until_end_of_data<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if is_end_of_data(&line) {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

fn is_end_of_data(line: &str) -> bool {
    line.get(..END_OF_DATA.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(END_OF_DATA))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_end_of_data_marker() {
        let input = "5 E\n2\nEod\nignored\n";
        let lines = read_until_end_of_data(input.as_bytes()).unwrap();
        assert_eq!(lines, vec!["5 E", "2"]);
    }

    #[test]
    fn reads_to_end_without_marker() {
        let lines = read_until_end_of_data("a\nb".as_bytes()).unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn stdin_argument_selects_standard_input() {
        assert_eq!(Source::from_arg(None), Source::Stdin);
        assert_eq!(Source::from_arg(Some("stdin".into())), Source::Stdin);
        assert_eq!(
            Source::from_arg(Some("game.txt".into())),
            Source::File("game.txt".into())
        );
    }
}
