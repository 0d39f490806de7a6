use std::io;
use std::path::Path;

/// Load the seed word list: one word per line, blank lines and `#` comments
/// skipped, everything uppercased.
pub fn load_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_word_list(&contents))
}

pub fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|word| word.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let contents = "# animals\ncat\n\n  \ndog\n# end\n";
        assert_eq!(parse_word_list(contents), vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_uppercases_and_trims() {
        let contents = "  house  \nMouse\n";
        assert_eq!(parse_word_list(contents), vec!["HOUSE", "MOUSE"]);
    }
}
