//! Lenient line parser for `md5sum`-style manifests

use crate::ManifestEntry;
use regex::Regex;
use sumcheck_errors::{Error, ManifestError};
use sumcheck_hash::{Hash, HEX_LEN};
use tracing::debug;

/// Parses manifest text into entries, dropping anything it does not recognise
#[derive(Debug, Clone)]
pub struct ManifestParser {
    line_re: Regex,
}

impl ManifestParser {
    /// Build the parser for 32-digit MD5 lines
    ///
    /// # Errors
    /// Returns an error if the line pattern fails to compile.
    pub fn new() -> Result<Self, Error> {
        let pattern = format!(r"^([0-9A-Fa-f]{{{HEX_LEN}}})\s{{2}}(.+)$");
        let line_re = Regex::new(&pattern).map_err(|e| {
            Error::from(ManifestError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })
        })?;
        Ok(Self { line_re })
    }

    /// Parse manifest text, preserving line order.
    ///
    /// Blank lines and `#` comments are skipped. Lines that do not match the
    /// hash pattern are dropped and never counted.
    #[must_use]
    pub fn parse(&self, text: &str) -> Vec<ManifestEntry> {
        text.lines()
            .enumerate()
            .filter_map(|(idx, line)| self.parse_line(idx + 1, line))
            .collect()
    }

    /// Parse a single line; `None` for blank, comment or malformed lines
    #[must_use]
    pub fn parse_line(&self, line_no: usize, line: &str) -> Option<ManifestEntry> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let Some(caps) = self.line_re.captures(line) else {
            debug!(line = line_no, "dropping malformed manifest line");
            return None;
        };

        let file_name = caps[2].trim();
        if file_name.is_empty() {
            debug!(line = line_no, "dropping manifest line without a file name");
            return None;
        }

        // regex already guarantees 32 hex digits
        let expected = Hash::from_hex(&caps[1]).ok()?;

        Some(ManifestEntry {
            line: line_no,
            expected,
            file_name: file_name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parser() -> ManifestParser {
        ManifestParser::new().unwrap()
    }

    #[test]
    fn test_parses_valid_line() {
        let entries = parser().parse("d41d8cd98f00b204e9800998ecf8427e  empty.txt\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].line, 1);
        assert_eq!(entries[0].file_name, "empty.txt");
        assert_eq!(
            entries[0].expected.to_hex(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_uppercase_hash_is_lowered() {
        let entry = parser()
            .parse_line(1, "D41D8CD98F00B204E9800998ECF8427E  EMPTY.TXT")
            .unwrap();
        assert_eq!(entry.expected.to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(entry.file_name, "EMPTY.TXT");
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let text = "# comment\n\n   \n  # indented comment\n";
        assert!(parser().parse(text).is_empty());
    }

    #[test]
    fn test_malformed_lines_dropped() {
        let p = parser();
        assert!(p.parse_line(1, "not a valid line").is_none());
        // single separator
        assert!(p
            .parse_line(1, "d41d8cd98f00b204e9800998ecf8427e empty.txt")
            .is_none());
        // binary-mode marker
        assert!(p
            .parse_line(1, "d41d8cd98f00b204e9800998ecf8427e *empty.txt")
            .is_none());
        // 31 digits
        assert!(p
            .parse_line(1, "d41d8cd98f00b204e9800998ecf8427  empty.txt")
            .is_none());
        // 33 digits
        assert!(p
            .parse_line(1, "d41d8cd98f00b204e9800998ecf8427ee  empty.txt")
            .is_none());
        // separator but no name
        assert!(p
            .parse_line(1, "d41d8cd98f00b204e9800998ecf8427e     ")
            .is_none());
    }

    #[test]
    fn test_tab_separators_and_crlf() {
        let entries = parser().parse("d41d8cd98f00b204e9800998ecf8427e\t\tsub/dir/a.bin\r\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name, "sub/dir/a.bin");
    }

    #[test]
    fn test_name_with_inner_spaces_kept() {
        let entry = parser()
            .parse_line(3, "d41d8cd98f00b204e9800998ecf8427e  my file  v2.txt")
            .unwrap();
        assert_eq!(entry.file_name, "my file  v2.txt");
        assert_eq!(entry.line, 3);
    }

    #[test]
    fn test_order_and_line_numbers_preserved() {
        let text = "\
# header
aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa  first.bin
garbage
bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb  second.bin
";
        let entries = parser().parse(text);
        let names: Vec<_> = entries.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, ["first.bin", "second.bin"]);
        assert_eq!(entries[0].line, 2);
        assert_eq!(entries[1].line, 4);
    }

    proptest! {
        #[test]
        fn prop_well_formed_lines_parse(
            digest in proptest::array::uniform16(any::<u8>()),
            upper in any::<bool>(),
            name in "[A-Za-z0-9_./-][A-Za-z0-9_ ./-]{0,30}[A-Za-z0-9_.-]",
        ) {
            let hash = Hash::from_bytes(digest);
            let hex = if upper { hash.to_hex().to_uppercase() } else { hash.to_hex() };
            let line = format!("{hex}  {name}");
            let entry = parser().parse_line(1, &line).unwrap();
            prop_assert_eq!(entry.expected, hash);
            prop_assert_eq!(entry.file_name, name);
        }

        #[test]
        fn prop_lines_without_hex_prefix_are_dropped(line in "[g-z ]{0,80}") {
            prop_assert!(parser().parse_line(1, &line).is_none());
        }
    }
}
