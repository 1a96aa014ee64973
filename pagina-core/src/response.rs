//! Shaping a provider response into source records
//!
//! A content provider answers a query with one block of prose. The block is
//! split on blank lines and each paragraph becomes a titled, located record
//! ready for pagination.

use crate::types::SourceRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Most records produced from one response
pub const MAX_RECORDS: usize = 8;

/// Words taken from a paragraph to title it
const TITLE_WORDS: usize = 7;

const OVERVIEW_DOMAIN: &str = "wikipedia.org";

static SLUG_SEPARATOR: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+"));

/// Build source records from one provider response
///
/// The first paragraph is titled after the query; later ones after their
/// opening words. Blank paragraphs are dropped and at most
/// [`MAX_RECORDS`] records are returned.
pub fn records_from_response(query: &str, response: &str) -> Vec<SourceRecord> {
    response
        .split("\n\n")
        .filter(|paragraph| !paragraph.trim().is_empty())
        .take(MAX_RECORDS)
        .enumerate()
        .map(|(index, paragraph)| {
            let title = if index == 0 {
                format!("{} - Overview", capitalize(query))
            } else {
                let words: Vec<&str> = paragraph.split(' ').take(TITLE_WORDS).collect();
                format!("{}...", words.join(" "))
            };

            let domain = if index == 0 {
                OVERVIEW_DOMAIN.to_string()
            } else {
                format!("example{index}.com")
            };
            let identifier = format!("https://{domain}/{}", slugify(&title));

            SourceRecord::new(title, identifier, paragraph)
        })
        .collect()
}

/// Lower-case `text` and collapse every run of other characters to `-`
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let slug = match SLUG_SEPARATOR.as_ref() {
        Ok(re) => re.replace_all(&lowered, "-").into_owned(),
        Err(_) => lowered,
    };
    slug.trim_matches('-').to_string()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::Locator;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Rust - Overview"), "rust-overview");
        assert_eq!(slugify("  Hello, World!  "), "hello-world");
        assert_eq!(slugify("Ünïcode & more..."), "n-code-more");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("rust language"), "Rust language");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_records_from_response() {
        let response = "Rust is a systems language.\n\n\
                        It was first released in 2015 by Mozilla Research.\n\n  \n\n\
                        Cargo is the package manager.";
        let records = records_from_response("rust", response);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "Rust - Overview");
        assert_eq!(records[0].identifier, "https://wikipedia.org/rust-overview");
        assert_eq!(records[0].body, "Rust is a systems language.");

        assert_eq!(
            records[1].title,
            "It was first released in 2015 by..."
        );
        assert_eq!(
            records[1].identifier,
            "https://example1.com/it-was-first-released-in-2015-by"
        );
        assert_eq!(records[2].title, "Cargo is the package manager....");
        assert!(records[2].identifier.starts_with("https://example2.com/"));
    }

    #[test]
    fn test_records_are_capped() {
        let response = (0..12)
            .map(|i| format!("Paragraph number {i}."))
            .collect::<Vec<_>>()
            .join("\n\n");
        assert_eq!(records_from_response("q", &response).len(), MAX_RECORDS);
    }

    #[test]
    fn test_records_have_valid_locators() {
        let records = records_from_response("what is rust?", "One.\n\nTwo.");
        for record in records {
            assert!(Locator::parse(&record.identifier).is_ok());
        }
    }

    #[test]
    fn test_empty_response() {
        assert!(records_from_response("q", "").is_empty());
        assert!(records_from_response("q", "\n\n \n\n").is_empty());
    }
}
