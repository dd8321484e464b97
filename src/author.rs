use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;
use std::{fs, io};

use serde::Deserialize;

use crate::text_utils::normalize;

/// One blog author. `slug` is the lookup key used by templates and data
/// files; `name` is the display name posts reference in their front matter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    pub slug: String,
    pub name: String,
}

#[derive(Deserialize)]
struct AuthorsFile {
    authors: Vec<Author>,
}

/// Reads the author collection from a TOML file with one `[[authors]]`
/// table per record.
pub fn load_authors(path: &Path) -> io::Result<Vec<Author>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening authors file {}: {}", path.display(), e))),
    };
    parse_authors(&content)
}

pub fn parse_authors(content: &str) -> io::Result<Vec<Author>> {
    let parsed = match toml::from_str::<AuthorsFile>(content) {
        Ok(x) => x,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing authors file: {}", e))),
    };

    check_unique(&parsed.authors)?;

    Ok(parsed.authors)
}

// Colliding page slugs would silently overwrite each other's output file,
// so both the stored key and the derived page slug must be unique.
fn check_unique(authors: &[Author]) -> io::Result<()> {
    let mut slugs = HashSet::new();
    let mut page_slugs = HashSet::new();

    for author in authors {
        if !slugs.insert(author.slug.as_str()) {
            return Err(io::Error::new(
                ErrorKind::InvalidData, format!("Duplicated author slug: {}", author.slug)));
        }
        let page_slug = normalize(&author.name);
        if !page_slugs.insert(page_slug.clone()) {
            return Err(io::Error::new(
                ErrorKind::InvalidData, format!("Authors share the page slug {}", page_slug)));
        }
    }

    Ok(())
}

/// Finds the author record for a slug. The query is lowercased before
/// comparing, while stored slugs are compared as-is. A mixed-case slug in
/// the authors file therefore never matches; lowercase stored slugs are the
/// data file convention.
pub fn find_author<'a>(slug: &str, authors: &'a [Author]) -> io::Result<&'a Author> {
    let slug = slug.to_lowercase();
    authors.iter()
        .find(|author| author.slug == slug)
        .ok_or_else(|| io::Error::new(ErrorKind::NotFound, format!("Author not found: {}", slug)))
}

#[cfg(test)]
mod tests {
    use crate::test_data::AUTHORS_DATA;

    use super::*;

    fn sample_authors() -> Vec<Author> {
        parse_authors(AUTHORS_DATA).unwrap()
    }

    #[test]
    fn test_parse_authors() {
        let authors = sample_authors();
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0], Author { slug: "evan".to_string(), name: "Evan Dorn".to_string() });
        assert_eq!(authors[1].slug, "paula");
    }

    #[test]
    fn test_find_author_lowercases_the_query() {
        let authors = sample_authors();
        let author = find_author("EVAN", &authors).unwrap();
        assert_eq!(author.name, "Evan Dorn");
    }

    #[test]
    fn test_find_author_unknown_slug() {
        let authors = sample_authors();
        let err = find_author("nobody", &authors).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_find_author_never_matches_mixed_case_keys() {
        let authors = vec![Author { slug: "Evan".to_string(), name: "Evan Dorn".to_string() }];
        // The query is lowercased but the stored key is not
        assert!(find_author("Evan", &authors).is_err());
        assert!(find_author("evan", &authors).is_err());
    }

    #[test]
    fn test_duplicated_slug_is_rejected() {
        let content = r#"
[[authors]]
slug = "evan"
name = "Evan Dorn"

[[authors]]
slug = "evan"
name = "Someone Else"
"#;
        let err = parse_authors(content).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_colliding_page_slugs_are_rejected() {
        // Distinct keys, but both names normalize to "jane-doe"
        let content = r#"
[[authors]]
slug = "jane"
name = "Jane Doe"

[[authors]]
slug = "jane2"
name = "Jane  Doe"
"#;
        let err = parse_authors(content).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
