use fmt::Display;
use std::fmt::Formatter;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fmt, fs, io};

use chrono::NaiveDate;
use lazy_static::lazy_static;
use markdown::Options;
use regex::Regex;

use crate::text_utils::parse_post_file_name;

/// One blog post, parsed from a date-prefixed Markdown source file.
///
/// Example of a post file (source/posts/2024-03-05-my-first-post.html.md):
/// ---
/// author: Jane Doe
/// title: My First Post!
/// description: A test.
/// ---
///
/// Markdown body...
#[derive(Clone, Debug)]
pub struct Post {
    pub file_name: PathBuf,
    pub slug: String,
    pub date: NaiveDate,
    pub author: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub body: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "slug={}, date={}, author={}\ntitle={}",
               self.slug,
               self.date,
               self.author,
               self.title,
        )
    }
}

impl Post {
    pub fn from_file(file_name: &PathBuf) -> io::Result<Post> {
        let content = fs::read_to_string(file_name)?;

        Self::from_string(file_name, &content)
    }

    pub fn from_string(file_name: &PathBuf, content: &str) -> io::Result<Post> {
        let base_name = match file_name.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return Err(io::Error::new(ErrorKind::InvalidInput, "Invalid post path")),
        };

        let (date, slug) = match parse_post_file_name(base_name) {
            Some(x) => x,
            None => return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("Post file name is not date-prefixed - file={}", base_name))),
        };

        let mut author = String::new();
        let mut title = String::new();
        let mut description = String::new();
        let mut tags = String::new();

        let mut lines = content.lines();
        let mut maybe_line = lines.next();

        // Leading empty lines are ok
        while let Some(line) = maybe_line {
            if !line.trim().is_empty() {
                break;
            }
            maybe_line = lines.next();
        }

        match maybe_line {
            Some(line) if line.trim() == "---" => {}
            _ => return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("Missing front matter fence - file={}", base_name))),
        }

        let mut closed = false;
        for line in lines.by_ref() {
            if line.trim() == "---" {
                closed = true;
                break;
            }

            let (key, val) = match extract_front_matter(line) {
                None => continue,
                Some((k, v)) => (k, v),
            };

            match key {
                "author" => author = val.to_string(),
                "title" => title = val.to_string(),
                "description" => description = val.to_string(),
                "tags" => tags = val.to_string(),
                _ => {}
            }
        }

        if !closed {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("End of front matter is missing - file={}", base_name)));
        }

        let mut body = String::new();
        for line in lines {
            body.push_str(line);
            body.push('\n');
        }

        Ok(Post {
            file_name: file_name.clone(),
            slug,
            date,
            author,
            title,
            description,
            tags: extract_tags(&tags),
            body,
        })
    }
}

fn extract_front_matter(line: &str) -> Option<(&str, &str)> {
    lazy_static! {
        static ref FRONT_MATTER_REGEX: Regex = Regex::new(
            r"^\s*(?P<key>[A-Za-z_][A-Za-z0-9_]*):\s*(?P<value>.*?)\s*$"
        ).unwrap();
    }

    FRONT_MATTER_REGEX.captures(line).and_then(|cap| {
        let key = cap.name("key").map(|key| key.as_str());
        let val = cap.name("value").map(|val| val.as_str());
        match (key, val) {
            (Some(key), Some(val)) => Some((key, val)),
            _ => None,
        }
    })
}

fn extract_tags(tags_str: &str) -> Vec<String> {
    tags_str.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

pub fn render_markdown(md_text: &str) -> io::Result<String> {
    match markdown::to_html_with_options(md_text, &Options::gfm()) {
        Ok(x) => Ok(x),
        Err(e) => Err(io::Error::new(ErrorKind::InvalidInput, e.reason.as_str())),
    }
}
