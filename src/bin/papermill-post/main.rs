use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::{env, io};

use anyhow::{Context, Result};
use chrono::Local;
use lazy_static::lazy_static;
use regex::Regex;

use papermill::util::os_helper::user_display_name;

// The posts directory is a site convention, not a configuration knob
const POSTS_DIR: &str = "source/posts";

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Title as it appears in the post file name: lowercased, whitespace runs
/// hyphenated, everything outside [a-z0-9-] dropped.
fn file_suffix(title: &str) -> String {
    lazy_static! {
        static ref WS_RUN: Regex = Regex::new(r"\s+").unwrap();
    }

    let lowered = title.to_lowercase();
    let hyphened = WS_RUN.replace_all(&lowered, "-");

    hyphened.chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

fn post_file_name(title: &str, date: &str) -> String {
    format!("{}-{}.html.md", date, file_suffix(title))
}

fn render_front_matter(author: &str, title: &str, description: &str) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "author: {}", author);
    let _ = writeln!(&mut buf, "title: {}", title);
    let _ = writeln!(&mut buf, "description: {}", description);
    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf);

    buf
}

// $EDITOR may carry leading arguments ("code -w"); the file path goes last
fn open_editor(file: &PathBuf) -> Result<()> {
    let editor = match env::var("EDITOR") {
        Ok(editor) if !editor.is_empty() => editor,
        _ => return Ok(()),
    };

    let mut parts = editor.split_whitespace();
    let program = match parts.next() {
        Some(program) => program,
        None => return Ok(()),
    };

    Command::new(program)
        .args(parts)
        .arg(file)
        .status()
        .with_context(|| format!("Error running editor {}", editor))?;

    Ok(())
}

fn create_post(posts_dir: &Path, title: &str, author: &str, description: &str, date: &str) -> Result<PathBuf> {
    let file = posts_dir.join(post_file_name(title, date));

    println!("Creating file {}", file.display());
    let mut out = File::create(&file)
        .with_context(|| format!("Error creating post file {}", file.display()))?;
    out.write_all(render_front_matter(author, title, description).as_bytes())?;

    Ok(file)
}

fn main() -> Result<()> {
    let title = prompt("Post title")?;
    let mut author = prompt("Author")?;
    if author.is_empty() {
        author = user_display_name();
    }
    let description = prompt("Description")?;

    let date = Local::now().format("%Y-%m-%d").to_string();
    let file = create_post(Path::new(POSTS_DIR), &title, &author, &description, &date)?;

    open_editor(&file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_suffix() {
        assert_eq!(file_suffix("My First Post!"), "my-first-post");
        assert_eq!(file_suffix("Hello,  World"), "hello-world");
        assert_eq!(file_suffix("100% Remote (still)"), "100-remote-still");
        assert_eq!(file_suffix("Café"), "caf");
        assert_eq!(file_suffix(""), "");
    }

    #[test]
    fn test_post_file_name() {
        assert_eq!(
            post_file_name("My First Post!", "2024-03-05"),
            "2024-03-05-my-first-post.html.md"
        );
    }

    #[test]
    fn test_render_front_matter() {
        let front_matter = render_front_matter("Jane Doe", "My First Post!", "A test.");
        assert_eq!(front_matter, "---
author: Jane Doe
title: My First Post!
description: A test.
---

");
    }

    #[test]
    fn test_create_post() {
        let dir = tempfile::tempdir().unwrap();
        let file = create_post(dir.path(), "My First Post!", "Jane Doe", "A test.", "2024-03-05").unwrap();

        assert_eq!(
            file.file_name().unwrap().to_str().unwrap(),
            "2024-03-05-my-first-post.html.md"
        );
        let content = std::fs::read_to_string(&file).unwrap();
        assert!(content.starts_with("---\nauthor: Jane Doe\ntitle: My First Post!\ndescription: A test.\n---\n\n"));
    }

    #[test]
    fn test_create_post_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no/such/dir");
        assert!(create_post(&missing, "T", "A", "D", "2024-03-05").is_err());
    }
}
