use std::path::PathBuf;
use std::{fs, io};

/// Scans the posts directory for Markdown sources. The scan is flat: one
/// file per post, no per-post directories.
pub struct PostList {
    pub root_dir: PathBuf,
}

impl PostList {
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            if let Some(file_name) = file_name.to_str() {
                if file_name.ends_with(".md") {
                    posts.push(entry.path());
                }
            }
        }

        // read_dir order is platform dependent
        posts.sort();

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_retrieve_files() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        for name in ["2024-03-05-b.html.md", "2024-01-01-a.md", "notes.txt"] {
            let mut file = File::create(dir.path().join(name))?;
            file.write_all(b"---\n---\n")?;
        }
        fs::create_dir(dir.path().join("drafts"))?;

        let post_list = PostList { root_dir: dir.path().to_path_buf() };
        let files = post_list.retrieve_files()?;

        let names: Vec<_> = files.iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["2024-01-01-a.md", "2024-03-05-b.html.md"]);

        Ok(())
    }

    #[test]
    fn test_missing_directory_fails() {
        let post_list = PostList { root_dir: PathBuf::from("/no/such/posts/dir") };
        assert!(post_list.retrieve_files().is_err());
    }
}
