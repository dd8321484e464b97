use std::io;

use spdlog::debug;

use crate::author::{load_authors, Author};
use crate::config::Config;
use crate::post::Post;
use crate::post_list::PostList;

/// The content store for one build run: every author record and every
/// parsed post, loaded once and passed by reference into the derivation
/// and rendering steps.
pub struct Site {
    pub authors: Vec<Author>,
    pub posts: Vec<Post>,
}

impl Site {
    pub fn load(config: &Config) -> io::Result<Site> {
        let authors = load_authors(&config.paths.authors_file)?;

        let post_list = PostList { root_dir: config.paths.posts_dir.clone() };
        let files = post_list.retrieve_files()?;

        let mut posts = Vec::with_capacity(files.len());
        for file in &files {
            let post = Post::from_file(file)?;
            debug!("Parsed {} ({})", post.file_name.display(), post.slug);
            posts.push(post);
        }

        // Newest first; the slug untangles same-day posts
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        Ok(Site { authors, posts })
    }
}

/// Every post whose author field equals the given display name, oldest
/// first. Posts published on the same day keep the order they have in the
/// input collection. An unknown name yields an empty list, not an error.
pub fn articles_by_author<'a>(author_name: &str, posts: &'a [Post]) -> Vec<&'a Post> {
    let mut selected: Vec<&Post> = posts.iter()
        .filter(|post| post.author == author_name)
        .collect();
    selected.sort_by_key(|post| post.date);
    selected
}
