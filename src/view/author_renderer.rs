use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::author::Author;
use crate::post::Post;
use crate::text_utils::{format_date, normalize};

#[derive(ramhorns::Content)]
struct AuthorPage<'a> {
    name: &'a str,
    slug: String,
    has_posts: bool,
    post_list: Vec<AuthorPostItem>,
}

#[derive(ramhorns::Content)]
struct AuthorPostItem {
    date: String,
    link: String,
    title: String,
}

pub struct AuthorRenderer<'a> {
    pub template: Template<'a>,
}

impl AuthorRenderer<'_> {
    pub fn new(author_tpl_src: &str) -> io::Result<AuthorRenderer> {
        let template = match Template::new(author_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing author template: {}", e)));
            }
        };

        Ok(AuthorRenderer {
            template,
        })
    }

    /// Renders an author page from the record and its filtered posts. The
    /// posts keep the order they arrive in (oldest first from
    /// `articles_by_author`).
    pub fn render(&self, author: &Author, posts: &[&Post]) -> String {
        let mut post_list = vec![];
        for post in posts {
            post_list.push(AuthorPostItem {
                date: format_date(&post.date),
                link: format!("/posts/{}/", post.slug),
                title: post.title.clone(),
            });
        }

        self.template.render(&AuthorPage {
            name: author.name.as_str(),
            slug: normalize(&author.name),
            has_posts: !post_list.is_empty(),
            post_list,
        })
    }
}
