use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::post::{render_markdown, Post};
use crate::text_utils::format_date;

#[derive(ramhorns::Content)]
struct ViewTag<'a> {
    tag: &'a str,
}

#[derive(ramhorns::Content)]
struct PostPage<'a> {
    title: &'a str,
    author: &'a str,
    date: String,
    description: &'a str,
    tags: Vec<ViewTag<'a>>,
    content: String,
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
}

impl PostRenderer<'_> {
    pub fn new(post_tpl_src: &str) -> io::Result<PostRenderer> {
        let template = match Template::new(post_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing post template: {}", e)));
            }
        };

        Ok(PostRenderer {
            template,
        })
    }

    pub fn render(&self, post: &Post) -> io::Result<String> {
        let tags: Vec<ViewTag> = post.tags.iter().map(|t| ViewTag { tag: t.as_str() }).collect();
        let content = render_markdown(&post.body)?;

        Ok(self.template.render(&PostPage {
            title: post.title.as_str(),
            author: post.author.as_str(),
            date: format_date(&post.date),
            description: post.description.as_str(),
            tags,
            content,
        }))
    }
}
