use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::post::Post;
use crate::text_utils::format_date;

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    site_title: &'a str,
    post_list: Vec<ListItem>,
}

#[derive(ramhorns::Content)]
struct ListItem {
    date: String,
    link: String,
    title: String,
    author: String,
    summary: String,
}

pub struct ListRenderer<'a> {
    pub template: Template<'a>,
}

impl ListRenderer<'_> {
    pub fn new(list_tpl_src: &str) -> io::Result<ListRenderer> {
        let template = match Template::new(list_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing list template: {}", e)));
            }
        };

        Ok(ListRenderer {
            template,
        })
    }

    /// The summary shown per entry is the post description, not a body
    /// excerpt.
    pub fn render(&self, site_title: &str, posts: &[&Post]) -> String {
        let mut post_list = vec![];
        for post in posts {
            post_list.push(ListItem {
                date: format_date(&post.date),
                link: format!("/posts/{}/", post.slug),
                title: post.title.clone(),
                author: post.author.clone(),
                summary: post.description.clone(),
            });
        }

        self.template.render(&ListPage {
            site_title,
            post_list,
        })
    }
}
