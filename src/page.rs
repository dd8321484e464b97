use crate::author::Author;
use crate::post::Post;
use crate::site::Site;
use crate::text_utils::normalize;

pub const POST_TEMPLATE: &str = "post.tpl";
pub const LIST_TEMPLATE: &str = "list.tpl";
pub const AUTHOR_TEMPLATE: &str = "author.tpl";

const POST_LAYOUT: &str = "post";

/// An instruction to render one output page: where it goes, which template
/// renders it, and the values bound into that template. `listed` pages are
/// the ones that appear in the site's own posts index; author pages never
/// do.
pub struct PageDescriptor {
    /// Site-absolute, e.g. "/posts/author/jane-doe/index.html"
    pub output_path: String,
    pub template: String,
    pub locals: PageLocals,
    pub layout: Option<String>,
    pub listed: bool,
}

pub enum PageLocals {
    Post(Post),
    PostIndex,
    /// The whole author record, not just its slug
    Author(Author),
}

pub fn derive_pages(site: &Site) -> Vec<PageDescriptor> {
    let mut pages = derive_post_pages(&site.posts);
    pages.push(derive_index_page());
    pages.extend(derive_author_pages(&site.authors));
    pages
}

pub fn derive_post_pages(posts: &[Post]) -> Vec<PageDescriptor> {
    posts.iter()
        .map(|post| PageDescriptor {
            output_path: format!("/posts/{}/index.html", post.slug),
            template: POST_TEMPLATE.to_string(),
            locals: PageLocals::Post(post.clone()),
            layout: Some(POST_LAYOUT.to_string()),
            listed: true,
        })
        .collect()
}

fn derive_index_page() -> PageDescriptor {
    PageDescriptor {
        output_path: "/posts/index.html".to_string(),
        template: LIST_TEMPLATE.to_string(),
        locals: PageLocals::PostIndex,
        layout: Some(POST_LAYOUT.to_string()),
        listed: false,
    }
}

/// One page per author record, post count not considered. The deriver does
/// not deduplicate: two records whose names normalize to the same slug
/// produce the same output path and the later write wins. `load_authors`
/// rejects such collections, which keeps that case out of the CLI path.
pub fn derive_author_pages(authors: &[Author]) -> Vec<PageDescriptor> {
    authors.iter()
        .map(|author| PageDescriptor {
            output_path: format!("/posts/author/{}/index.html", normalize(&author.name)),
            template: AUTHOR_TEMPLATE.to_string(),
            locals: PageLocals::Author(author.clone()),
            layout: None,
            listed: false,
        })
        .collect()
}
