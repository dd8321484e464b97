use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

use ramhorns::Template;
use spdlog::{info, warn};

use crate::author::find_author;
use crate::config::Config;
use crate::page::{derive_pages, AUTHOR_TEMPLATE, LIST_TEMPLATE, POST_TEMPLATE};
use crate::page::PageLocals;
use crate::post::Post;
use crate::site::{articles_by_author, Site};
use crate::view::author_renderer::AuthorRenderer;
use crate::view::list_renderer::ListRenderer;
use crate::view::post_renderer::PostRenderer;

#[derive(ramhorns::Content)]
struct LayoutPage<'a> {
    title: &'a str,
    content: &'a str,
}

/// Runs one full build: loads the content store, derives the page set,
/// renders every page and writes it under the output directory. A failed
/// author lookup skips that one page with a warning; everything else
/// aborts the build. Returns the number of pages written.
pub fn generate(config: &Config) -> io::Result<usize> {
    let site = Site::load(config)?;
    info!("Loaded {} posts and {} authors", site.posts.len(), site.authors.len());

    let pages = derive_pages(&site);

    let template_dir = &config.paths.template_dir;
    let post_src = read_template(template_dir, POST_TEMPLATE)?;
    let list_src = read_template(template_dir, LIST_TEMPLATE)?;
    let author_src = read_template(template_dir, AUTHOR_TEMPLATE)?;
    let post_renderer = PostRenderer::new(&post_src)?;
    let list_renderer = ListRenderer::new(&list_src)?;
    let author_renderer = AuthorRenderer::new(&author_src)?;

    // The posts index lists the derived page set itself, so pages marked
    // unlisted (author pages) can never leak into it
    let listed: Vec<&Post> = pages.iter()
        .filter(|page| page.listed)
        .filter_map(|page| match &page.locals {
            PageLocals::Post(post) => Some(post),
            _ => None,
        })
        .collect();

    let mut layouts: HashMap<String, String> = HashMap::new();
    let mut written = 0;

    for page in &pages {
        let (title, rendered) = match &page.locals {
            PageLocals::Post(post) => (post.title.clone(), post_renderer.render(post)?),
            PageLocals::PostIndex => (config.site.title.clone(), list_renderer.render(&config.site.title, &listed)),
            PageLocals::Author(author) => {
                let author = match find_author(&author.slug, &site.authors) {
                    Ok(author) => author,
                    Err(e) => {
                        warn!("Skipping page {}: {}", page.output_path, e);
                        continue;
                    }
                };
                let articles = articles_by_author(&author.name, &site.posts);
                (author.name.clone(), author_renderer.render(author, &articles))
            }
        };

        let html = match page.layout {
            Some(ref name) => apply_layout(&mut layouts, template_dir, name, &title, &rendered)?,
            None => rendered,
        };

        let target = output_target(&config.paths.output_dir, &page.output_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, html)?;
        info!("Wrote {} from {}", target.display(), page.template);
        written += 1;
    }

    Ok(written)
}

fn read_template(template_dir: &Path, name: &str) -> io::Result<String> {
    let path = template_dir.join(name);
    match fs::read_to_string(&path) {
        Ok(src) => Ok(src),
        Err(e) => Err(io::Error::new(e.kind(), format!("Error opening template {}: {}", path.display(), e))),
    }
}

fn apply_layout(layouts: &mut HashMap<String, String>, template_dir: &Path, name: &str, title: &str, content: &str) -> io::Result<String> {
    let src = match layouts.entry(name.to_string()) {
        Entry::Occupied(e) => e.into_mut(),
        Entry::Vacant(e) => {
            let path = template_dir.join("layouts").join(format!("{}.tpl", name));
            let src = match fs::read_to_string(&path) {
                Ok(src) => src,
                Err(err) => return Err(io::Error::new(err.kind(), format!("Error opening layout {}: {}", path.display(), err))),
            };
            e.insert(src)
        }
    };

    let template = match Template::new(src.as_str()) {
        Ok(x) => x,
        Err(e) => {
            return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing layout template: {}", e)));
        }
    };

    Ok(template.render(&LayoutPage { title, content }))
}

// Output paths are site-absolute by convention; they land relative to the
// output directory
fn output_target(output_dir: &Path, output_path: &str) -> PathBuf {
    output_dir.join(output_path.trim_start_matches('/'))
}
