use super::escape_xml;
use crate::config::SiteSettings;
use crate::model::Article;
use chrono::NaiveDate;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPage {
    pub path: &'static str,
    pub changefreq: &'static str,
    pub priority: &'static str,
}

pub const STATIC_PAGES: [StaticPage; 4] = [
    StaticPage { path: "/", changefreq: "weekly", priority: "1.0" },
    StaticPage { path: "/archive", changefreq: "weekly", priority: "0.8" },
    StaticPage { path: "/about", changefreq: "monthly", priority: "0.7" },
    StaticPage { path: "/contact", changefreq: "monthly", priority: "0.6" },
];

const ARTICLE_CHANGEFREQ: &str = "monthly";
const ARTICLE_PRIORITY: &str = "0.8";

fn render_url(
    out: &mut String,
    loc: &str,
    lastmod: Option<&str>,
    changefreq: &str,
    priority: &str,
) {
    out.push_str("  <url>\n");
    out.push_str(&format!("    <loc>{}</loc>\n", escape_xml(loc)));
    if let Some(lastmod) = lastmod {
        out.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            escape_xml(lastmod)
        ));
    }
    out.push_str(&format!("    <changefreq>{}</changefreq>\n", changefreq));
    out.push_str(&format!("    <priority>{}</priority>\n", priority));
    out.push_str("  </url>\n");
}

/// Render the sitemap: fixed static pages, then one entry per published article.
///
/// The home page carries `generated_on` as its `lastmod`. URLs are emitted at most once.
pub fn render_sitemap(site: &SiteSettings, articles: &[Article], generated_on: NaiveDate) -> String {
    let today = generated_on.format("%Y-%m-%d").to_string();
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for page in &STATIC_PAGES {
        let loc = format!("{}{}", site.base(), page.path);
        if !seen.insert(loc.clone()) {
            continue;
        }
        let lastmod = (page.path == "/").then_some(today.as_str());
        render_url(&mut out, &loc, lastmod, page.changefreq, page.priority);
    }

    for article in articles.iter().filter(|a| a.published) {
        let loc = site.article_url(&article.slug);
        if !seen.insert(loc.clone()) {
            tracing::warn!(slug = %article.slug, "Duplicate sitemap URL skipped");
            continue;
        }
        render_url(
            &mut out,
            &loc,
            Some(&article.date),
            ARTICLE_CHANGEFREQ,
            ARTICLE_PRIORITY,
        );
    }

    out.push_str("</urlset>\n");
    out
}
