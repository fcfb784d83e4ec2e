use super::{cdata, escape_xml};
use crate::config::SiteSettings;
use crate::model::Article;
use chrono::{DateTime, Utc};

/// RFC 2822 with a literal `GMT` zone, e.g. `Mon, 15 Jan 2024 00:00:00 GMT`.
const RFC2822_GMT: &str = "%a, %d %b %Y %H:%M:%S GMT";

fn render_item(out: &mut String, site: &SiteSettings, article: &Article) {
    let link = escape_xml(&site.article_url(&article.slug));

    out.push_str("    <item>\n");
    out.push_str(&format!("      <title>{}</title>\n", cdata(&article.title)));
    out.push_str(&format!("      <link>{}</link>\n", link));
    out.push_str(&format!("      <guid>{}</guid>\n", link));
    out.push_str(&format!(
        "      <description>{}</description>\n",
        cdata(&article.description)
    ));
    out.push_str(&format!(
        "      <category>{}</category>\n",
        escape_xml(&article.category)
    ));
    for tag in &article.tags {
        out.push_str(&format!("      <category>{}</category>\n", escape_xml(tag)));
    }
    match article.published_at() {
        Some(at) => {
            out.push_str(&format!(
                "      <pubDate>{}</pubDate>\n",
                at.format(RFC2822_GMT)
            ));
        }
        None => {
            tracing::warn!(slug = %article.slug, date = %article.date, "Unparseable date, omitting pubDate");
        }
    }
    out.push_str("    </item>\n");
}

/// Render an RSS 2.0 channel of the published articles in `articles`.
pub fn render_rss(site: &SiteSettings, articles: &[Article], built_at: DateTime<Utc>) -> String {
    let base = escape_xml(site.base());
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n");
    out.push_str("  <channel>\n");
    out.push_str(&format!("    <title>{}</title>\n", escape_xml(&site.title)));
    out.push_str(&format!("    <link>{}/</link>\n", base));
    out.push_str(&format!(
        "    <description>{}</description>\n",
        escape_xml(&site.description)
    ));
    out.push_str(&format!(
        "    <language>{}</language>\n",
        escape_xml(&site.language)
    ));
    out.push_str(&format!(
        "    <atom:link href=\"{}/rss.xml\" rel=\"self\" type=\"application/rss+xml\" />\n",
        base
    ));
    out.push_str(&format!(
        "    <lastBuildDate>{}</lastBuildDate>\n",
        built_at.format(RFC2822_GMT)
    ));

    for article in articles.iter().filter(|a| a.published) {
        render_item(&mut out, site, article);
    }

    out.push_str("  </channel>\n");
    out.push_str("</rss>\n");
    out
}
