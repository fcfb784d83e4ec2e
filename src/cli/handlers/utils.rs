use crate::model::{Article, ArticleContent, YearGroup};
use colored::Colorize;

/// Print a list of articles (compact format)
pub fn print_article_list(articles: &[Article]) {
    if articles.is_empty() {
        println!("No articles found.");
        return;
    }

    for article in articles {
        let tags = if article.tags.is_empty() {
            String::new()
        } else {
            format!(" #{}", article.tags.join(" #")).yellow().to_string()
        };
        println!(
            "{} {} [{}] {}{}",
            article.date.dimmed(),
            article.slug.cyan(),
            article.category.blue(),
            article.title,
            tags
        );
    }
}

pub fn print_year_groups(groups: &[YearGroup]) {
    if groups.is_empty() {
        println!("No articles found.");
        return;
    }

    for group in groups {
        println!("{} ({})", group.year.bold(), group.articles.len());
        for article in &group.articles {
            println!(
                "  {} {} {}",
                article.date.dimmed(),
                article.slug.cyan(),
                article.title
            );
        }
    }
}

/// Print a single article with details
pub fn print_article(content: &ArticleContent) {
    let article = &content.article;
    println!("{} {}", article.slug.cyan().bold(), article.title.bold());
    println!("Date:      {}", article.date);
    println!("Category:  {}", article.category.blue());
    println!("Read time: {}", article.read_time);
    if !article.tags.is_empty() {
        println!("Tags:      {}", article.tags.join(", ").magenta());
    }
    if !article.description.is_empty() {
        println!("{}", article.description.dimmed());
    }

    if !content.content.is_empty() {
        println!();
        println!("{}", content.content);
    }
}
