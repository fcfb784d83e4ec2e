use crate::routes::Route;
use anyhow::Result;
use colored::Colorize;

pub fn handle_route(target: String, json: bool) -> Result<()> {
    let route = Route::from_target(&target);

    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
        return Ok(());
    }

    let page = match &route {
        Route::Home => "home".to_string(),
        Route::Archive { tag, category } => {
            let mut parts = vec!["archive".to_string()];
            if let Some(tag) = tag {
                parts.push(format!("tag={}", tag));
            }
            if let Some(category) = category {
                parts.push(format!("category={}", category));
            }
            parts.join(" ")
        }
        Route::About => "about".to_string(),
        Route::Contact => "contact".to_string(),
        Route::Article { slug } => format!("article {}", slug),
        Route::NotFound => "not-found".to_string(),
    };
    println!("{} -> {}", target, page.cyan());
    Ok(())
}
