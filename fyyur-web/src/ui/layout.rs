//! Shared page shell

use super::esc;
use crate::notice::Notice;

/// Wrap `body` in the site layout
///
/// `body` must already be escaped. The notice, if any, is rendered above it.
pub fn page(title: &str, notice: Option<&Notice>, body: &str) -> String {
    let notice_html = notice
        .map(|n| format!(r#"<div class="{}">{}</div>"#, n.css_class(), esc(&n.message)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <link rel="stylesheet" href="/static/main.css">
</head>
<body>
    <header>
        <a class="brand" href="/">Fyyur</a>
        <nav>
            <a href="/venues">Venues</a>
            <a href="/artists">Artists</a>
            <a href="/shows">Shows</a>
        </nav>
        <div class="search-forms">
            <form method="post" action="/venues/search">
                <input type="search" name="search_term" placeholder="Find a venue">
                <button type="submit">Search</button>
            </form>
            <form method="post" action="/artists/search">
                <input type="search" name="search_term" placeholder="Find an artist">
                <button type="submit">Search</button>
            </form>
        </div>
    </header>
    <main>
        {notice_html}
        {body}
    </main>
</body>
</html>
"#,
        title = esc(title),
        notice_html = notice_html,
        body = body,
    )
}

/// `<ul>` of genre tags
pub fn genre_tags(genres: &[String]) -> String {
    if genres.is_empty() {
        return String::new();
    }
    let items: String = genres
        .iter()
        .map(|g| format!("<li>{}</li>", esc(g)))
        .collect();
    format!(r#"<ul class="genres">{}</ul>"#, items)
}

/// `<img>` tag for an optional image link
pub fn image(link: Option<&str>, alt: &str, class: &str) -> String {
    match link {
        Some(src) => format!(
            r#"<img class="{}" src="{}" alt="{}">"#,
            class,
            super::attr(src),
            super::attr(alt)
        ),
        None => String::new(),
    }
}

/// External link line, skipped when absent
pub fn external_link(label: &str, link: Option<&str>) -> String {
    match link {
        Some(href) => format!(
            r#"<p><a href="{}" rel="noopener">{}</a></p>"#,
            super::attr(href),
            esc(label)
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_renders_escaped_notice() {
        let notice = Notice::success("Venue <The Hop> was successfully listed!");
        let html = page("Home", Some(&notice), "<p>hi</p>");
        assert!(html.contains(r#"class="notice notice-success""#));
        assert!(html.contains("Venue &lt;The Hop&gt; was successfully listed!"));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn test_genre_tags() {
        assert_eq!(genre_tags(&[]), "");
        let html = genre_tags(&["R&B".to_string()]);
        assert!(html.contains("<li>R&amp;B</li>"));
    }
}
