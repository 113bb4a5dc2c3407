use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::repository::{ArticleListQuery, ArticleReader, CategoryReader, TagReader};
use crate::services::ServiceResult;

fn lastmod(date: NaiveDateTime) -> String {
    date.and_utc().to_rfc3339()
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
    // write! into a String cannot fail.
    let _ = write!(
        xml,
        "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n"
    );
}

/// Renders the sitemap over every article, category and tag page.
pub fn build_sitemap<R>(repo: &R, base_url: &str, now: NaiveDateTime) -> ServiceResult<String>
where
    R: ArticleReader + CategoryReader + TagReader + ?Sized,
{
    let base_url = base_url.trim_end_matches('/');

    let (_, articles) = repo.list_articles(ArticleListQuery::new())?;
    let categories = repo.list_categories()?;
    let tags = repo.list_tags()?;

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    let now = lastmod(now);
    push_url(&mut xml, &format!("{base_url}/"), &now, "daily", "1.0");
    push_url(
        &mut xml,
        &format!("{base_url}/categories"),
        &now,
        "weekly",
        "0.8",
    );
    push_url(&mut xml, &format!("{base_url}/tags"), &now, "weekly", "0.8");

    for (article, _, _) in &articles {
        push_url(
            &mut xml,
            &format!("{base_url}/articles/{}", article.id),
            &lastmod(article.publish_date),
            "monthly",
            "0.7",
        );
    }
    for (category, _) in &categories {
        push_url(
            &mut xml,
            &format!("{base_url}/categories/{}", category.slug),
            &now,
            "weekly",
            "0.6",
        );
    }
    for (tag, _) in &tags {
        push_url(
            &mut xml,
            &format!("{base_url}/tags/{}", tag.slug),
            &now,
            "weekly",
            "0.5",
        );
    }

    xml.push_str("</urlset>");
    Ok(xml)
}
