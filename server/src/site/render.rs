//! HTML page renderers

use chrono::NaiveDate;
use std::fmt::Write;

use super::html::{capitalize, escape};
use crate::catalog::{BlogPost, Category, NicheData, tool_pages};
use crate::download::download_button_html;
use crate::locale::Locale;
use crate::slider::ComparisonSlider;
use crate::upload::UploadController;

/// Where a client host posts uploads
pub const PROCESS_ENDPOINT: &str = "/api/process";

const DEMO_BEFORE: &str = "/dog-photo.png";
const DEMO_AFTER: &str = "/dog-sketch.png";

fn layout(locale: Locale, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Photo to Coloring Page</title>
</head>
<body>
<header><a href="/{lang}">Photo to Coloring Page</a> <a href="/{lang}/blog">Blog</a></header>
<main>
{body}
</main>
</body>
</html>
"#,
        lang = locale.code(),
        title = escape(title),
    )
}

fn uploader(niche: &str) -> String {
    UploadController::new(niche).view().to_html(PROCESS_ENDPOINT)
}

/// `/{lang}` home page
pub fn home_page(locale: Locale) -> String {
    let dict = locale.dictionary();
    let slider = ComparisonSlider::new(DEMO_BEFORE, DEMO_AFTER).with_labels(dict.before, dict.after);

    let mut body = String::new();
    let _ = write!(
        body,
        r#"<section class="hero">
<h1>{title}</h1>
<p>{subtitle}</p>
{uploader}
</section>
<section class="features">
<h3>{instant}</h3>
<h3>{quality}</h3>
<h3>{secure}</h3>
</section>
<section class="demo">
<h2>Unleash Creativity</h2>
{slider}
{download}
</section>
<section class="categories">
"#,
        title = escape(dict.title),
        subtitle = escape(dict.subtitle),
        uploader = uploader("photo"),
        instant = escape(dict.features.instant),
        quality = escape(dict.features.quality),
        secure = escape(dict.features.secure),
        slider = slider.view().to_html(),
        download = download_button_html(DEMO_AFTER, "coloring-page.png", dict.download),
    );

    for category in Category::ALL {
        let _ = write!(body, "<h3>{}</h3>\n<ul>\n", escape(category.title()));
        for niche in category.niches() {
            let _ = writeln!(
                body,
                r#"<li><a href="/{}/tools/{}/{}">{} to Coloring Page</a></li>"#,
                locale.code(),
                category.key(),
                niche,
                escape(&capitalize(niche))
            );
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</section>");

    layout(locale, dict.title, &body)
}

/// `/{lang}/tools/{category}/{niche}` page
pub fn niche_page(locale: Locale, niche: &str) -> String {
    let data = NicheData::lookup(niche);
    let title = format!("{} to Coloring Page", data.title);
    let display = escape(niche);
    let slider = ComparisonSlider::new(DEMO_BEFORE, DEMO_AFTER);

    let mut body = String::new();
    let _ = write!(
        body,
        r#"<section class="hero">
<h1>{title}</h1>
<p>{description}</p>
{uploader}
</section>
<section class="demo">
<h2>See the Magic</h2>
<p>Our AI analyzes your {display} photo and extracts perfect lines for coloring.</p>
{slider}
</section>
<section class="gallery">
<h2>{display_title} Coloring Page Examples</h2>
</section>
<section class="about">
<h2>Why create a coloring page from your {display}?</h2>
<h2>How to print your {display} coloring page</h2>
<p>Once generated, you can download the image in high resolution.</p>
</section>
<section class="faq">
<dl>
"#,
        title = escape(&title),
        description = escape(data.description),
        uploader = uploader(niche),
        slider = slider.view().to_html(),
        display_title = escape(&capitalize(niche)),
    );
    for faq in data.faqs {
        let _ = writeln!(
            body,
            "<dt>{}</dt><dd>{}</dd>",
            escape(faq.question),
            escape(faq.answer)
        );
    }
    body.push_str("</dl>\n</section>\n<ul class=\"related\">\n");
    for term in data.related_terms {
        let _ = writeln!(body, "<li>{}</li>", escape(term));
    }
    body.push_str("</ul>");

    layout(locale, &title, &body)
}

/// `/{lang}/blog` index
pub fn blog_index(locale: Locale) -> String {
    let posts = BlogPost::for_locale(locale);
    let mut body = String::from("<h1>Blog</h1>\n");
    if posts.is_empty() {
        body.push_str("<p>No posts yet.</p>");
    }
    for post in posts {
        let _ = writeln!(
            body,
            r#"<article><a href="/{}/blog/{}"><h2>{}</h2></a><p>{}</p><time datetime="{date}">{date}</time></article>"#,
            locale.code(),
            escape(post.slug),
            escape(post.title),
            escape(post.excerpt),
            date = escape(post.date),
        );
    }
    layout(locale, "Blog", &body)
}

/// `/{lang}/blog/{slug}` post page
pub fn blog_post(locale: Locale, post: &BlogPost) -> String {
    let mut tags = String::new();
    for tag in post.tags {
        let _ = write!(tags, r#"<span class="tag">{}</span>"#, escape(tag));
    }
    let body = format!(
        r#"<article>
<div class="tags">{tags}</div>
<h1>{title}</h1>
<p class="byline">By {author} <time datetime="{date}">{date}</time></p>
<img src="{image}" alt="{title}">
{content}
</article>
<aside class="cta">
<h3>Ready to create your own coloring pages?</h3>
<a href="/{lang}">{button}</a>
</aside>"#,
        title = escape(post.title),
        author = escape(post.author),
        date = escape(post.date),
        image = escape(post.image),
        content = post.content,
        lang = locale.code(),
        button = escape(locale.dictionary().upload_button),
    );
    layout(locale, post.title, &body)
}

pub fn not_found_page() -> String {
    layout(
        Locale::DEFAULT,
        "Page not found",
        r#"<h1>Page not found</h1>
<p><a href="/en">Back to the converter</a></p>"#,
    )
}

/// Sitemap listing every locale home and tool page
pub fn sitemap_xml(base_url: &str, lastmod: NaiveDate) -> String {
    let base = base_url.trim_end_matches('/');
    let lastmod = lastmod.format("%Y-%m-%d");
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    let mut push = |path: String, freq: &str, priority: &str| {
        let _ = writeln!(
            xml,
            "<url><loc>{}{}</loc><lastmod>{}</lastmod><changefreq>{}</changefreq><priority>{}</priority></url>",
            escape(base),
            path,
            lastmod,
            freq,
            priority
        );
    };

    for locale in Locale::ALL {
        push(format!("/{}", locale.code()), "weekly", "1.0");
    }
    for page in tool_pages() {
        push(page.path(), "monthly", "0.8");
    }

    xml.push_str("</urlset>\n");
    xml
}
