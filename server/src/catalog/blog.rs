//! Blog posts per locale

use crate::locale::Locale;

#[derive(Debug, Clone, Copy)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Trusted HTML fragment
    pub content: &'static str,
    pub date: &'static str,
    pub author: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

static EN_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "how-to-sell-coloring-pages-on-etsy",
        title: "How to Sell Coloring Pages on Etsy: A Complete Guide",
        excerpt: "Learn how to monetize your creativity by selling digital coloring pages on Etsy. Tips on SEO, pricing, and packaging.",
        content: "<h2>Why Sell Coloring Pages?</h2>\n<p>Coloring pages are a booming market on Etsy...</p>\n<h2>Step 1: Create High Quality Designs</h2>\n<p>Use our Photo to Coloring Page converter to create unique designs...</p>",
        date: "2024-01-15",
        author: "Sarah Design",
        image: "/dog-sketch.png",
        tags: &["Etsy", "Passive Income", "Guide"],
    },
    BlogPost {
        slug: "benefits-of-coloring-for-adults",
        title: "7 Surprising Benefits of Coloring for Adults",
        excerpt: "Discover why adult coloring books are trending. Reduce stress and improve focus with this simple activity.",
        content: "<p>...</p>",
        date: "2024-01-10",
        author: "Dr. Art",
        image: "/dog-sketch.png",
        tags: &["Wellness", "Mental Health"],
    },
];

static ES_POSTS: &[BlogPost] = &[BlogPost {
    slug: "como-vender-paginas-para-colorear-en-etsy",
    title: "Cómo Vender Páginas para Colorear en Etsy: Guía Completa",
    excerpt: "Aprenda a monetizar su creatividad vendiendo páginas para colorear digitales en Etsy.",
    content: "<p>...</p>",
    date: "2024-01-15",
    author: "Sarah Design",
    image: "/dog-sketch.png",
    tags: &["Etsy", "Ingresos Pasivos"],
}];

impl BlogPost {
    /// Posts published in `locale` (may be empty)
    pub fn for_locale(locale: Locale) -> &'static [BlogPost] {
        match locale {
            Locale::En => EN_POSTS,
            Locale::Es => ES_POSTS,
            Locale::De | Locale::Ja => &[],
        }
    }

    pub fn find(locale: Locale, slug: &str) -> Option<&'static BlogPost> {
        Self::for_locale(locale).iter().find(|p| p.slug == slug)
    }
}
