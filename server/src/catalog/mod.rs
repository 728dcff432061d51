//! Niche catalog
//!
//! Categories and niches drive page identity and display copy only; nothing
//! here affects processing.

mod blog;
mod niche;

pub use blog::BlogPost;
pub use niche::{Faq, NicheData};

use crate::locale::Locale;

/// A top-level niche category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pets,
    People,
    Nature,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Pets, Category::People, Category::Nature];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Pets => "pets",
            Self::People => "people",
            Self::Nature => "nature",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Pets => "Pets",
            Self::People => "People",
            Self::Nature => "Nature",
        }
    }

    pub fn niches(&self) -> &'static [&'static str] {
        match self {
            Self::Pets => &["dog", "cat", "bird", "hamster", "rabbit"],
            Self::People => &["portrait", "family", "baby", "couple"],
            Self::Nature => &["landscape", "flower", "tree", "mountain"],
        }
    }

    pub fn contains(&self, niche: &str) -> bool {
        self.niches().contains(&niche)
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// One niche tool page: `/{locale}/tools/{category}/{niche}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolPage {
    pub locale: Locale,
    pub category: Category,
    pub niche: &'static str,
}

impl ToolPage {
    pub fn path(&self) -> String {
        format!(
            "/{}/tools/{}/{}",
            self.locale.code(),
            self.category.key(),
            self.niche
        )
    }
}

/// Every (locale, category, niche) page the site serves
pub fn tool_pages() -> Vec<ToolPage> {
    let mut pages = Vec::new();
    for locale in Locale::ALL {
        for category in Category::ALL {
            for &niche in category.niches() {
                pages.push(ToolPage {
                    locale,
                    category,
                    niche,
                });
            }
        }
    }
    pages
}
