//! Per-niche metadata with a default fallback

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Display metadata for a niche
#[derive(Debug, Clone, Copy)]
pub struct NicheData {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub faqs: &'static [Faq],
    pub related_terms: &'static [&'static str],
}

static DOG: NicheData = NicheData {
    title: "Dog",
    description: "Convert your cute dog photos into printable coloring pages.",
    keywords: &["dog coloring page", "puppy coloring", "pet portrait"],
    related_terms: &["puppy", "canine", "golden retriever", "bulldog"],
    faqs: &[
        Faq {
            question: "Can I convert any dog photo?",
            answer: "Yes! Clear, well-lit photos work best for capturing your dog's details.",
        },
        Faq {
            question: "Is it free to use?",
            answer: "Yes, our basic tool is free to use for your personal pet photos.",
        },
    ],
};

static CAT: NicheData = NicheData {
    title: "Cat",
    description: "Turn your cat photos into intricate coloring designs.",
    keywords: &["cat coloring page", "kitten sketch", "feline art"],
    related_terms: &["kitten", "feline", "tabby", "calico"],
    faqs: &[Faq {
        question: "How do I print my cat coloring page?",
        answer: "After conversion, simply download the high-resolution image and print it on any standard printer.",
    }],
};

static DEFAULT: NicheData = NicheData {
    title: "Custom",
    description: "Create custom coloring pages from any photo.",
    keywords: &["photo to coloring page", "diy coloring book"],
    related_terms: &["sketch", "outline", "drawing"],
    faqs: &[Faq {
        question: "What photos work best?",
        answer: "Photos with good contrast and clear subjects produce the best coloring pages.",
    }],
};

impl NicheData {
    /// Metadata for `niche`, or the default entry when none is specific to it
    pub fn lookup(niche: &str) -> &'static NicheData {
        match niche {
            "dog" => &DOG,
            "cat" => &CAT,
            _ => &DEFAULT,
        }
    }

    pub fn is_default(&self) -> bool {
        std::ptr::eq(self, &DEFAULT)
    }
}
