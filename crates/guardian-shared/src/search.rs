//! Site navigation search.
//!
//! The navbar search matches against a static site map rather than page
//! content; each page advertises the phrases people reach it by.

/// A page reachable from the search bar. The first keyword doubles as the
/// page's display title.
#[derive(Debug, Clone)]
pub struct SitePage {
    pub path: &'static str,
    pub keywords: &'static [&'static str],
}

/// The static site map behind the navbar search.
pub const SITE_MAP: &[SitePage] = &[
    SitePage {
        path: "index.html",
        keywords: &["home", "main page", "digital realm", "cyberware", "protect"],
    },
    SitePage {
        path: "beware.html",
        keywords: &["beware", "be aware", "phishing", "scams", "vulnerabilities"],
    },
    SitePage {
        path: "unhackable.html",
        keywords: &["unhackable", "security tools", "protection", "software", "firewall"],
    },
    SitePage {
        path: "community.html",
        keywords: &["community", "join", "forum", "discussion", "users"],
    },
    SitePage {
        path: "cybernews.html",
        keywords: &["cybernews", "news", "articles", "reports", "updates"],
    },
    SitePage {
        path: "verify.html",
        keywords: &["verify number", "check number", "verification", "phone"],
    },
    SitePage {
        path: "inquiries.html",
        keywords: &["press inquiries", "media", "inquiries", "business", "partnership"],
    },
    SitePage {
        path: "app.html",
        keywords: &["mobile app", "app download", "application", "device", "waitlist"],
    },
    SitePage {
        path: "contact.html",
        keywords: &["contact us", "get in touch", "email", "phone", "location", "support"],
    },
];

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub path: &'static str,
    /// Title-cased display label, e.g. "Press Inquiries".
    pub label: String,
}

/// Pages with any keyword containing `query` as a case-insensitive
/// substring. Blank queries match nothing; hits keep site-map order.
pub fn search(query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    SITE_MAP
        .iter()
        .filter(|page| page.keywords.iter().any(|keyword| keyword.contains(&needle)))
        .map(|page| SearchHit {
            path: page.path,
            label: title_case(page.keywords[0]),
        })
        .collect()
}

/// Upper-case the first letter of every word.
fn title_case(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len());
    let mut at_word_start = true;
    for ch in phrase.chars() {
        if at_word_start && ch.is_alphanumeric() {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = !ch.is_alphanumeric();
        }
    }
    out
}
