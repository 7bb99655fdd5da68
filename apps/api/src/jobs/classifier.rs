//! Women-friendly classifier: a static company allowlist plus a keyword-threshold heuristic.

/// Phrases that signal an inclusive workplace. Matched case-insensitively as substrings.
pub const WOMEN_FRIENDLY_KEYWORDS: [&str; 16] = [
    "women in tech",
    "diversity",
    "inclusion",
    "equal opportunity",
    "women leadership",
    "women empowerment",
    "female entrepreneurs",
    "gender equality",
    "work-life balance",
    "flexible",
    "parental leave",
    "maternity",
    "mentorship",
    "diverse",
    "inclusive",
    "equity",
];

/// Employers treated as women-friendly regardless of posting text.
pub const WOMEN_FRIENDLY_COMPANIES: [&str; 45] = [
    "accenture",
    "adobe",
    "akamai",
    "atlassian",
    "bumble",
    "dell",
    "etsy",
    "general motors",
    "hpinc",
    "hubspot",
    "ibm",
    "intuit",
    "johnson & johnson",
    "mastercard",
    "microsoft",
    "netflix",
    "new relic",
    "nvidia",
    "paypal",
    "salesforce",
    "sap",
    "shopify",
    "slack",
    "spotify",
    "square",
    "stripe",
    "twitter",
    "uber",
    "workday",
    "zoom",
    "google",
    "meta",
    "amazon",
    "apple",
    "pinterest",
    "airbnb",
    "asana",
    "dropbox",
    "gitlab",
    "godaddy",
    "linkedin",
    "mailchimp",
    "mongodb",
    "zendesk",
    "twilio",
];

/// Distinct keywords required before text alone marks a job women-friendly.
const KEYWORD_THRESHOLD: usize = 2;

/// Returns true if the company is on the allowlist (case-insensitive substring),
/// or if at least two distinct keywords appear across text, title and company.
pub fn is_women_friendly(title: &str, company: &str, text: &str) -> bool {
    if is_listed_company(company) {
        return true;
    }

    let combined = format!("{text} {title} {company}").to_lowercase();
    matched_keywords(&combined).count() >= KEYWORD_THRESHOLD
}

fn is_listed_company(company: &str) -> bool {
    if company.is_empty() {
        return false;
    }
    let company = company.to_lowercase();
    WOMEN_FRIENDLY_COMPANIES
        .iter()
        .any(|listed| company.contains(listed))
}

/// Keywords present in already-lowercased text. Presence only, not frequency.
pub fn matched_keywords(lowercased: &str) -> impl Iterator<Item = &'static str> + '_ {
    WOMEN_FRIENDLY_KEYWORDS
        .iter()
        .copied()
        .filter(move |keyword| lowercased.contains(keyword))
}
