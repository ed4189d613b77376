//! Per-site extraction rules
//!
//! Each rule records the empirically observed markup of one storefront:
//! which tag wraps the product title, which attribute identifies it, which
//! tag and attribute wrap the price, and the shape of the price amount.
//! Rules are checked in table order against the URL; the first match wins.

/// How to locate title and price elements in one site's markup.
///
/// Attribute fields are regex fragments matched inside the opening tag; an
/// empty fragment means "any attributes". `price_value` must capture the
/// amount in exactly one group ([`crate::pattern::compile`] enforces this).
#[derive(Debug, Clone, Copy)]
pub struct SiteRule {
    /// Rule name, used in logs and error messages
    pub name: &'static str,
    /// Site-identifying URL substring, matched case-insensitively
    pub url_key: &'static str,
    /// Tag wrapping the product title
    pub title_tag: &'static str,
    /// Attribute fragment identifying the title element
    pub title_attr: &'static str,
    /// Tag wrapping the price
    pub price_tag: &'static str,
    /// Attribute fragment identifying the price element
    pub price_attr: &'static str,
    /// Regex fragment capturing the numeric amount
    pub price_value: &'static str,
}

/// Site-specific rules, in priority order.
pub const SITE_RULES: &[SiteRule] = &[
    SiteRule {
        name: "tira",
        url_key: "tira",
        title_tag: "h1",
        title_attr: r#"id=["']item_name["']"#,
        price_tag: "span",
        price_attr: r#"id=["']item_price["']"#,
        // Matches the simple '₹379' format
        price_value: r"₹\s*(\d+)",
    },
    SiteRule {
        name: "amazon",
        url_key: "amazon",
        // Title is found by id; price by class
        title_tag: "span",
        title_attr: r#"id=["']productTitle["']"#,
        price_tag: "span",
        price_attr: r#"class=["']a-price-whole["']"#,
        price_value: r"(\d{1,3}(?:,\d{3})*(?:\.\d{2})?)",
    },
    SiteRule {
        name: "purplle",
        url_key: "purplle",
        title_tag: "span",
        title_attr: r#"class=["']fw-bold ng-star-inserted["']"#,
        price_tag: "strong",
        price_attr: r#"class=["']our-price text-dark-secondary["']"#,
        price_value: r"₹\s*(\d+)",
    },
    SiteRule {
        name: "nykaa",
        url_key: "nykaa",
        title_tag: "h1",
        title_attr: r#"class=["']css-1gc4x7i["']"#,
        price_tag: "span",
        price_attr: r#"class=["']css-1jczs19["']"#,
        price_value: r"[\$₹]\s*(\d+)",
    },
];

/// Fallback for unknown sites: generic headings and a currency-prefixed
/// amount. Only useful on simple static pages, not real storefronts.
pub const DEFAULT_RULE: SiteRule = SiteRule {
    name: "default",
    url_key: "",
    title_tag: "h2",
    title_attr: "",
    price_tag: "span",
    price_attr: "",
    // Symbol included in the amount group, so "$19.99" survives intact
    price_value: r"([\$₹]\s*\d{1,3}(?:,\d{3})*(?:\.\d{2})?)",
};

/// Pick the rule for a URL.
///
/// Case-insensitive substring containment, first match in [`SITE_RULES`]
/// order; unknown sites get [`DEFAULT_RULE`]. Total, never fails.
pub fn select_rule(url: &str) -> &'static SiteRule {
    let url_lower = url.to_lowercase();
    SITE_RULES
        .iter()
        .find(|rule| url_lower.contains(rule.url_key))
        .unwrap_or(&DEFAULT_RULE)
}
