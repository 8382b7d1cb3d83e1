//! Curated display tables used when turning resource tags into options and
//! outcomes.
//!
//! Unknown tags are not an error: callers fall back to the raw tag.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A fixed option: label, recorded value, description.
pub(crate) type FixedOption = (&'static str, &'static str, &'static str);

/// Categories that make the experience question relevant.
pub const EXPERIENCE_CATEGORIES: [&str; 3] = ["investing", "trading", "crypto"];

/// Formats merged into the synthetic DIY option.
pub const DIY_FORMATS: [&str; 3] = ["tools", "checklist", "course"];

/// Value of the synthetic DIY format option.
pub const DIY_VALUE: &str = "diy";

/// Value of the synthetic overflow category option.
pub const OTHER_VALUE: &str = "other";

pub(crate) const OTHER_CATEGORY_OPTION: FixedOption = ("📦 Other", OTHER_VALUE, "More options");

pub(crate) const DIY_FORMAT_OPTION: FixedOption =
    ("🛠 DIY Resources", DIY_VALUE, "Tools, templates & courses");

/// Budget tiers, independent of the catalog.
pub(crate) const BUDGET_OPTIONS: [FixedOption; 4] = [
    ("🆓 Just starting", "starting", "$0 - figuring things out"),
    ("💶 $1K - $10K/mo", "1k_10k", "Making money, inconsistent"),
    ("💵 $10K - $50K/mo", "10k_50k", "Stable, want to scale"),
    ("💎 $50K+/mo", "50k_plus", "Scaling & systematizing"),
];

pub(crate) const EXPERIENCE_OPTIONS: [FixedOption; 3] = [
    ("🌱 Beginner", "beginner", "Just getting started"),
    ("⚡ Intermediate", "intermediate", "Some experience"),
    ("🔥 Advanced", "advanced", "Looking for edge"),
];

pub(crate) const DEFAULT_CTA: &str = "Get Access";
pub(crate) const DEFAULT_EMOJI: &str = "🔗";

static CATEGORY_LABELS: Lazy<HashMap<&'static str, (&'static str, &'static str)>> =
    Lazy::new(|| {
        HashMap::from([
            ("business", ("💼 Business", "Growth, systems, scaling")),
            ("learning", ("📚 Learning", "Skills, community")),
            ("investing", ("📈 Investing", "Deals, portfolio")),
            ("trading", ("📊 Trading", "Active trading")),
            ("ai", ("🤖 AI & Tech", "Automation, tools")),
            ("crypto", ("₿ Crypto", "Web3, DeFi")),
        ])
    });

static FORMAT_LABELS: Lazy<HashMap<&'static str, (&'static str, &'static str)>> =
    Lazy::new(|| {
        HashMap::from([
            ("done_for_you", ("🎯 Done For You", "You implement for me")),
            ("community", ("👥 Community", "Learn with others")),
            ("tools", ("🧰 Tools", "Software & dashboards")),
            ("checklist", ("📋 Templates", "DIY with guides")),
            ("course", ("🎓 Course", "Learn at my pace")),
        ])
    });

static CTA_BY_RESOURCE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("high_ticket", "Book a Call"),
        ("cool_community", "Join Community"),
        ("investment_community", "Join Waitlist"),
        ("trading_tools", "Get Access"),
        ("ai_tools_checklist", "Download Free"),
        ("crypto_tools_checklist", "Download Free"),
    ])
});

static EMOJI_BY_RESOURCE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("high_ticket", "🎯"),
        ("cool_community", "👥"),
        ("investment_community", "📈"),
        ("trading_tools", "📊"),
        ("ai_tools_checklist", "🤖"),
        ("crypto_tools_checklist", "₿"),
    ])
});

/// Label and description for a category tag, if curated.
pub fn category_label(tag: &str) -> Option<(&'static str, &'static str)> {
    CATEGORY_LABELS.get(tag).copied()
}

/// Label and description for a format tag, if curated.
pub fn format_label(tag: &str) -> Option<(&'static str, &'static str)> {
    FORMAT_LABELS.get(tag).copied()
}

/// Call-to-action text for a resource id.
pub fn cta_for(resource_id: &str) -> &'static str {
    CTA_BY_RESOURCE.get(resource_id).copied().unwrap_or(DEFAULT_CTA)
}

/// Display glyph for a resource id.
pub fn emoji_for(resource_id: &str) -> &'static str {
    EMOJI_BY_RESOURCE.get(resource_id).copied().unwrap_or(DEFAULT_EMOJI)
}

/// True for formats folded into the DIY option.
pub fn is_diy_format(format: &str) -> bool {
    DIY_FORMATS.contains(&format)
}
