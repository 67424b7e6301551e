//! Pure text rendering for the terminal views.
//!
//! Every function here builds a plain string from its inputs; color is
//! applied by the caller at print time so rendering stays testable.

use pickwise_core::catalog::CatalogItem;
use pickwise_core::category::{icon_for, CategoryMap};
use pickwise_core::locale::Language;
use pickwise_core::recommendation::Recommendation;
use pickwise_interaction::QuestionCard;

const PROGRESS_WIDTH: usize = 10;

/// The landing screen: a prompt and the category grid.
pub fn landing(categories: &CategoryMap, language: Language) -> String {
    let mut out = String::new();
    out.push_str(language.landing_prompt());
    out.push('\n');
    for name in categories.keys() {
        out.push_str(&format!("  {} {}\n", icon_for(categories, name), name));
    }
    out
}

/// Progress percentage for a question, preferring the server-sent value.
pub fn progress_percent(card: &QuestionCard, step: u32, total: usize) -> u32 {
    if let Some(progress) = card.progress {
        return progress.min(100);
    }
    if total == 0 {
        return 0;
    }
    (step.saturating_sub(1) as usize * 100 / total).min(100) as u32
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent as usize * PROGRESS_WIDTH / 100).min(PROGRESS_WIDTH);
    let mut bar = String::from("[");
    bar.push_str(&"█".repeat(filled));
    bar.push_str(&"░".repeat(PROGRESS_WIDTH - filled));
    bar.push_str(&format!("] {percent}%"));
    bar
}

/// One question card: progress, question text, numbered options, tooltip.
pub fn question_card(card: &QuestionCard, step: u32, total: usize) -> String {
    let mut out = String::new();
    out.push_str(&progress_bar(progress_percent(card, step, total)));
    out.push('\n');
    let icon = card.emoji.as_deref().unwrap_or("");
    if icon.is_empty() {
        out.push_str(&card.question);
    } else {
        out.push_str(&format!("{icon} {}", card.question));
    }
    out.push('\n');
    for (index, option) in card.options.iter().enumerate() {
        out.push_str(&format!("  {}. {option}\n", index + 1));
    }
    if let Some(tooltip) = &card.tooltip {
        out.push_str(&format!("  ({tooltip})\n"));
    }
    out
}

/// Short retailer name for a source site, raw host when unknown.
pub fn retailer_badge(source_site: &str) -> String {
    let site = source_site.to_lowercase();
    let known = [
        ("hepsiburada", "Hepsiburada"),
        ("trendyol", "Trendyol"),
        ("teknosa", "Teknosa"),
        ("amazon", "Amazon"),
        ("n11", "N11"),
    ];
    for (fragment, badge) in known {
        if site.contains(fragment) {
            return badge.to_string();
        }
    }
    source_site.to_string()
}

fn recommendation_card(item: &Recommendation, index: usize) -> String {
    let mut out = format!("{}. {}", index + 1, item.title);
    if let Some(price) = &item.price {
        out.push_str(&format!("  {}", price.display()));
    }
    if let Some(score) = item.match_score {
        out.push_str(&format!("  ({}% match)", score.round() as i64));
    }
    out.push('\n');
    if let Some(site) = &item.source_site {
        out.push_str(&format!("   [{}]", retailer_badge(site)));
        if let Some(url) = &item.product_url {
            out.push_str(&format!(" {url}"));
        }
        out.push('\n');
    } else if let Some(url) = &item.product_url {
        out.push_str(&format!("   {url}\n"));
    }
    if let Some(why) = &item.why_recommended {
        out.push_str(&format!("   {why}\n"));
    }
    if !item.features.is_empty() {
        out.push_str(&format!("   {}\n", item.features.join(" · ")));
    }
    out
}

/// A full recommendation list, one card per item.
pub fn recommendations(items: &[Recommendation]) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        out.push_str(&recommendation_card(item, index));
    }
    out
}

/// Catalog rows for the browse view.
pub fn catalog_rows(items: &[&CatalogItem]) -> String {
    if items.is_empty() {
        return "No matching products\n".to_string();
    }
    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "  {}  {} / {}  {:.2}  ★{:.1}\n",
            item.name, item.color, item.size, item.price, item.rating
        ));
    }
    out
}
