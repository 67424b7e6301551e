//! Locale codes and the localized string table.
//!
//! The language affects displayed text only, never control flow. The table
//! carries the handful of fixed strings the interaction flow emits; question
//! and option text always comes localized from the backend.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Supported locale codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    En,
    Tr,
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Language {
    /// Picks the English or Turkish variant of a string pair.
    fn pick(&self, en: &'static str, tr: &'static str) -> &'static str {
        match self {
            Language::En => en,
            Language::Tr => tr,
        }
    }

    /// Inline warning for an empty or whitespace-only query.
    pub fn empty_query_warning(&self) -> &'static str {
        self.pick(
            "Please type a product name first",
            "Lütfen önce bir ürün adı yazın",
        )
    }

    /// Transient overlay text while a category detection is pending.
    pub fn processing(&self) -> &'static str {
        self.pick("Processing your request...", "İsteğiniz işleniyor...")
    }

    /// Transient overlay text while the final recommendations are pending.
    pub fn generating_results(&self) -> &'static str {
        self.pick("Generating your results...", "Sonuçlarınız hazırlanıyor...")
    }

    /// Banner shown when a live-data recommendation batch arrives.
    pub fn live_data_banner(&self) -> &'static str {
        self.pick(
            "Matched with live product data",
            "Canlı ürün verisiyle eşleştirildi",
        )
    }

    /// Banner shown when the backend served curated fallback results.
    pub fn fallback_banner(&self) -> &'static str {
        self.pick(
            "Live search is unavailable right now, showing curated picks instead",
            "Canlı arama şu an kullanılamıyor, seçilmiş öneriler gösteriliyor",
        )
    }

    /// Banner shown when an error response still carried a backup result set.
    pub fn backup_banner(&self) -> &'static str {
        self.pick(
            "A search-system issue occurred, showing a backup set of picks",
            "Arama sisteminde bir sorun oluştu, yedek öneri seti gösteriliyor",
        )
    }

    /// Inline error when local answer bookkeeping fails before any request.
    pub fn answer_error(&self) -> &'static str {
        self.pick(
            "Something went wrong handling your answer, please try again",
            "Cevabınız işlenirken bir sorun oluştu, lütfen tekrar deneyin",
        )
    }

    /// Full-screen error state text; recovery is a fresh search.
    pub fn error_screen(&self) -> &'static str {
        self.pick(
            "Something went wrong. Start a new search to try again.",
            "Bir şeyler ters gitti. Yeni bir arama ile tekrar deneyin.",
        )
    }

    /// Landing screen prompt.
    pub fn landing_prompt(&self) -> &'static str {
        self.pick(
            "What are you shopping for?",
            "Hangi ürünü arıyorsunuz?",
        )
    }
}
