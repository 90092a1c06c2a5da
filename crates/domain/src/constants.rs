//! Application constants
//!
//! Centralized location for storage slot keys and domain-level constants.
//! Slot keys are part of the persisted contract and must stay stable across
//! releases.

// Durable store slot keys
pub const BOOKMARKED_HADITHS_KEY: &str = "bookmarkedHadiths";
pub const BOOKMARKED_AYAHS_KEY: &str = "bookmarkedAyahs";
pub const TASBIH_COUNTERS_KEY: &str = "tasbih_counters";
pub const READING_STREAK_KEY: &str = "taqwa_tracker_reading_streak";
pub const QURAN_TRANSLATOR_KEY: &str = "quranTranslator";
pub const HADITH_SOURCE_KEY: &str = "hadithSource";
pub const THEME_KEY: &str = "theme";
pub const SHOW_INTRO_KEY: &str = "showIntro";
pub const HANAFI_PREFERENCE_KEY: &str = "hanafiPreference";

// Reading-streak configuration
pub const READING_HISTORY_LIMIT: usize = 90;
pub const DEFAULT_RECENT_ACTIVITY_DAYS: usize = 7;

// Preference defaults
pub const DEFAULT_QURAN_TRANSLATOR: &str = "ahmedraza";
pub const DEFAULT_HADITH_SOURCE: &str = "Sahih Bukhari";
