// ABOUTME: Static English/Arabic translation table for every on-screen string.
// ABOUTME: Also holds the Gregorian weekday and month names used by the date formatter.

use serde::Deserialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Short uppercase code shown under the settings button.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ar => "AR",
        }
    }

    /// Label of the language switch, written in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Translation {
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    AppTitle,
    Charging,
    Charged,
    NotCharging,
    TimeLeft,
    EnableEconomy,
    DisableEconomy,
    Settings,
    ChooseAnimation,
    SuggestAi,
    Socials,
    WifiOff,
    BtOff,
    BrightnessLow,
    AirplaneOn,
    AppsKilled,
    Copyright,
    AddAnimation,
    Generating,
}

impl Text {
    pub const fn translation(self) -> Translation {
        let (en, ar) = match self {
            Text::AppTitle => ("Housni Fast Charge", "حسني للشحن السريع"),
            Text::Charging => ("Charging...", "جاري الشحن..."),
            Text::Charged => ("Fully Charged", "مشحون بالكامل"),
            Text::NotCharging => ("Not Charging", "لا يتم الشحن"),
            Text::TimeLeft => ("until full", "حتى يكتمل"),
            Text::EnableEconomy => ("Enable Ultra Economy", "تفعيل الاقتصاد الفائق"),
            Text::DisableEconomy => ("Disable Ultra Economy", "تعطيل الاقتصاد الفائق"),
            Text::Settings => ("Settings", "الإعدادات"),
            Text::ChooseAnimation => ("Choose Animation", "اختر الرسوم المتحركة"),
            Text::SuggestAi => ("Suggest New Animation (AI)", "اقتراح بالذكاء الاصطناعي"),
            Text::Socials => ("Follow Us", "تابعنا"),
            Text::WifiOff => ("WiFi Off", "وايفاي متوقف"),
            Text::BtOff => ("BT Off", "بلوتوث متوقف"),
            Text::BrightnessLow => ("Dimmed", "سطوع منخفض"),
            Text::AirplaneOn => ("Airplane On", "وضع الطيران"),
            Text::AppsKilled => ("Apps Killed", "إيقاف التطبيقات"),
            Text::Copyright => (
                "Copyright by Housni Bouemir 2026",
                "Copyright by Housni Bouemir 2026",
            ),
            Text::AddAnimation => ("Add", "إضافة"),
            Text::Generating => ("Thinking...", "جاري التفكير..."),
        };
        Translation { en, ar }
    }

    pub fn in_lang(self, lang: Language) -> &'static str {
        self.translation().get(lang)
    }
}

/// Long weekday names, Monday first.
const WEEKDAYS: [Translation; 7] = [
    Translation { en: "Monday", ar: "الاثنين" },
    Translation { en: "Tuesday", ar: "الثلاثاء" },
    Translation { en: "Wednesday", ar: "الأربعاء" },
    Translation { en: "Thursday", ar: "الخميس" },
    Translation { en: "Friday", ar: "الجمعة" },
    Translation { en: "Saturday", ar: "السبت" },
    Translation { en: "Sunday", ar: "الأحد" },
];

// Arabic has no abbreviated Gregorian month forms; the full name is the short form.
const MONTHS: [Translation; 12] = [
    Translation { en: "Jan", ar: "يناير" },
    Translation { en: "Feb", ar: "فبراير" },
    Translation { en: "Mar", ar: "مارس" },
    Translation { en: "Apr", ar: "أبريل" },
    Translation { en: "May", ar: "مايو" },
    Translation { en: "Jun", ar: "يونيو" },
    Translation { en: "Jul", ar: "يوليو" },
    Translation { en: "Aug", ar: "أغسطس" },
    Translation { en: "Sep", ar: "سبتمبر" },
    Translation { en: "Oct", ar: "أكتوبر" },
    Translation { en: "Nov", ar: "نوفمبر" },
    Translation { en: "Dec", ar: "ديسمبر" },
];

pub fn weekday_name(weekday: chrono::Weekday, lang: Language) -> &'static str {
    WEEKDAYS[weekday.num_days_from_monday() as usize].get(lang)
}

/// `month0` is zero-based, as returned by `chrono::Datelike::month0`.
pub fn month_short_name(month0: u32, lang: Language) -> &'static str {
    MONTHS[month0 as usize % MONTHS.len()].get(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Language::En.toggled().toggled(), Language::En);
        assert_eq!(Language::Ar.toggled().toggled(), Language::Ar);
        assert_eq!(Language::En.toggled(), Language::Ar);
    }

    #[test]
    fn looks_up_both_locales() {
        assert_eq!(Text::Charging.in_lang(Language::En), "Charging...");
        assert_eq!(Text::Charging.in_lang(Language::Ar), "جاري الشحن...");
    }

    #[test]
    fn copyright_is_latin_in_both_locales() {
        let t = Text::Copyright.translation();
        assert_eq!(t.en, t.ar);
    }

    #[test]
    fn weekday_and_month_names() {
        assert_eq!(weekday_name(chrono::Weekday::Mon, Language::En), "Monday");
        assert_eq!(weekday_name(chrono::Weekday::Sun, Language::Ar), "الأحد");
        assert_eq!(month_short_name(6, Language::En), "Jul");
        assert_eq!(month_short_name(6, Language::Ar), "يوليو");
    }

    #[test]
    fn language_deserializes_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            lang: Language,
        }
        let w: Wrapper = toml::from_str("lang = \"ar\"").unwrap();
        assert_eq!(w.lang, Language::Ar);
    }
}
