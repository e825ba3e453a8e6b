//! Locale-sensitive case mapping
//!
//! Full Unicode case mapping from the standard library (`ß` -> `SS`, final
//! sigma) with the Turkic dotted/dotless `i` tailoring applied for `tr` and
//! `az` tags. Other tags use the untailored mapping.

use super::LocaleTag;

fn is_turkic(locale: &LocaleTag) -> bool {
    matches!(locale.primary(), "tr" | "az")
}

/// Uppercase `text` under `locale`'s rules
pub fn to_upper(text: &str, locale: &LocaleTag) -> String {
    if is_turkic(locale) && text.contains('i') {
        let dotted: String = text
            .chars()
            .map(|c| if c == 'i' { 'İ' } else { c })
            .collect();
        return dotted.to_uppercase();
    }
    text.to_uppercase()
}

/// Lowercase `text` under `locale`'s rules
pub fn to_lower(text: &str, locale: &LocaleTag) -> String {
    if is_turkic(locale) && text.contains(['I', 'İ']) {
        let dotless: String = text
            .chars()
            .map(|c| match c {
                'I' => 'ı',
                'İ' => 'i',
                other => other,
            })
            .collect();
        return dotless.to_lowercase();
    }
    text.to_lowercase()
}

/// Uppercase the first character, leave the rest untouched
pub fn upper_first(text: &str, locale: &LocaleTag) -> String {
    let Some(first) = text.chars().next() else {
        return String::new();
    };
    let (head, rest) = text.split_at(first.len_utf8());

    let mut out = to_upper(head, locale);
    out.push_str(rest);
    out
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize_first(text: &str, locale: &LocaleTag) -> String {
    let Some(first) = text.chars().next() else {
        return String::new();
    };
    let (head, rest) = text.split_at(first.len_utf8());

    let mut out = to_upper(head, locale);
    out.push_str(&to_lower(rest, locale));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LocaleTag {
        LocaleTag::new(s)
    }

    #[test]
    fn test_full_case_mapping() {
        assert_eq!(to_upper("straße", &tag("de")), "STRASSE");
        assert_eq!(to_upper("ﬁn", &tag("fr")), "FIN");
    }

    #[test]
    fn test_final_sigma() {
        assert_eq!(to_lower("ΟΔΟΣ", &tag("en")), "οδος");
    }

    #[test]
    fn test_turkic_dotted_i() {
        assert_eq!(to_upper("istanbul", &tag("tr")), "İSTANBUL");
        assert_eq!(to_lower("ISPARTA", &tag("tr")), "ısparta");
        assert_eq!(to_lower("İZMİR", &tag("az")), "izmir");
    }

    #[test]
    fn test_non_turkic_i() {
        assert_eq!(to_upper("istanbul", &tag("en")), "ISTANBUL");
        assert_eq!(to_lower("ISPARTA", &tag("fr")), "isparta");
    }

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("élan", &tag("fr")), "Élan");
        assert_eq!(upper_first("hELLO", &tag("en")), "HELLO");
        assert_eq!(upper_first("", &tag("en")), "");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("hELLO", &tag("en")), "Hello");
        assert_eq!(capitalize_first("iSTANBUL", &tag("tr")), "İstanbul");
        assert_eq!(capitalize_first("x", &tag("en")), "X");
    }
}
