//! Accent and ligature folding to ASCII

/// ASCII replacement for an accented letter or ligature, if it has one
pub fn accent_replacement(c: char) -> Option<&'static str> {
    let replacement = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'Æ' => "AE",
        'Ç' => "C",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'İ' => "I",
        'Ð' => "D",
        'Ñ' => "N",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'Ý' => "Y",
        'Þ' => "TH",
        'ß' => "ss",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'ı' => "i",
        'ð' => "d",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'þ' => "th",
        'Œ' => "OE",
        'œ' => "oe",
        'Š' => "S",
        'š' => "s",
        'Ž' => "Z",
        'ž' => "z",
        'ƒ' => "f",
        'Ğ' => "G",
        'ğ' => "g",
        'Ş' => "S",
        'ş' => "s",
        _ => return None,
    };
    Some(replacement)
}

/// Replace every mapped character; unmapped characters are kept as-is
pub fn strip_accents(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match accent_replacement(c) {
            Some(ascii) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("Café crème brûlée"), "Cafe creme brulee");
        assert_eq!(strip_accents("São Paulo"), "Sao Paulo");
        assert_eq!(strip_accents("Ærø Straße"), "AEro Strasse");
        assert_eq!(strip_accents("İstanbul ağacı"), "Istanbul agaci");
    }

    #[test]
    fn test_unmapped_characters_kept() {
        assert_eq!(strip_accents("東京 ŋ 42!"), "東京 ŋ 42!");
    }

    #[test]
    fn test_every_replacement_is_ascii() {
        for c in ('\u{00C0}'..='\u{017F}').chain(['ƒ']) {
            if let Some(ascii) = accent_replacement(c) {
                assert!(ascii.is_ascii(), "{c} maps to non-ASCII {ascii}");
            }
        }
    }
}
