use unicode_normalization::UnicodeNormalization as _;
use unicode_normalization::char::is_combining_mark;

/// File-name-safe form of a team name, used to look up its logo.
///
/// `"Eisbären Nord-Ost"` becomes `"eisbaeren-nord-ost"`.
pub fn slugify_team(name: &str) -> String {
    let mut folded = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            'ä' | 'Ä' => folded.push_str("ae"),
            'ö' | 'Ö' => folded.push_str("oe"),
            'ü' | 'Ü' => folded.push_str("ue"),
            'ß' => folded.push_str("ss"),
            c => folded.push(c),
        }
    }

    let folded: String = folded.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    let folded = folded.trim().to_lowercase();

    let mut out = String::with_capacity(folded.len());
    for c in folded.chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        if c == '-' {
            if !out.ends_with('-') {
                out.push('-');
            }
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/assets/slug.rs"]
mod tests;
