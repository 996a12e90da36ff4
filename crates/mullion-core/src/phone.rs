use std::sync::LazyLock;

use regex::{Captures, Regex};

pub const DEFAULT_EXT_SEPARATOR: &str = " Ext ";

// Extension markers like " x42", " ext. 42" or " #42" become the configured
// separator plus the digits, before either format is tried.
static EXT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+(?:#|x|;|ext\.?(?:ension)?\s?)\.?:?\s*(?P<digits>[0-9]+)")
        .expect("extension marker pattern")
});

// Anchored at both ends: optional country prefix, three digit groups with
// single non-digit separators, free-form extension tail kept verbatim.
static LOOSE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:\+\s*)?",
        r"(?:0{0,2}1{1,3}[^0-9]+)?",
        r"\(?\s*(?P<area>[2-9][0-9]{2})",
        r"\s*[^0-9]?\s*(?P<exchange>[2-9][0-9]{2})",
        r"\s*[^0-9]?\s*(?P<line>[0-9]{4})",
        r"(?:\s*(?P<ext>[[:alpha:]#][^0-9]*[0-9].*))?$",
    ))
    .expect("loose phone pattern")
});

// Anchored at the end only, so text before the number survives. Area and
// exchange follow NANP digit rules.
static STRICT_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:(?:\+?1\s*(?:[.-]\s*)?)?",
        r"(?:\(\s*(?P<paren_area>[2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9])\s*\)",
        r"|(?P<bare_area>[2-9]1[02-9]|[2-9][02-8]1|[2-9][02-8][02-9]))",
        r"\s*(?:[.-]\s*)?)?",
        r"(?P<exchange>[2-9]1[02-9]|[2-9][02-9]1|[2-9][02-9]{2})",
        r"\s*(?:[.-]\s*)?",
        r"(?P<line>[0-9]{4})",
        r"(?:\s*(?i:#|;|x\.?|ext\.?|extension)\s*(?P<ext>[0-9]+))?$",
    ))
    .expect("strict phone pattern")
});

pub fn normalize_telephone(raw: &str, ext_separator: &str) -> Option<String> {
    let lowered = raw.trim().to_ascii_lowercase();
    let phone = EXT_MARKER.replace_all(&lowered, |caps: &Captures<'_>| {
        format!("{}{}", ext_separator, &caps["digits"])
    });

    if let Some(caps) = LOOSE_FORMAT.captures(&phone) {
        let mut out = format!("({}) {}-{}", &caps["area"], &caps["exchange"], &caps["line"]);
        if let Some(ext) = caps.name("ext") {
            out.push(' ');
            out.push_str(ext.as_str());
        }
        return Some(out);
    }

    let caps = STRICT_FORMAT.captures(&phone)?;
    let matched = caps.get(0)?;
    let area = caps.name("paren_area").or_else(|| caps.name("bare_area"));

    let mut rebuilt = String::with_capacity(phone.len() + 8);
    rebuilt.push_str(&phone[..matched.start()]);
    if let Some(area) = area {
        rebuilt.push('(');
        rebuilt.push_str(area.as_str());
        rebuilt.push_str(") ");
    }
    rebuilt.push_str(&caps["exchange"]);
    rebuilt.push('-');
    rebuilt.push_str(&caps["line"]);
    if let Some(ext) = caps.name("ext") {
        rebuilt.push_str(ext_separator);
        rebuilt.push_str(ext.as_str());
    }

    let rebuilt = rebuilt.trim_start_matches('-');
    Some(rebuilt.split_whitespace().collect::<Vec<_>>().join(" "))
}

pub fn normalize_telephone_display(raw: &str) -> Option<String> {
    normalize_telephone(raw, DEFAULT_EXT_SEPARATOR)
}

pub fn tel_uri(raw: &str) -> Option<String> {
    let normalized = normalize_telephone(raw, ";")?;
    Some(format!("tel:{}", normalized))
}
