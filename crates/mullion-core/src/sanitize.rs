use std::sync::LazyLock;

use regex::Regex;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").expect("hex color pattern"));

pub fn strip_tags(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_tag = false;
    for ch in value.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

pub fn sanitize_text_field(value: &str) -> String {
    let stripped = strip_tags(value);
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn sanitize_html_class(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'))
        .collect()
}

pub fn sanitize_hex_color(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if HEX_COLOR.is_match(trimmed) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

pub fn clamp_post_count(requested: Option<u32>) -> u32 {
    match requested {
        Some(count) if count > 0 && count < 100 => count,
        _ => 1,
    }
}
