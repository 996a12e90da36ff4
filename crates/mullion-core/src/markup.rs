use std::sync::LazyLock;

use regex::{Captures, Regex};

static CLASS_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<opener>\sclass=["'])"#).expect("class attribute pattern")
});

// Splices a class name into every whitespace-preceded class attribute of an
// HTML fragment. Fragments without one come back unchanged.
pub fn inject_class(fragment: &str, class: &str) -> String {
    CLASS_OPENER
        .replace_all(fragment, |caps: &Captures<'_>| {
            format!("{}{} ", &caps["opener"], class)
        })
        .into_owned()
}

pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{inject_class, join_classes};

    #[test]
    fn inject_class_after_class_opener() {
        let fragment = r#"<section id="custom_html-2" class="widget widget_custom_html">"#;
        let value = inject_class(fragment, "widget_text");
        assert_eq!(
            value,
            r#"<section id="custom_html-2" class="widget_text widget widget_custom_html">"#
        );
    }

    #[test]
    fn inject_class_handles_single_quotes_and_repeats() {
        let value = inject_class("<div class='a'><span class='b'>", "x");
        assert_eq!(value, "<div class='x a'><span class='x b'>");
    }

    #[test]
    fn inject_class_requires_whitespace_before_attribute() {
        let fragment = r#"<div data-class="x">"#;
        assert_eq!(inject_class(fragment, "widget_text"), fragment);
    }

    #[test]
    fn inject_class_without_class_attribute() {
        assert_eq!(inject_class(r#"<div id="a">"#, "widget_text"), r#"<div id="a">"#);
    }

    #[test]
    fn join_classes_skips_empty_parts() {
        assert_eq!(join_classes(&["fa", "", "fa-2x"]), "fa fa-2x");
        assert_eq!(join_classes(&["", ""]), "");
        assert_eq!(join_classes(&[]), "");
    }
}
