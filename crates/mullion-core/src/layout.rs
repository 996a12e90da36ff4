pub fn column_count(column_class: &str) -> Option<usize> {
    match column_class {
        "one-half" => Some(2),
        "one-third" => Some(3),
        "one-fourth" => Some(4),
        "one-fifth" => Some(5),
        "one-sixth" => Some(6),
        _ => None,
    }
}

pub fn column_classes(column_class: &str, index: usize, extra_classes: &str) -> String {
    let mut output = String::from(column_class);
    let first = index == 0
        || matches!(column_count(column_class), Some(columns) if index % columns == 0);
    if first {
        output.push_str(" first");
    }
    if !extra_classes.is_empty() {
        output.push(' ');
        output.push_str(extra_classes);
    }
    output
}

pub fn entry_classes(base: &str, column_class: &str, index: usize) -> String {
    format!(
        "{} count-{} {}",
        base,
        index,
        column_classes(column_class, index, "")
    )
}
