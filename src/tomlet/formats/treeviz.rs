//! Treeviz formatter for documents

use crate::tomlet::ast::{Document, Entry, Field, Value};

/// Labels longer than this are truncated with `...`
pub const DEFAULT_LABEL_WIDTH: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn items_label(count: usize) -> String {
    match count {
        1 => "[1 item]".to_string(),
        n => format!("[{} items]", n),
    }
}

/// Short inline rendering of a value for a tree label
fn value_label(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        Value::DateTime(s) | Value::Date(s) | Value::Time(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => format!("{:?}", f),
        Value::List(items) => items_label(items.len()),
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_width(doc, DEFAULT_LABEL_WIDTH)
}

pub fn to_treeviz_str_with_width(doc: &Document, max_label_width: usize) -> String {
    let mut result = String::new();
    for (i, entry) in doc.entries.iter().enumerate() {
        let is_last = i == doc.entries.len() - 1;
        append_entry(&mut result, entry, max_label_width, is_last);
    }
    result
}

fn connector(is_last: bool) -> &'static str {
    if is_last {
        "└─"
    } else {
        "├─"
    }
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn append_entry(result: &mut String, entry: &Entry, width: usize, is_last: bool) {
    match entry {
        Entry::Field(field) => append_field(result, field, "", width, is_last),
        Entry::Section(section) => {
            result.push_str(&format!(
                "{} {}: {}\n",
                connector(is_last),
                entry.node_type(),
                truncate(&section.name, width)
            ));
            let prefix = child_prefix("", is_last);
            for (i, field) in section.fields.iter().enumerate() {
                let last = i == section.fields.len() - 1;
                append_field(result, field, &prefix, width, last);
            }
        }
    }
}

fn append_field(result: &mut String, field: &Field, prefix: &str, width: usize, is_last: bool) {
    let label = format!("{} = {}", field.key, value_label(&field.value));
    result.push_str(&format!(
        "{}{} Field: {}\n",
        prefix,
        connector(is_last),
        truncate(&label, width)
    ));
    if let Value::List(items) = &field.value {
        append_list_items(result, items, &child_prefix(prefix, is_last), width);
    }
}

fn append_list_items(result: &mut String, items: &[Value], prefix: &str, width: usize) {
    for (i, item) in items.iter().enumerate() {
        let is_last = i == items.len() - 1;
        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector(is_last),
            item.type_name(),
            truncate(&value_label(item), width)
        ));
        if let Value::List(children) = item {
            append_list_items(result, children, &child_prefix(prefix, is_last), width);
        }
    }
}
