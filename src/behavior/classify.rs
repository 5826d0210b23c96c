use super::Behavior;
use itertools::Itertools;

const CLOSURE_MARKERS: [&str; 2] = ["{{closure}}", "{closure#"];

const PRIMITIVE_TYPES: [&str; 17] = [
    "bool", "char", "str", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
    "u128", "usize", "f32", "f64",
];

const TYPE_SHAPE_PREFIXES: [&str; 12] = [
    "(", "[", "*", "!", "fn(", "fn (", "unsafe ", "extern ", "dyn ", "impl ", "for<", "for <",
];

/// Classifies a path or compiler type name into a `Behavior`.
pub(super) fn classify(descriptor: &str) -> Behavior {
    let path = strip_references(descriptor.trim());
    if path.is_empty() || TYPE_SHAPE_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return Behavior::Unclassified(descriptor.to_owned());
    }

    let mut segments = split_segments(path);
    // `::core::mem::swap`
    if segments.len() > 1 && segments[0].is_empty() {
        segments.remove(0);
    }
    // `apply::<i32>`
    if segments.len() > 1 && segments.last().is_some_and(|s| s.starts_with('<')) {
        segments.pop();
    }

    let Some((last, owners)) = segments.split_last() else {
        return Behavior::Unclassified(descriptor.to_owned());
    };
    // Only the item itself decides; `f::{{closure}}::helper` is a named fn.
    if CLOSURE_MARKERS.iter().any(|marker| last.contains(marker)) {
        return Behavior::Anonymous;
    }
    if owners.iter().any(|s| s.is_empty()) {
        return Behavior::Unclassified(descriptor.to_owned());
    }

    let name = strip_raw(strip_generics(last));
    if !is_function_name(name) {
        return Behavior::Unclassified(descriptor.to_owned());
    }

    match owners.last() {
        Some(owner) if is_type_segment(owner) => Behavior::Method(name.to_owned()),
        _ => Behavior::Named(name.to_owned()),
    }
}

fn strip_references(mut path: &str) -> &str {
    loop {
        if let Some(rest) = path.strip_prefix("&mut ") {
            path = rest.trim_start();
        } else if let Some(rest) = path.strip_prefix('&') {
            path = rest.trim_start();
        } else {
            return path;
        }
    }
}

/// Splits on `::` outside of any `<..>`, `(..)` or `[..]` group.
fn split_segments(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut cuts = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' | b'(' | b'[' => depth += 1,
            b'>' | b')' | b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                cuts.push(i);
                i += 2;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    std::iter::once(0)
        .chain(cuts.iter().map(|cut| cut + 2))
        .zip(cuts.iter().copied().chain(std::iter::once(path.len())))
        .map(|(start, end)| path[start..end].trim())
        .collect_vec()
}

fn strip_generics(segment: &str) -> &str {
    match segment.find('<') {
        Some(idx) if idx > 0 => segment[..idx].trim_end(),
        _ => segment,
    }
}

fn strip_raw(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}

fn is_type_segment(segment: &str) -> bool {
    if segment.starts_with('<') {
        return true;
    }
    let name = strip_generics(segment);
    name.starts_with(|c: char| c.is_ascii_uppercase()) || PRIMITIVE_TYPES.contains(&name)
}

fn is_function_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_alphabetic())
        && !first.is_uppercase()
        && chars.all(|c| c == '_' || c.is_alphanumeric())
        && !PRIMITIVE_TYPES.contains(&name)
}
