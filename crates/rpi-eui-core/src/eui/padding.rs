//! Fixed-width helpers for right-aligned identifier fields.
//!
//! Both functions count characters, not bytes.

/// Left-pads `value` with `pad` up to `width` characters.
///
/// Values already `width` characters or longer are returned unchanged.
pub fn pad_left(value: &str, width: usize, pad: char) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let mut padded = String::with_capacity(width);
    padded.extend(std::iter::repeat_n(pad, width - len));
    padded.push_str(value);
    padded
}

/// Returns the rightmost `width` characters of `value`.
///
/// Values `width` characters or shorter are returned unchanged.
pub fn truncate_right_aligned(value: &str, width: usize) -> &str {
    let len = value.chars().count();
    if len <= width {
        return value;
    }

    value
        .char_indices()
        .nth(len - width)
        .map_or("", |(start, _)| &value[start..])
}
