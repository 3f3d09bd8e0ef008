//! Declaration serialization

/// Append `pairs` to `out` as `key:value` joined by `;`.
///
/// Values are written as given; nothing is escaped or normalized.
pub fn write_declarations<'a, I>(pairs: I, out: &mut String)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(key);
        out.push(':');
        out.push_str(value);
    }
}

/// Serialize `pairs` into a fresh string
pub fn serialize_declarations<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    write_declarations(pairs, &mut out);
    out
}
