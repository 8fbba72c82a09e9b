use crate::Slice;

pub use ecow::EcoString as ValStr;

/// Splits `text` around runs of whitespace.
pub fn fields(text: &str) -> Slice<ValStr> {
    text.split_whitespace().map(ValStr::from).collect()
}

/// Concatenates the elements of `parts`, placing `sep` between them.
pub fn join(parts: &Slice<ValStr>, sep: &str) -> ValStr {
    let mut out = ValStr::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(&part);
    }
    out
}
