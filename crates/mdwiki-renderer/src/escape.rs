//! Backslash escaping of wiki-significant characters.

/// Escape sequence for every byte value, `None` for bytes written as-is.
static ESCAPES: [Option<&str>; 256] = {
    let mut table = [None; 256];
    table[b'*' as usize] = Some(r"\*");
    table[b'_' as usize] = Some(r"\_");
    table[b'-' as usize] = Some(r"\-");
    table[b'+' as usize] = Some(r"\+");
    table[b'^' as usize] = Some(r"\^");
    table[b'~' as usize] = Some(r"\~");
    table[b'{' as usize] = Some(r"\{");
    table[b'!' as usize] = Some(r"\!");
    table[b'[' as usize] = Some(r"\[");
    table[b']' as usize] = Some(r"\]");
    table[b'(' as usize] = Some(r"\(");
    table[b')' as usize] = Some(r"\)");
    table
};

/// Append `text` to `out` with wiki-significant characters backslash-escaped.
///
/// With `ignore_macros` set, `{` is written as-is so macros such as
/// `{children:all=true}` survive.
pub fn escape_wiki_into(out: &mut String, text: &str, ignore_macros: bool) {
    let bytes = text.as_bytes();
    let mut start = 0;

    for (end, &byte) in bytes.iter().enumerate() {
        let Some(escaped) = ESCAPES[usize::from(byte)] else {
            continue;
        };
        if ignore_macros && byte == b'{' {
            continue;
        }
        // Significant characters are ASCII, so `end` is a char boundary
        out.push_str(&text[start..end]);
        out.push_str(escaped);
        start = end + 1;
    }

    out.push_str(&text[start..]);
}

/// Escape wiki-significant characters in `text`.
#[must_use]
pub fn escape_wiki(text: &str, ignore_macros: bool) -> String {
    let mut out = String::with_capacity(text.len());
    escape_wiki_into(&mut out, text, ignore_macros);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_all_significant_characters() {
        assert_eq!(
            escape_wiki("*_-+^~{![]()", false),
            r"\*\_\-\+\^\~\{\!\[\]\(\)"
        );
    }

    #[test]
    fn test_escape_leaves_other_bytes() {
        assert_eq!(escape_wiki("hello, world.", false), "hello, world.");
        assert_eq!(escape_wiki("a|b}c#d\\e", false), "a|b}c#d\\e");
        assert_eq!(escape_wiki("", false), "");
    }

    #[test]
    fn test_escape_mixed_text() {
        assert_eq!(escape_wiki("*-_+", false), r"\*\-\_\+");
        assert_eq!(
            escape_wiki("use of {this}", false),
            r"use of \{this}"
        );
        assert_eq!(escape_wiki("f(x) - 1", false), r"f\(x\) \- 1");
    }

    #[test]
    fn test_escape_multibyte_text() {
        assert_eq!(escape_wiki("日本-語 ✓!", false), r"日本\-語 ✓\!");
        assert_eq!(escape_wiki("é*", false), r"é\*");
    }

    #[test]
    fn test_escape_ignore_macros() {
        assert_eq!(
            escape_wiki("{children:reverse=true|sort=creation}", true),
            "{children:reverse=true|sort=creation}"
        );
        // Only the macro delimiter is exempt
        assert_eq!(escape_wiki("{x}-[y]", true), r"{x}\-\[y\]");
    }

    #[test]
    fn test_escape_into_appends() {
        let mut out = String::from("> ");
        escape_wiki_into(&mut out, "a*b", false);
        assert_eq!(out, r"> a\*b");
    }

    #[test]
    fn test_escape_table_covers_only_significant_bytes() {
        let escaped: Vec<u8> = (0..=255u8)
            .filter(|&byte| ESCAPES[usize::from(byte)].is_some())
            .collect();
        assert_eq!(escaped, b"!()*+-[]^_{~".to_vec());
    }
}
