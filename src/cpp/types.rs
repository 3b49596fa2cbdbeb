//! Type rendering policy.
//!
//! Both return types and parameter types go through one policy value so the
//! whole crate prints types identically: written source text, re-spaced
//! deterministically. Template specializations come out as
//! `Name<arg1, arg2>`, scope resolution stays tight, and `*`/`&` are set
//! off from the type they modify.

/// Renders written types back to single-line declaration text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypePrinter;

impl TypePrinter {
    /// Normalize written type text: collapse whitespace runs, keep `::`,
    /// `<`, `>` tight, put `, ` between template arguments, and a single
    /// space before a `*`/`&` layer (`int *`, `char **`, `T &&`).
    pub fn normalize(&self, written: &str) -> String {
        let mut out = String::with_capacity(written.len());
        let mut pending_space = false;
        for ch in written.chars() {
            if ch.is_whitespace() {
                pending_space = !out.is_empty();
                continue;
            }
            match ch {
                '<' | '(' | '[' | '>' | ')' | ']' | ':' => out.push(ch),
                ',' => {
                    out.push(',');
                    out.push(' ');
                }
                '*' | '&' => {
                    if !out.is_empty() && !out.ends_with(['*', '&', '(', '<', ' ']) {
                        out.push(' ');
                    }
                    out.push(ch);
                }
                _ => {
                    if pending_space && !out.ends_with(['<', '(', '[', ':', ' ']) && !out.is_empty()
                    {
                        out.push(' ');
                    }
                    out.push(ch);
                }
            }
            pending_space = false;
        }
        out
    }
}
