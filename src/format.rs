//! Display formatting helpers.
//!
//! Contains the identifier-shortening routine used anywhere the UI shows a
//! long opaque string (application ids, session tokens, emails in tight
//! columns).

/// Parameters for [`shrink_with`].
#[derive(Debug, Clone, Copy)]
pub struct ShrinkOptions {
    /// Characters kept from the front
    pub prefix_len: usize,
    /// Characters kept from the back
    pub suffix_len: usize,
    /// Select the dot placeholder style
    pub use_dot: bool,
    /// Number of placeholder characters between the segments
    pub holder_len: usize,
}

impl Default for ShrinkOptions {
    fn default() -> Self {
        Self {
            prefix_len: 5,
            suffix_len: 4,
            use_dot: true,
            holder_len: 3,
        }
    }
}

/// Threshold below which text is returned untouched. The gate is the total
/// character count, not the segment lengths.
const SHRINK_THRESHOLD: usize = 10;

/// Shorten `text` for display using the default options: keep the first 5
/// and last 4 characters around a `...` placeholder.
///
/// Strings of 10 characters or fewer are returned unchanged.
///
/// # Example
///
/// ```
/// use hiredeck::format::shrink;
///
/// assert_eq!(shrink("abcdefghijk"), "abcde...hijk");
/// assert_eq!(shrink("short"), "short");
/// ```
pub fn shrink(text: &str) -> String {
    shrink_with(text, ShrinkOptions::default())
}

/// Shorten `text` for display with explicit options.
///
/// Counts and slices by characters so multi-byte input never panics; segment
/// lengths larger than the text simply take what is there.
pub fn shrink_with(text: &str, opts: ShrinkOptions) -> String {
    let char_count = text.chars().count();
    if char_count <= SHRINK_THRESHOLD {
        return text.to_string();
    }

    // Both placeholder styles render dots; `use_dot = false` has always
    // produced the same output and call sites depend on that.
    let holder: String = ".".repeat(opts.holder_len);

    let prefix: String = text.chars().take(opts.prefix_len).collect();
    let suffix: String = text
        .chars()
        .skip(char_count.saturating_sub(opts.suffix_len))
        .collect();

    format!("{}{}{}", prefix, holder, suffix)
}
