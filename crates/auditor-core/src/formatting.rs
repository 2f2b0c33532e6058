/// Format two values as left-aligned fixed-width columns.
///
/// Trailing whitespace after the second column is trimmed so lines never
/// carry invisible padding.
///
/// # Examples
///
/// ```
/// use auditor_core::formatting::two_column;
///
/// assert_eq!(two_column("192.168.1.1", "42", 20, 15), "192.168.1.1          42");
/// assert_eq!(two_column("IP Address", "Request Count", 20, 15),
///            "IP Address           Request Count");
/// ```
pub fn two_column(left: &str, right: &str, left_width: usize, right_width: usize) -> String {
    let line = format!(
        "{:<lw$} {:<rw$}",
        left,
        right,
        lw = left_width,
        rw = right_width
    );
    line.trim_end().to_string()
}

/// A dashed divider line of the given width.
///
/// # Examples
///
/// ```
/// use auditor_core::formatting::divider;
///
/// assert_eq!(divider(5), "-----");
/// ```
pub fn divider(width: usize) -> String {
    "-".repeat(width)
}
