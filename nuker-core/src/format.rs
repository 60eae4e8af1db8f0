use std::time::Duration;

/// Counter with `,` between each group of three digits: `10005` -> `10,005`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let lead = match digits.len() % 3 {
        0 => 3,
        r => r,
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    out.push_str(&digits[..lead]);
    for group in digits.as_bytes()[lead..].chunks(3) {
        out.push(',');
        // ASCII digits only
        out.extend(group.iter().map(|&b| b as char));
    }
    out
}

/// Format a sweep duration: milliseconds below one second, else seconds
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        format!("{} ms", elapsed.as_millis())
    } else {
        format!("{:.2} s", elapsed.as_secs_f64())
    }
}
