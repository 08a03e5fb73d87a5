//! Reversion notification marker
//!
//! When the mutation guard amends an update, the caller appends a single
//! well-known query parameter to its redirect target. Presence of the
//! marker on the next rendered admin screen means "show the reverted
//! notice"; the presentation layer strips it before display so the notice
//! shows exactly once. The marker never grants or denies anything.

/// Query parameter name carrying the one-shot reversion signal
pub const STATUS_REVERTED_ARG: &str = "lockdown_status_reverted";

/// The user-facing notice shown when the marker is present
pub const REVERTED_NOTICE: &str =
    "This item is protected by lockdown and must stay published.";

/// Append the marker to a redirect URL
///
/// Idempotent: a URL already carrying the marker is returned unchanged.
/// Any fragment is preserved after the appended parameter.
///
/// # Example
/// ```
/// use lockdown_core::notice::append_marker;
///
/// assert_eq!(
///     append_marker("/admin/edit?item=42"),
///     "/admin/edit?item=42&lockdown_status_reverted=1"
/// );
/// ```
pub fn append_marker(url: &str) -> String {
    if has_marker(url) {
        return url.to_string();
    }

    let (base, fragment) = split_fragment(url);
    let separator = if base.contains('?') { '&' } else { '?' };

    match fragment {
        Some(fragment) => format!("{base}{separator}{STATUS_REVERTED_ARG}=1#{fragment}"),
        None => format!("{base}{separator}{STATUS_REVERTED_ARG}=1"),
    }
}

/// Strip the marker from a URL, reporting whether it was present
///
/// Returns the URL the presentation layer should render plus the one-shot
/// signal. A URL without the marker comes back unchanged.
pub fn consume_marker(url: &str) -> (String, bool) {
    let (base, fragment) = split_fragment(url);

    let Some((path, query)) = base.split_once('?') else {
        return (url.to_string(), false);
    };

    let mut present = false;
    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| {
            if pair_key(pair) == STATUS_REVERTED_ARG {
                present = true;
                false
            } else {
                true
            }
        })
        .collect();

    if !present {
        return (url.to_string(), false);
    }

    let mut stripped = if kept.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", kept.join("&"))
    };

    if let Some(fragment) = fragment {
        stripped.push('#');
        stripped.push_str(fragment);
    }

    (stripped, true)
}

fn has_marker(url: &str) -> bool {
    let (base, _) = split_fragment(url);
    base.split_once('?')
        .map(|(_, query)| query.split('&').any(|pair| pair_key(pair) == STATUS_REVERTED_ARG))
        .unwrap_or(false)
}

fn split_fragment(url: &str) -> (&str, Option<&str>) {
    match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    }
}

fn pair_key(pair: &str) -> &str {
    pair.split_once('=').map(|(key, _)| key).unwrap_or(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_without_existing_query() {
        assert_eq!(
            append_marker("/admin/edit"),
            format!("/admin/edit?{}=1", STATUS_REVERTED_ARG)
        );
    }

    #[test]
    fn test_append_is_idempotent() {
        let once = append_marker("/admin/edit?item=42");
        assert_eq!(append_marker(&once), once);
    }

    #[test]
    fn test_append_preserves_fragment() {
        let url = append_marker("/admin/edit?item=42#details");
        assert_eq!(
            url,
            format!("/admin/edit?item=42&{}=1#details", STATUS_REVERTED_ARG)
        );
    }

    #[test]
    fn test_consume_strips_marker_and_signals() {
        let marked = append_marker("/admin/edit?item=42");
        let (stripped, present) = consume_marker(&marked);
        assert!(present);
        assert_eq!(stripped, "/admin/edit?item=42");
    }

    #[test]
    fn test_consume_without_marker_is_identity() {
        let (url, present) = consume_marker("/admin/edit?item=42");
        assert!(!present);
        assert_eq!(url, "/admin/edit?item=42");
    }

    #[test]
    fn test_consume_drops_question_mark_when_query_empties() {
        let marked = append_marker("/admin/edit");
        let (stripped, present) = consume_marker(&marked);
        assert!(present);
        assert_eq!(stripped, "/admin/edit");
    }

    #[test]
    fn test_append_then_consume_round_trip_with_fragment() {
        let original = "/admin/edit?item=42#details";
        let (stripped, present) = consume_marker(&append_marker(original));
        assert!(present);
        assert_eq!(stripped, original);
    }
}
