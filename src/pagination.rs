use crate::config::RESULTS_PER_PAGE;
use crate::upstream::SearchPayload;

/// Parse the requested `start` query parameter. Defaults to 1 and clamps to
/// at least 1 on anything unparsable (negative, zero, garbage, absent).
pub fn parse_start(raw: Option<&str>) -> u32 {
    match raw.map(str::trim).and_then(|s| s.parse::<u32>().ok()) {
        Some(n) if n >= 1 => n,
        _ => 1,
    }
}

#[test]
fn test_parse_start() {
    assert_eq!(parse_start(None), 1);
    assert_eq!(parse_start(Some("")), 1);
    assert_eq!(parse_start(Some("abc")), 1);
    assert_eq!(parse_start(Some("-3")), 1);
    assert_eq!(parse_start(Some("0")), 1);
    assert_eq!(parse_start(Some("1")), 1);
    assert_eq!(parse_start(Some(" 15 ")), 15);
    assert_eq!(parse_start(Some("9999999999999999")), 1);
}

/// Offset of the previous page, floored at 1. No previous page on page one.
pub fn previous_start(current: u32) -> Option<u32> {
    if current > 1 {
        Some(current.saturating_sub(RESULTS_PER_PAGE).max(1))
    } else {
        None
    }
}

#[test]
fn test_previous_start() {
    assert_eq!(previous_start(1), None);
    // 5 - 10 would go below 1, so it clamps
    assert_eq!(previous_start(5), Some(1));
    assert_eq!(previous_start(11), Some(1));
    assert_eq!(previous_start(15), Some(5));
    assert_eq!(previous_start(21), Some(11));
}

/// Offset of the next page, taken verbatim from the upstream response's
/// `queries.nextPage` metadata. Absent metadata means no next link; we do not
/// synthesize one from the result count.
pub fn next_start(payload: &SearchPayload) -> Option<u32> {
    payload
        .queries
        .as_ref()?
        .next_page
        .as_ref()?
        .iter()
        .find_map(|page| page.start_index)
}

#[test]
fn test_next_start() {
    let payload: SearchPayload =
        serde_json::from_str(r#"{"queries":{"nextPage":[{"startIndex":11}]}}"#).unwrap();
    assert_eq!(next_start(&payload), Some(11));

    let payload: SearchPayload = serde_json::from_str(r#"{"queries":{}}"#).unwrap();
    assert_eq!(next_start(&payload), None);

    let payload: SearchPayload = serde_json::from_str("{}").unwrap();
    assert_eq!(next_start(&payload), None);

    // first entry carrying a startIndex wins
    let payload: SearchPayload =
        serde_json::from_str(r#"{"queries":{"nextPage":[{},{"startIndex":21}]}}"#).unwrap();
    assert_eq!(next_start(&payload), Some(21));
}
