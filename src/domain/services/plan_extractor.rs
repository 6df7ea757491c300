/// Opening tag the plan-generation function wraps its plan in.
pub const PLAN_START_MARKER: &str = "<weight_loss_plan>";
/// Closing tag matching [`PLAN_START_MARKER`].
pub const PLAN_END_MARKER: &str = "</weight_loss_plan>";

/// Extract the plan text from the first complete marker pair.
///
/// The pair is the first end marker that has a start marker before it, joined
/// with the nearest such start marker. Stray markers outside the pair are
/// ignored. Extraction never fails: with no complete pair (a marker missing,
/// or the end marker only before the start marker) the raw text is returned
/// unchanged.
pub fn extract_plan(raw: &str) -> &str {
    let mut search_from = 0;
    while let Some(offset) = raw[search_from..].find(PLAN_END_MARKER) {
        let end = search_from + offset;
        if let Some(start) = raw[..end].rfind(PLAN_START_MARKER) {
            return &raw[start + PLAN_START_MARKER.len()..end];
        }
        search_from = end + PLAN_END_MARKER.len();
    }
    raw
}
