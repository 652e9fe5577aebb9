use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADER_DOTS_RE: Regex = Regex::new(r"\.{2,}").expect("valid leader pattern");
}

/// Removes runs of two or more periods left over from dotted leader lines.
///
/// Single periods survive. Nothing else changes, so the spaces around a removed run stay.
pub fn sanitize(raw: &str) -> String {
    LEADER_DOTS_RE.replace_all(raw, "").into_owned()
}
