/// Militarized-conflict keywords; any case-insensitive hit flags the
/// article as a potential threat. "test launch" is a two-word phrase and
/// matches as a substring.
const THREAT_KEYWORDS: &[&str] = &[
    "missile",
    "attack",
    "invasion",
    "explosion",
    "strike",
    "conflict",
    "border",
    "test launch",
];

pub fn is_threat(text: &str) -> bool {
    let lowered = text.to_lowercase();
    THREAT_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}
