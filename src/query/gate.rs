//! Domain relevance gate

use tracing::debug;

/// Words whose presence anywhere in a query puts it inside the supported domain
pub const RELEVANT_KEYWORDS: [&str; 8] = [
    "segment",
    "mparticle",
    "lytics",
    "zeotap",
    "source",
    "profile",
    "audience",
    "integrate",
];

/// True iff the lowercased query contains at least one domain keyword.
///
/// This is plain substring containment, so "profiles" and "resources" pass
/// too. Passing the gate says nothing about which platform is meant.
pub fn is_relevant(query: &str) -> bool {
    let lowered = query.to_lowercase();
    let hit = RELEVANT_KEYWORDS
        .iter()
        .find(|keyword| lowered.contains(*keyword));

    debug!(keyword = ?hit, "relevance gate");
    hit.is_some()
}
