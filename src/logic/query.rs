//! Catalog query engine: search, mode filtering and score ranking.
//!
//! Both views are pure derivations of the full record collection. Nothing here
//! mutates the input or keeps state between calls.

use std::cmp::Ordering;

use crate::state::{ModeFilter, ServerRecord};

/// Leaderboard size used when no setting overrides it.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

/// What: Case-insensitive text match against name and description.
///
/// Inputs:
/// - `record`: Candidate server
/// - `query`: Raw search text (not trimmed)
///
/// Output:
/// - `true` when `query` is empty or contained in the name or the description.
#[must_use]
pub fn matches_query(record: &ServerRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    record.name.to_lowercase().contains(&q) || record.description.to_lowercase().contains(&q)
}

/// What: Ranking order shared by the catalog and the leaderboard.
///
/// Output:
/// - Descending by `rating * votes`; equal scores fall back to `id` ascending.
fn by_score_desc(a: &ServerRecord, b: &ServerRecord) -> Ordering {
    b.score()
        .total_cmp(&a.score())
        .then_with(|| a.id.cmp(&b.id))
}

/// What: Build the catalog view for the current search text and mode filter.
///
/// Inputs:
/// - `records`: Full collection (any order)
/// - `query`: Free-text search, possibly empty
/// - `mode`: Mode filter (`All` or a mode name)
///
/// Output:
/// - Records passing both predicates, ordered by descending score then id.
///
/// Details:
/// - Total over all inputs: unknown modes and odd queries just yield fewer matches.
/// - An empty output is a valid "no matches" result.
#[must_use]
pub fn filter_and_sort<'a>(
    records: &'a [ServerRecord],
    query: &str,
    mode: &ModeFilter,
) -> Vec<&'a ServerRecord> {
    let mut out: Vec<&ServerRecord> = records
        .iter()
        .filter(|r| mode.matches(r) && matches_query(r, query))
        .collect();
    out.sort_by(|a, b| by_score_desc(a, b));
    out
}

/// What: Build the leaderboard view.
///
/// Inputs:
/// - `records`: Full, unfiltered collection
/// - `limit`: Maximum number of entries
///
/// Output:
/// - The `min(limit, records.len())` highest-scoring records, best first.
#[must_use]
pub fn top_ranked(records: &[ServerRecord], limit: usize) -> Vec<&ServerRecord> {
    let mut out: Vec<&ServerRecord> = records.iter().collect();
    out.sort_by(|a, b| by_score_desc(a, b));
    out.truncate(limit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: u32, name: &str, desc: &str, mode: &str, rating: f64, votes: u32) -> ServerRecord {
        ServerRecord {
            id,
            name: name.to_string(),
            ip: format!("{}.example:25565", name.to_lowercase().replace(' ', "")),
            description: desc.to_string(),
            mode: mode.to_string(),
            version: "1.20.1".to_string(),
            players: 10,
            max_players: 100,
            rating,
            votes,
            owner: None,
        }
    }

    fn ids(v: &[&ServerRecord]) -> Vec<u32> {
        v.iter().map(|r| r.id).collect()
    }

    fn sample() -> Vec<ServerRecord> {
        vec![
            rec(1, "SkyBlock Heaven", "Лучший SkyBlock сервер", "SkyBlock", 4.8, 2340),
            rec(2, "CraftWars PvP", "Хардкорный PvP с кланами", "PvP", 4.6, 1820),
            rec(3, "Survival Master", "Классический выживание", "Survival", 4.7, 980),
            rec(4, "MiniGames Paradise", "50+ мини-игр", "MiniGames", 4.9, 3120),
        ]
    }

    #[test]
    /// What: Empty query and All filter return everything ranked by score
    ///
    /// - Input: Four records with distinct scores
    /// - Output: Ids ordered 4, 1, 2, 3
    fn query_all_returns_everything_by_score() {
        let data = sample();
        let out = filter_and_sort(&data, "", &ModeFilter::All);
        assert_eq!(ids(&out), vec![4, 1, 2, 3]);
    }

    #[test]
    /// What: Text query matches name or description case-insensitively
    ///
    /// - Input: "pvp" (name/description), "ВЫЖИВАНИЕ" (Cyrillic description, other case)
    /// - Output: Only the PvP server; only the Survival server
    fn query_text_matches_name_or_description() {
        let data = sample();
        assert_eq!(ids(&filter_and_sort(&data, "pvp", &ModeFilter::All)), vec![2]);
        assert_eq!(
            ids(&filter_and_sort(&data, "ВЫЖИВАНИЕ", &ModeFilter::All)),
            vec![3]
        );
        assert!(filter_and_sort(&data, "nothing-like-this", &ModeFilter::All).is_empty());
    }

    #[test]
    /// What: Mode filter and query combine with AND
    ///
    /// - Input: Mode survival; mode skyblock with query "pvp"; unknown mode
    /// - Output: Survival server; nothing; nothing
    fn query_mode_and_text_combine() {
        let data = sample();
        let survival = ModeFilter::parse("survival");
        assert_eq!(ids(&filter_and_sort(&data, "", &survival)), vec![3]);
        let sky = ModeFilter::parse("SkyBlock");
        assert!(filter_and_sort(&data, "pvp", &sky).is_empty());
        let unknown = ModeFilter::parse("hardcore");
        assert!(filter_and_sort(&data, "", &unknown).is_empty());
    }

    #[test]
    /// What: Equal scores are ordered by id ascending regardless of input order
    ///
    /// - Input: Three records with identical score given in reverse id order
    /// - Output: Ids 1, 2, 3 in both views
    fn query_ties_break_by_id() {
        let data = vec![
            rec(3, "c", "", "PvP", 4.0, 100),
            rec(1, "a", "", "PvP", 2.0, 200),
            rec(2, "b", "", "PvP", 5.0, 80),
        ];
        assert_eq!(ids(&filter_and_sort(&data, "", &ModeFilter::All)), vec![1, 2, 3]);
        assert_eq!(ids(&top_ranked(&data, 10)), vec![1, 2, 3]);
    }

    #[test]
    /// What: Leaderboard truncates to the limit and ignores filters
    ///
    /// - Input: Four records; limits 2, 10, 0
    /// - Output: Best two; all four; none
    fn query_top_ranked_limits() {
        let data = sample();
        assert_eq!(ids(&top_ranked(&data, 2)), vec![4, 1]);
        assert_eq!(ids(&top_ranked(&data, 10)), vec![4, 1, 2, 3]);
        assert!(top_ranked(&data, 0).is_empty());
    }

    #[test]
    /// What: Empty collection yields empty views
    ///
    /// - Input: No records
    /// - Output: Both operations return empty vectors
    fn query_empty_collection() {
        let data: Vec<ServerRecord> = Vec::new();
        assert!(filter_and_sort(&data, "x", &ModeFilter::All).is_empty());
        assert!(top_ranked(&data, DEFAULT_LEADERBOARD_SIZE).is_empty());
    }

    #[test]
    /// What: The engine does not reorder or mutate its input
    ///
    /// - Input: Sample collection queried twice
    /// - Output: Identical results; input order untouched
    fn query_is_pure_and_idempotent() {
        let data = sample();
        let before = data.clone();
        let a = ids(&filter_and_sort(&data, "a", &ModeFilter::All));
        let b = ids(&filter_and_sort(&data, "a", &ModeFilter::All));
        assert_eq!(a, b);
        assert_eq!(data, before);
    }
}
