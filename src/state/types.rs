//! Core value types used by craftlist state.

use serde::{Deserialize, Deserializer, Serialize};

/// One catalog entry describing a single game server.
///
/// Records are read-only for the lifetime of a session; the catalog store owns
/// them and every presentation order is derived by the query engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRecord {
    /// Unique, immutable identifier within a catalog.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Connection address (`host:port`), never validated.
    pub ip: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Gameplay category such as `SkyBlock` or `PvP`.
    pub mode: String,
    /// Game version label, display only.
    #[serde(default)]
    pub version: String,
    /// Players currently online.
    #[serde(default)]
    pub players: u32,
    /// Advertised player capacity.
    #[serde(default, alias = "max_players")]
    pub max_players: u32,
    /// Average rating in `[0, 5]`. Accepts a JSON number or a numeric string.
    #[serde(default, deserialize_with = "de_rating")]
    pub rating: f64,
    /// Number of votes backing `rating`.
    #[serde(default)]
    pub votes: u32,
    /// Submitting user, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// Rating as the directory service may emit it.
#[derive(Deserialize)]
#[serde(untagged)]
enum RatingRepr {
    /// Plain JSON number.
    Num(f64),
    /// Decimal column serialized as text, e.g. `"4.8"`.
    Text(String),
}

/// What: Decode `rating` from a number, a numeric string, or `null`.
///
/// Output:
/// - The parsed value; `null` decodes to `0.0`.
///
/// # Errors
/// - A custom serde error naming the offending text when it is not a number.
fn de_rating<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    match Option::<RatingRepr>::deserialize(d)? {
        None => Ok(0.0),
        Some(RatingRepr::Num(n)) => Ok(n),
        Some(RatingRepr::Text(t)) => t.trim().parse::<f64>().map_err(|_| {
            serde::de::Error::custom(format!("invalid rating {t:?}, expected a number"))
        }),
    }
}

impl ServerRecord {
    /// What: Popularity-weighted ranking key.
    ///
    /// Inputs: none
    ///
    /// Output: `rating * votes`, unclamped.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.rating * f64::from(self.votes)
    }

    /// What: Fill ratio of the server for gauges.
    ///
    /// Output:
    /// - `players / max_players` clamped to `[0, 1]`; `0.0` when capacity is unknown.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        if self.max_players == 0 {
            return 0.0;
        }
        (f64::from(self.players) / f64::from(self.max_players)).clamp(0.0, 1.0)
    }
}

/// Mode names the UI selector cycles through, in display order.
pub const KNOWN_MODES: [&str; 5] = ["survival", "skyblock", "pvp", "minigames", "creative"];

/// Mode filter applied to the catalog view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModeFilter {
    /// Sentinel: every mode passes.
    #[default]
    All,
    /// Only records whose mode equals this lowercased name pass.
    Mode(String),
}

impl ModeFilter {
    /// What: Parse a filter from its config/CLI string.
    ///
    /// Inputs: `s` raw value; case is ignored, whitespace is significant.
    ///
    /// Output: `All` for `"all"`, otherwise `Mode(lowercased)`.
    ///
    /// Details:
    /// - Any other string, empty included, is a mode name and matches only records
    ///   whose mode equals it.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let key = s.to_lowercase();
        if key == "all" {
            Self::All
        } else {
            Self::Mode(key)
        }
    }

    /// Return the string key used in settings files and the CLI.
    #[must_use]
    pub fn as_key(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Mode(m) => m.as_str(),
        }
    }

    /// What: Check whether `record` passes this filter.
    ///
    /// Output: `true` for `All`, or when the record's mode equals the filter case-insensitively.
    #[must_use]
    pub fn matches(&self, record: &ServerRecord) -> bool {
        match self {
            Self::All => true,
            Self::Mode(m) => record.mode.to_lowercase() == *m,
        }
    }

    /// What: Advance to the next filter in the selector order.
    ///
    /// Details:
    /// - Order is `all`, then [`KNOWN_MODES`], wrapping back to `all`.
    /// - An unknown mode jumps back to `all`.
    #[must_use]
    pub fn cycle_next(&self) -> Self {
        match self {
            Self::All => Self::Mode(KNOWN_MODES[0].to_string()),
            Self::Mode(m) => match KNOWN_MODES.iter().position(|k| k == m) {
                Some(i) if i + 1 < KNOWN_MODES.len() => Self::Mode(KNOWN_MODES[i + 1].to_string()),
                _ => Self::All,
            },
        }
    }

    /// What: Step back to the previous filter in the selector order.
    #[must_use]
    pub fn cycle_prev(&self) -> Self {
        match self {
            Self::All => Self::Mode(KNOWN_MODES[KNOWN_MODES.len() - 1].to_string()),
            Self::Mode(m) => match KNOWN_MODES.iter().position(|k| k == m) {
                Some(0) | None => Self::All,
                Some(i) => Self::Mode(KNOWN_MODES[i - 1].to_string()),
            },
        }
    }
}

/// Which tab of the main screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Filtered, searchable catalog.
    #[default]
    Catalog,
    /// Fixed top-N leaderboard.
    Top,
}

impl Tab {
    /// Return the other tab.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Catalog => Self::Top,
            Self::Top => Self::Catalog,
        }
    }
}

/// Modal dialog state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No modal is open.
    #[default]
    None,
    /// Keybinding overview.
    Help,
    /// Blocking message that must be dismissed.
    Alert {
        /// Text to display.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mode: &str, rating: f64, votes: u32) -> ServerRecord {
        ServerRecord {
            id: 1,
            name: "x".into(),
            ip: "x:1".into(),
            description: String::new(),
            mode: mode.into(),
            version: "1.20".into(),
            players: 5,
            max_players: 10,
            rating,
            votes,
            owner: None,
        }
    }

    #[test]
    /// What: Mode filter parsing and case-insensitive matching
    ///
    /// - Input: "ALL", "", " pvp ", "PvP", record with mode "PvP"
    /// - Output: All sentinel only for "all"; empty and padded names match nothing;
    ///   lowercased mode matches regardless of record casing
    fn state_mode_filter_parse_and_match() {
        assert_eq!(ModeFilter::parse("ALL"), ModeFilter::All);
        let empty = ModeFilter::parse("");
        assert_eq!(empty, ModeFilter::Mode(String::new()));
        assert!(!empty.matches(&record("PvP", 1.0, 1)));
        assert!(!ModeFilter::parse(" pvp ").matches(&record("PvP", 1.0, 1)));
        let f = ModeFilter::parse("PvP");
        assert_eq!(f, ModeFilter::Mode("pvp".into()));
        assert!(f.matches(&record("PvP", 1.0, 1)));
        assert!(!f.matches(&record("Survival", 1.0, 1)));
        assert!(ModeFilter::All.matches(&record("anything", 0.0, 0)));
    }

    #[test]
    /// What: Selector cycling wraps through the vocabulary in both directions
    ///
    /// - Input: Repeated `cycle_next` from All; `cycle_prev` from All
    /// - Output: Returns to All after the last known mode; prev of All is the last mode
    fn state_mode_filter_cycles() {
        let mut f = ModeFilter::All;
        for expected in KNOWN_MODES {
            f = f.cycle_next();
            assert_eq!(f.as_key(), expected);
        }
        assert_eq!(f.cycle_next(), ModeFilter::All);
        assert_eq!(ModeFilter::All.cycle_prev().as_key(), "creative");
        assert_eq!(ModeFilter::parse("survival").cycle_prev(), ModeFilter::All);
        assert_eq!(ModeFilter::parse("hardcore").cycle_next(), ModeFilter::All);
    }

    #[test]
    /// What: Score and fill ratio arithmetic
    ///
    /// - Input: rating 4.5 with 2 votes; over-capacity players
    /// - Output: score 9.0; fill ratio clamped to 1.0; zero capacity yields 0.0
    fn state_record_score_and_fill() {
        let r = record("PvP", 4.5, 2);
        assert!((r.score() - 9.0).abs() < f64::EPSILON);
        let mut over = record("PvP", 1.0, 1);
        over.players = 20;
        assert!((over.fill_ratio() - 1.0).abs() < f64::EPSILON);
        over.max_players = 0;
        assert!(over.fill_ratio().abs() < f64::EPSILON);
    }

    #[test]
    /// What: JSON field naming accepts camelCase and snake_case capacity
    ///
    /// - Input: Records using `maxPlayers` and `max_players`, owner omitted
    /// - Output: Both deserialize to the same capacity; owner stays None and is not serialized
    fn state_record_json_aliases() {
        let a: ServerRecord = serde_json::from_str(
            r#"{"id":1,"name":"a","ip":"a:1","mode":"PvP","maxPlayers":50}"#,
        )
        .expect("camelCase parses");
        let b: ServerRecord = serde_json::from_str(
            r#"{"id":2,"name":"b","ip":"b:1","mode":"PvP","max_players":50}"#,
        )
        .expect("snake_case parses");
        assert_eq!(a.max_players, 50);
        assert_eq!(b.max_players, 50);
        assert!(a.owner.is_none());
        let out = serde_json::to_string(&a).expect("serializes");
        assert!(out.contains("maxPlayers"));
        assert!(!out.contains("owner"));
    }

    #[test]
    /// What: Ratings decode from numbers, numeric strings and null
    ///
    /// - Input: `4.8`, `"4.8"`, `" 3.25 "`, `null`, `"abc"`, plus service timestamps
    /// - Output: 4.8, 4.8, 3.25, 0.0; the non-numeric string is rejected with its text
    fn state_record_rating_accepts_text() {
        let parse = |rating: &str| {
            serde_json::from_str::<ServerRecord>(&format!(
                r#"{{"id":1,"name":"a","ip":"a:1","mode":"PvP","rating":{rating},"created_at":"2025-01-01 00:00:00"}}"#
            ))
        };
        let num = parse("4.8").expect("number");
        let text = parse(r#""4.8""#).expect("numeric string");
        assert!((num.rating - 4.8).abs() < 1e-9);
        assert!((text.rating - 4.8).abs() < 1e-9);
        assert!((parse(r#"" 3.25 ""#).expect("padded").rating - 3.25).abs() < 1e-9);
        assert!(parse("null").expect("null").rating.abs() < f64::EPSILON);
        let err = parse(r#""abc""#).expect_err("non-numeric rating");
        assert!(err.to_string().contains("invalid rating \"abc\""), "{err}");
        let back: ServerRecord =
            serde_json::from_str(&serde_json::to_string(&text).expect("serializes"))
                .expect("reparses");
        assert_eq!(back, text);
    }
}
