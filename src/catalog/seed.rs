use crate::state::ServerRecord;

/// What: Build one seed record.
#[allow(clippy::too_many_arguments)]
fn entry(
    id: u32,
    name: &str,
    ip: &str,
    description: &str,
    mode: &str,
    version: &str,
    (players, max_players): (u32, u32),
    (rating, votes): (f64, u32),
) -> ServerRecord {
    ServerRecord {
        id,
        name: name.to_string(),
        ip: ip.to_string(),
        description: description.to_string(),
        mode: mode.to_string(),
        version: version.to_string(),
        players,
        max_players,
        rating,
        votes,
        owner: None,
    }
}

/// What: Built-in sample servers used when no catalog file is configured.
///
/// Output:
/// - Four records with ids 1..=4.
pub fn seed_records() -> Vec<ServerRecord> {
    vec![
        entry(
            1,
            "SkyBlock Heaven",
            "sky.heaven.ru:25565",
            "Лучший SkyBlock сервер с уникальными островами и крафтами",
            "SkyBlock",
            "1.20.1",
            (487, 1000),
            (4.8, 2340),
        ),
        entry(
            2,
            "CraftWars PvP",
            "wars.craft.net:25565",
            "Хардкорный PvP с кланами, рейдами и эпичными битвами",
            "PvP",
            "1.19.4",
            (312, 500),
            (4.6, 1820),
        ),
        entry(
            3,
            "Survival Master",
            "survival.pro:19132",
            "Классический выживание с экономикой и привилегиями",
            "Survival",
            "1.20.2",
            (156, 300),
            (4.7, 980),
        ),
        entry(
            4,
            "MiniGames Paradise",
            "mini.paradise.com:25565",
            "50+ мини-игр, турниры каждый день, уникальные режимы",
            "MiniGames",
            "1.20.1",
            (623, 1500),
            (4.9, 3120),
        ),
    ]
}
