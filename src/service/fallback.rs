use rand::Rng;

use crate::model::{
    ids::{ChampionId, ProfileIconId},
    mastery::ChampionMasteryEntry,
    summoner::{LookupResult, SummonerProfile},
};

const PUUID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Real lookup of Doublelift#NA1, used as the shape for placeholder data.
pub fn template_result() -> LookupResult {
    LookupResult {
        summoner: SummonerProfile {
            display_name: "Doublelift".to_string(),
            level: 31,
            profile_icon_id: Some(ProfileIconId(654)),
            puuid: "4V6y6xJpla464PxBW5wbcNfaqbMBiIX7mN2Bow-sB_WKbE2krwJ63izMIMpA3yPRgO2M723DFLqwUQ".to_string(),
        },
        top_champions: vec![
            ChampionMasteryEntry {
                champion_id: ChampionId(67),
                mastery_level: 15,
                mastery_points: 181_371,
                last_played_at: 1_526_182_459_000,
                points_since_last_level: 50_771,
                points_until_next_level: -39_771,
                tokens_earned: 0,
            },
            ChampionMasteryEntry {
                champion_id: ChampionId(119),
                mastery_level: 9,
                mastery_points: 85_598,
                last_played_at: 1_526_244_290_000,
                points_since_last_level: 20_998,
                points_until_next_level: -9_998,
                tokens_earned: 1,
            },
            ChampionMasteryEntry {
                champion_id: ChampionId(236),
                mastery_level: 7,
                mastery_points: 60_244,
                last_played_at: 1_496_900_315_000,
                points_since_last_level: 17_644,
                points_until_next_level: -6_644,
                tokens_earned: 0,
            },
        ],
    }
}

/// Placeholder result for `game_name`. Values are random, the shape always matches the template.
pub fn fallback_result<R: Rng>(game_name: &str, rng: &mut R) -> LookupResult {
    let template = template_result();

    let suffix: String = (0..9)
        .map(|_| PUUID_CHARSET[rng.gen_range(0..PUUID_CHARSET.len())] as char)
        .collect();

    let summoner = SummonerProfile {
        display_name: game_name.to_string(),
        level: rng.gen_range(30..530),
        profile_icon_id: Some(ProfileIconId(rng.gen_range(500..600))),
        puuid: format!("mock-puuid-{}", suffix),
    };

    let top_champions = template
        .top_champions
        .into_iter()
        .map(|champ| ChampionMasteryEntry {
            mastery_points: rng.gen_range(50_000..550_000),
            mastery_level: rng.gen_range(1..=7),
            ..champ
        })
        .collect();

    LookupResult {
        summoner,
        top_champions,
    }
}
