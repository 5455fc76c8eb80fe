use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ChampionId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryEntry {
    pub champion_id: ChampionId,
    #[serde(rename = "championLevel")]
    pub mastery_level: u16,
    #[serde(rename = "championPoints")]
    pub mastery_points: u32,
    #[serde(rename = "lastPlayTime")]
    pub last_played_at: i64,
    #[serde(rename = "championPointsSinceLastLevel")]
    pub points_since_last_level: i64,
    /// Negative once the champion sits at a level without a further threshold.
    #[serde(rename = "championPointsUntilNextLevel")]
    pub points_until_next_level: i64,
    pub tokens_earned: u16,
}

impl ChampionMasteryEntry {
    /// Percentage of the way to the next level, `None` when no next level is defined.
    pub fn progress_percent(&self) -> Option<f64> {
        if self.points_until_next_level <= 0 {
            return None;
        }

        let since = self.points_since_last_level as f64;
        let span = since + self.points_until_next_level as f64;
        Some((since / span * 100.0).clamp(0.0, 100.0))
    }

    pub fn points_needed(&self) -> Option<u32> {
        u32::try_from(self.points_until_next_level).ok().filter(|p| *p > 0)
    }

    pub fn next_level(&self) -> u16 {
        self.mastery_level.saturating_add(1)
    }

    pub fn last_played(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.last_played_at).single()
    }
}

// VAYNE (Doublelift)
//   {
//     "championId": 67,
//     "championLevel": 15,
//     "championPoints": 181371,
//     "lastPlayTime": 1526182459000,
//     "championPointsSinceLastLevel": 50771,
//     "championPointsUntilNextLevel": -39771,
//     "tokensEarned": 0
//   },
