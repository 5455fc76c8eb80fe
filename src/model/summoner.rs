use serde::{Deserialize, Serialize};

use super::{ids::ProfileIconId, mastery::ChampionMasteryEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerProfile {
    #[serde(rename = "name")]
    pub display_name: String,
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_icon_id: Option<ProfileIconId>,
    pub puuid: String,
}

/// Body of a successful lookup. Champion order is whatever the service sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub summoner: SummonerProfile,
    #[serde(default)]
    pub top_champions: Vec<ChampionMasteryEntry>,
}

impl LookupResult {
    pub fn top_champion(&self) -> Option<&ChampionMasteryEntry> {
        self.top_champions.first()
    }
}
