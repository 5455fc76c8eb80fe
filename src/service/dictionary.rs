use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::ids::{ChampionId, ProfileIconId};

const DDRAGON_VERSION: &str = "13.24.1";

/// Stand-in for renderers whose icon image fails to load. Not used for a missing icon id.
pub const PROFILE_ICON_FALLBACK_URL: &str = "https://ddragon.leagueoflegends.com/cdn/13.24.1/img/profileicon/0.png";

// Subset of Data Dragon champion keys, enough for the names the lookup usually returns.
static CHAMPION_NAMES: Lazy<HashMap<ChampionId, &'static str>> = Lazy::new(|| {
    [
        (1, "Annie"),
        (7, "LeBlanc"),
        (21, "Miss Fortune"),
        (22, "Ashe"),
        (51, "Caitlyn"),
        (64, "Lee Sin"),
        (67, "Vayne"),
        (81, "Ezreal"),
        (84, "Akali"),
        (103, "Ahri"),
        (117, "Lulu"),
        (119, "Draven"),
        (157, "Yasuo"),
        (202, "Jhin"),
        (222, "Jinx"),
        (236, "Lucian"),
        (238, "Zed"),
        (245, "Ekko"),
        (268, "Azir"),
        (412, "Thresh"),
        (498, "Xayah"),
        (517, "Sylas"),
        (777, "Yone"),
    ]
    .into_iter()
    .map(|(id, name)| (ChampionId(id), name))
    .collect()
});

/// Display name for a champion id. Unknown ids never fail, they render as `Champion {id}`.
pub fn champion_name(id: ChampionId) -> String {
    match CHAMPION_NAMES.get(&id) {
        Some(name) => name.to_string(),
        None => format!("Champion {}", id),
    }
}

pub fn profile_icon_url(id: ProfileIconId) -> String {
    format!(
        "https://ddragon.leagueoflegends.com/cdn/{}/img/profileicon/{}.png",
        DDRAGON_VERSION, id
    )
}
