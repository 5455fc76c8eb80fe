use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{region::Region, summoner::LookupResult};

pub const DEFAULT_TAG_LINE: &str = "NA1";

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupForm {
    pub game_name: String,
    pub tag_line: String,
    pub region: Region,
    tag_line_edited: bool,
}

impl Default for LookupForm {
    fn default() -> Self {
        Self {
            game_name: String::new(),
            tag_line: DEFAULT_TAG_LINE.to_string(),
            region: Region::default(),
            tag_line_edited: false,
        }
    }
}

impl LookupForm {
    pub fn new(game_name: &str, tag_line: &str, region: Region) -> Self {
        let mut form = Self {
            game_name: game_name.to_string(),
            region,
            ..Self::default()
        };
        form.set_tag_line(tag_line);
        form
    }

    pub fn set_game_name(&mut self, game_name: &str) {
        self.game_name = game_name.to_string();
    }

    /// User typed into the tag line field. Any non-blank value is theirs, even one that matches a
    /// region suggestion. A cleared field hands control back to region suggestions.
    pub fn set_tag_line(&mut self, tag_line: &str) {
        self.tag_line = tag_line.to_string();
        self.tag_line_edited = !tag_line.trim().is_empty();
    }

    /// Accepts either a bare game name or a full `GameName#TagLine`. The tag part, when present and
    /// non-blank, counts as typed by the user.
    pub fn set_riot_id(&mut self, riot_id: &str) {
        match riot_id.split_once('#') {
            Some((game_name, tag_line)) => {
                self.set_game_name(game_name);
                if !tag_line.trim().is_empty() {
                    self.set_tag_line(tag_line);
                }
            }
            None => self.set_game_name(riot_id),
        }
    }

    /// Switches region and applies its tag line suggestion unless the user typed their own tag.
    pub fn select_region(&mut self, region: Region) {
        self.region = region;
        if !self.tag_line_edited {
            self.tag_line = region.default_tag_line().to_string();
        }
    }

    pub fn tag_line_edited(&self) -> bool {
        self.tag_line_edited
    }
}

/// Validated, trimmed request. Serializes to the body the lookup service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    #[serde(rename = "summonerName")]
    pub game_name: String,
    #[serde(rename = "tagLine")]
    pub tag_line: String,
    pub region: Region,
}

impl LookupRequest {
    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.game_name, self.tag_line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a summoner name")]
    EmptyGameName,
    #[error("Please enter a tag line")]
    EmptyTagLine,
}

pub fn validate(form: &LookupForm) -> Result<LookupRequest, ValidationError> {
    let game_name = form.game_name.trim();
    if game_name.is_empty() {
        return Err(ValidationError::EmptyGameName);
    }

    let tag_line = form.tag_line.trim();
    if tag_line.is_empty() {
        return Err(ValidationError::EmptyTagLine);
    }

    Ok(LookupRequest {
        game_name: game_name.to_string(),
        tag_line: tag_line.to_string(),
        region: form.region,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Success {
        result: LookupResult,
        used_fallback: bool,
        message: String,
    },
    Failure {
        message: String,
        used_fallback: bool,
    },
}

impl LookupOutcome {
    pub fn used_fallback(&self) -> bool {
        match self {
            LookupOutcome::Success { used_fallback, .. } | LookupOutcome::Failure { used_fallback, .. } => {
                *used_fallback
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LookupOutcome::Success { message, .. } | LookupOutcome::Failure { message, .. } => message,
        }
    }

    pub fn result(&self) -> Option<&LookupResult> {
        match self {
            LookupOutcome::Success { result, .. } => Some(result),
            LookupOutcome::Failure { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success { .. })
    }
}
