pub mod ids;
pub mod lookup;
pub mod mastery;
pub mod region;
pub mod summoner;
