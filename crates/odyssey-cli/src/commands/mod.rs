pub mod items;
pub mod play;
pub mod quests;
pub mod roster;
