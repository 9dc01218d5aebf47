//! Quest definitions and the quest catalog.
//!
//! A quest is static definition data: either one flat objective or an
//! ordered list of steps, each with its own objective and rewards. The
//! mutable half of a quest (progress, current step) lives on the character.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What kind of event advances an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveKind {
    /// Defeat enemies matching the target name.
    Kill,
    /// Obtain items matching the target name.
    Collect,
}

impl std::fmt::Display for ObjectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Kill => "kill",
            Self::Collect => "collect",
        };
        write!(f, "{name}")
    }
}

/// What a quest (or quest step) requires progress against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    /// Event kind that advances this objective.
    pub kind: ObjectiveKind,
    /// Target name the event must match (enemy or item name).
    pub target: String,
    /// How much progress completes the objective.
    pub amount: u32,
}

impl Objective {
    /// Create an objective.
    pub fn new(kind: ObjectiveKind, target: impl Into<String>, amount: u32) -> Self {
        Self {
            kind,
            target: target.into(),
            amount,
        }
    }
}

/// Rewards granted on completing a quest or a quest step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewards {
    /// XP granted.
    pub xp: u32,
    /// Items added to the inventory, one unit each.
    pub items: Vec<String>,
}

impl Rewards {
    /// XP-only rewards.
    pub fn xp(xp: u32) -> Self {
        Self {
            xp,
            items: Vec::new(),
        }
    }

    /// XP plus items.
    pub fn new(xp: u32, items: &[&str]) -> Self {
        Self {
            xp,
            items: items.iter().map(|i| (*i).to_string()).collect(),
        }
    }
}

/// Narrative shown when a quest step completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    /// Dialog title.
    pub title: String,
    /// Dialog body text.
    pub text: String,
}

/// One step of a multi-step quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestStep {
    /// The step's objective.
    pub objective: Objective,
    /// Rewards granted when this step completes.
    pub rewards: Rewards,
    /// Optional narrative shown on step completion.
    pub dialog: Option<Dialog>,
}

/// Static definition of one quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Stable quest id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Flavor description.
    pub description: String,
    /// The flat objective. For step quests this is display data only;
    /// the steps drive progress.
    pub objective: Objective,
    /// Rewards granted when the quest as a whole completes.
    pub rewards: Rewards,
    /// Ordered steps; empty for flat quests.
    pub steps: Vec<QuestStep>,
    /// Whether this quest belongs to the main story line.
    pub main_story: bool,
}

impl Quest {
    /// Returns true if this quest progresses through ordered steps.
    pub fn is_stepped(&self) -> bool {
        !self.steps.is_empty()
    }

    /// The objective the given progress record is currently working on.
    ///
    /// Returns `None` for a step quest whose step index has run past the
    /// final step (it should already have been completed).
    pub fn current_objective(&self, progress: &QuestProgress) -> Option<&Objective> {
        if self.is_stepped() {
            self.steps.get(progress.current_step).map(|s| &s.objective)
        } else {
            Some(&self.objective)
        }
    }
}

/// The mutable half of a quest, stored on the character per active quest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestProgress {
    /// Progress toward the current objective's amount.
    pub progress: u32,
    /// Index of the current step (always 0 for flat quests).
    pub current_step: usize,
}

impl QuestProgress {
    /// Fresh progress: nothing done, first step.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Where a quest sits in its lifecycle for a given character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestState {
    /// Never accepted.
    NotAccepted,
    /// Accepted and in progress.
    Active,
    /// Finished; rewards granted.
    Completed,
}

/// The static quest catalog, keyed by quest id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestCatalog {
    quests: BTreeMap<String, Quest>,
}

impl QuestCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard quest set the game ships with.
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.insert(Quest {
            id: "quest_001".to_string(),
            title: "First Contact".to_string(),
            description: "Defeat 3 Xenobots to secure the landing zone.".to_string(),
            objective: Objective::new(ObjectiveKind::Kill, "Xenobot", 3),
            rewards: Rewards::new(50, &["Energy Cell"]),
            steps: Vec::new(),
            main_story: true,
        });
        catalog.insert(Quest {
            id: "quest_002".to_string(),
            title: "Scrap Collector".to_string(),
            description: "Collect 2 Scrap Metal pieces for repairs.".to_string(),
            objective: Objective::new(ObjectiveKind::Collect, "Scrap Metal", 2),
            rewards: Rewards::new(30, &["Nano Stimpack"]),
            steps: Vec::new(),
            main_story: false,
        });
        catalog.insert(Quest {
            id: "quest_003".to_string(),
            title: "Alien Threat".to_string(),
            description: "Defeat 5 Plasmavores to protect the colony.".to_string(),
            objective: Objective::new(ObjectiveKind::Kill, "Plasmavore", 5),
            rewards: Rewards::new(75, &["Plasma Rifle"]),
            steps: Vec::new(),
            main_story: true,
        });
        catalog.insert(Quest {
            id: "quest_004".to_string(),
            title: "Lost Cargo".to_string(),
            description: "Recover a lost Data Chip.".to_string(),
            objective: Objective::new(ObjectiveKind::Collect, "Data Chip", 1),
            rewards: Rewards::new(45, &["Energy Cell"]),
            steps: Vec::new(),
            main_story: false,
        });
        catalog.insert(Quest {
            id: "story_01".to_string(),
            title: "The Awakening".to_string(),
            description: "Investigate the strange signal.".to_string(),
            // Display objective; the steps below drive actual progress.
            objective: Objective::new(ObjectiveKind::Kill, "Xenobot", 1),
            rewards: Rewards::xp(100),
            steps: vec![
                QuestStep {
                    objective: Objective::new(ObjectiveKind::Kill, "Xenobot", 1),
                    rewards: Rewards::xp(20),
                    dialog: Some(Dialog {
                        title: "Target Eliminated".to_string(),
                        text: "You've defeated the scout. But where did it come from? \
                               You notice a strange device on its chassis."
                            .to_string(),
                    }),
                },
                QuestStep {
                    objective: Objective::new(ObjectiveKind::Collect, "Scrap Metal", 1),
                    rewards: Rewards::new(0, &["Energy Cell"]),
                    dialog: Some(Dialog {
                        title: "Repairs Needed".to_string(),
                        text: "This scrap will help fix the comms array. \
                               Maybe we can decode the signal."
                            .to_string(),
                    }),
                },
            ],
            main_story: true,
        });

        catalog
    }

    /// Insert or replace a quest, keyed by its id.
    pub fn insert(&mut self, quest: Quest) {
        self.quests.insert(quest.id.clone(), quest);
    }

    /// Look up a quest by id.
    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.quests.get(id)
    }

    /// Iterate over quests in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Quest> {
        self.quests.values()
    }

    /// Number of quests defined.
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}
