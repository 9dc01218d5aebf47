//! Quest acceptance, progress tracking, and completion.
//!
//! Each quest moves through NotAccepted → Active → Completed and never
//! backward. Progress events are matched against the quest's current
//! objective: the flat objective, or the current step for step quests.
//!
//! Reward XP is credited straight to `character.xp` without running the
//! level-up loop; the next [`crate::progression::gain_xp`] call picks it
//! up. This mirrors the original game and is kept deliberately.

use odyssey_core::{
    Character, Dialog, Inventory, ObjectiveKind, QuestCatalog, QuestProgress, QuestState, Rewards,
};

/// Something that happened to a quest as a result of a tracker call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestEvent {
    /// The quest was accepted.
    Accepted {
        /// Quest id.
        quest_id: String,
        /// Quest title, for display.
        title: String,
    },
    /// A step of a step quest completed; its rewards were granted.
    StepCompleted {
        /// Quest id.
        quest_id: String,
        /// Index of the completed step.
        step: usize,
        /// The step rewards granted.
        rewards: Rewards,
        /// Narrative attached to the step, if any.
        dialog: Option<Dialog>,
    },
    /// The quest completed; its quest-level rewards were granted.
    Completed {
        /// Quest id.
        quest_id: String,
        /// Quest title, for display.
        title: String,
        /// The quest-level rewards granted.
        rewards: Rewards,
    },
}

/// Tracks quest lifecycles against the static quest catalog.
#[derive(Debug, Clone, Default)]
pub struct QuestTracker {
    catalog: QuestCatalog,
}

impl QuestTracker {
    /// Create a tracker over a quest catalog.
    pub fn new(catalog: QuestCatalog) -> Self {
        Self { catalog }
    }

    /// The quest catalog this tracker reads from.
    pub fn catalog(&self) -> &QuestCatalog {
        &self.catalog
    }

    /// Accept a quest. No-op (returning `None`) if the id is unknown or the
    /// quest is already active or completed.
    pub fn accept(&self, character: &mut Character, quest_id: &str) -> Option<QuestEvent> {
        let quest = self.catalog.get(quest_id)?;
        if character.quest_state(quest_id) != QuestState::NotAccepted {
            return None;
        }
        character
            .active_quests
            .insert(quest_id.to_string(), QuestProgress::new());
        Some(QuestEvent::Accepted {
            quest_id: quest.id.clone(),
            title: quest.title.clone(),
        })
    }

    /// Report a progress event against every active quest.
    ///
    /// A quest advances when the event kind and target match its current
    /// objective and it still has progress to make. Completing a step grants
    /// that step's rewards and advances to the next step; completing the
    /// final step (or a flat quest's objective) completes the quest and
    /// grants the quest-level rewards on top.
    pub fn check_progress(
        &self,
        character: &mut Character,
        inventory: &mut Inventory,
        kind: ObjectiveKind,
        target: &str,
        amount: u32,
    ) -> Vec<QuestEvent> {
        let mut events = Vec::new();
        let active_ids: Vec<String> = character.active_quests.keys().cloned().collect();

        for quest_id in active_ids {
            let Some(quest) = self.catalog.get(&quest_id) else {
                continue;
            };
            let Some(progress) = character.active_quests.get(&quest_id).copied() else {
                continue;
            };
            let Some(objective) = quest.current_objective(&progress) else {
                continue;
            };
            if objective.kind != kind || objective.target != target {
                continue;
            }
            if progress.progress >= objective.amount {
                continue;
            }

            let required = objective.amount;
            let entry = character
                .active_quests
                .get_mut(&quest_id)
                .expect("active quest vanished mid-update");
            entry.progress += amount;

            if entry.progress < required {
                continue;
            }

            if quest.is_stepped() {
                let step = entry.current_step;
                let step_def = &quest.steps[step];
                grant_rewards(character, inventory, &step_def.rewards);

                let entry = character
                    .active_quests
                    .get_mut(&quest_id)
                    .expect("active quest vanished mid-update");
                entry.progress = 0;
                entry.current_step = step + 1;
                let finished = entry.current_step >= quest.steps.len();

                events.push(QuestEvent::StepCompleted {
                    quest_id: quest_id.clone(),
                    step,
                    rewards: step_def.rewards.clone(),
                    dialog: step_def.dialog.clone(),
                });

                if finished {
                    events.push(self.complete(character, inventory, &quest_id));
                }
            } else {
                events.push(self.complete(character, inventory, &quest_id));
            }
        }
        events
    }

    /// Manually consume one inventory item toward a matching quest.
    ///
    /// Matches only the current objective's target (not its kind), spends at
    /// most one unit for at most one quest, and removes the unit from the
    /// inventory. Returns the resulting events, or `None` if nothing matched
    /// or the item is not held.
    pub fn apply_quest_item(
        &self,
        character: &mut Character,
        inventory: &mut Inventory,
        item_name: &str,
    ) -> Option<Vec<QuestEvent>> {
        let active_ids: Vec<String> = character.active_quests.keys().cloned().collect();

        for quest_id in active_ids {
            let Some(quest) = self.catalog.get(&quest_id) else {
                continue;
            };
            let Some(progress) = character.active_quests.get(&quest_id) else {
                continue;
            };
            let Some(objective) = quest.current_objective(progress) else {
                continue;
            };
            if objective.target != item_name || progress.progress >= objective.amount {
                continue;
            }
            if !inventory.remove_one(item_name) {
                return None;
            }
            let kind = objective.kind;
            return Some(self.check_progress(character, inventory, kind, item_name, 1));
        }
        None
    }

    /// Complete a quest: grant its rewards and move it to the completed set.
    fn complete(
        &self,
        character: &mut Character,
        inventory: &mut Inventory,
        quest_id: &str,
    ) -> QuestEvent {
        let quest = self
            .catalog
            .get(quest_id)
            .expect("completing a quest that is not in the catalog");
        grant_rewards(character, inventory, &quest.rewards);
        character.active_quests.remove(quest_id);
        character.completed_quests.push(quest_id.to_string());
        QuestEvent::Completed {
            quest_id: quest.id.clone(),
            title: quest.title.clone(),
            rewards: quest.rewards.clone(),
        }
    }
}

/// Credit reward XP directly and add reward items to the inventory.
fn grant_rewards(character: &mut Character, inventory: &mut Inventory, rewards: &Rewards) {
    character.xp += rewards.xp;
    for item in &rewards.items {
        inventory.add(item.clone());
    }
}
