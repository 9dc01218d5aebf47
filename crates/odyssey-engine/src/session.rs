//! Interactive game session.
//!
//! `GameSession` wraps the combat engine and the mutable state behind a
//! line-based command surface. Combat commands resolve a full turn and
//! return the narrative lines that turn produced; inspection commands
//! return formatted text without touching state.

use odyssey_core::{Character, EquipSlot, ObjectiveKind, QuestState};

use crate::combat::{CombatEngine, TurnResult, log_quest_events};
use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::progression::LevelUp;
use crate::quests::QuestEvent;
use crate::state::{GamePhase, SessionState};
use crate::stats::effective_stats;

/// An interactive play session for one character.
pub struct GameSession {
    engine: CombatEngine,
    state: SessionState,
}

impl GameSession {
    /// Create a session over the standard catalogs and tables.
    pub fn new(character: Character, config: GameConfig) -> Self {
        Self::with_engine(CombatEngine::standard(), character, config)
    }

    /// Create a session with an explicit engine, for custom content.
    pub fn with_engine(engine: CombatEngine, character: Character, config: GameConfig) -> Self {
        Self {
            engine,
            state: SessionState::new(character, config),
        }
    }

    /// The combat engine and its catalogs.
    pub fn engine(&self) -> &CombatEngine {
        &self.engine
    }

    /// The session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The player character.
    pub fn character(&self) -> &Character {
        &self.state.character
    }

    /// Award XP directly, returning any level-ups.
    pub fn gain_xp(&mut self, amount: u32) -> Vec<LevelUp> {
        crate::progression::gain_xp(&mut self.state.character, amount)
    }

    /// Accept a quest by id.
    pub fn accept_quest(&mut self, quest_id: &str) -> Option<QuestEvent> {
        let event = self
            .engine
            .quests()
            .accept(&mut self.state.character, quest_id);
        if let Some(event) = &event {
            log_quest_events(&mut self.state.log, std::slice::from_ref(event));
        }
        event
    }

    /// Report a quest progress event, e.g. from an exploration collaborator.
    pub fn check_quest_progress(
        &mut self,
        kind: ObjectiveKind,
        target: &str,
        amount: u32,
    ) -> Vec<QuestEvent> {
        let events = self.engine.quests().check_progress(
            &mut self.state.character,
            &mut self.state.inventory,
            kind,
            target,
            amount,
        );
        log_quest_events(&mut self.state.log, &events);
        events
    }

    /// Consume one inventory item toward a matching quest objective.
    pub fn apply_quest_item(&mut self, item_name: &str) -> Option<Vec<QuestEvent>> {
        let events = self.engine.quests().apply_quest_item(
            &mut self.state.character,
            &mut self.state.inventory,
            item_name,
        );
        if let Some(events) = &events {
            log_quest_events(&mut self.state.log, events);
        }
        events
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> EngineResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "fight" | "encounter" => self.do_fight(),
            "attack" | "a" => self.do_turn(CombatEngine::attack, "There is no enemy to attack."),
            "block" | "b" => self.do_turn(CombatEngine::block, "There is nothing to block."),
            "dodge" | "d" => self.do_turn(CombatEngine::dodge, "There is nothing to dodge."),
            "special" | "s" => self.do_turn(
                CombatEngine::special_ability,
                "Special abilities only work in combat.",
            ),
            "use" => self.do_use(rest),
            "equip" => self.do_equip(rest),
            "unequip" => self.do_unequip(rest),
            "accept" => self.do_accept(rest),
            "quests" => Ok(self.do_quests()),
            "status" => Ok(self.do_status()),
            "inventory" | "inv" => Ok(self.do_inventory()),
            "log" => Ok(self.do_log()),
            "help" => Ok(Self::do_help()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(EngineError::UnknownCommand(cmd)),
        }
    }

    /// Run a combat action and collect the log lines it produced.
    fn do_turn(
        &mut self,
        action: fn(&CombatEngine, &mut SessionState) -> TurnResult,
        refusal: &str,
    ) -> EngineResult<String> {
        let mark = self.state.log.len();
        let result = action(&self.engine, &mut self.state);
        let output = self.lines_since(mark);
        if result == TurnResult::Refused && output.is_empty() {
            return Ok(refusal.to_string());
        }
        Ok(output)
    }

    fn do_fight(&mut self) -> EngineResult<String> {
        let mark = self.state.log.len();
        match self.engine.start_encounter(&mut self.state) {
            TurnResult::Refused => Ok(match self.state.phase {
                GamePhase::Combat => "You are already in combat!".to_string(),
                _ => "You cannot fight now.".to_string(),
            }),
            _ => Ok(self.lines_since(mark)),
        }
    }

    fn do_use(&mut self, item: &str) -> EngineResult<String> {
        if item.is_empty() {
            return Err(EngineError::InvalidInput("usage: use <item>".to_string()));
        }
        let mark = self.state.log.len();
        if self.state.in_combat() {
            self.engine.use_item(&mut self.state, item);
        } else {
            self.engine.use_item_exploring(&mut self.state, item);
        }
        Ok(self.lines_since(mark))
    }

    fn do_equip(&mut self, item: &str) -> EngineResult<String> {
        if item.is_empty() {
            return Err(EngineError::InvalidInput("usage: equip <item>".to_string()));
        }
        let swap = self.state.character.equipment.equip(
            &mut self.state.inventory,
            self.engine.items(),
            item,
        );
        match swap {
            Ok(Some(previous)) => {
                let line = format!("Equipped {item}, stowing {previous}.");
                self.state.log.append(line.clone());
                Ok(line)
            }
            Ok(None) => {
                let line = format!("Equipped {item}.");
                self.state.log.append(line.clone());
                Ok(line)
            }
            Err(err) => Ok(format!("Cannot equip: {err}.")),
        }
    }

    fn do_unequip(&mut self, slot: &str) -> EngineResult<String> {
        let Some(slot) = EquipSlot::parse(slot) else {
            return Err(EngineError::InvalidInput(
                "usage: unequip weapon|armor|accessory".to_string(),
            ));
        };
        match self
            .state
            .character
            .equipment
            .unequip(&mut self.state.inventory, slot)
        {
            Some(item) => {
                let line = format!("Unequipped {item}.");
                self.state.log.append(line.clone());
                Ok(line)
            }
            None => Ok(format!("Nothing equipped in the {slot} slot.")),
        }
    }

    fn do_accept(&mut self, quest_id: &str) -> EngineResult<String> {
        if quest_id.is_empty() {
            return Err(EngineError::InvalidInput(
                "usage: accept <quest id>".to_string(),
            ));
        }
        let mark = self.state.log.len();
        match self.accept_quest(quest_id) {
            Some(_) => Ok(self.lines_since(mark)),
            None => Ok(format!("Quest unavailable: {quest_id}")),
        }
    }

    fn do_quests(&self) -> String {
        let mut out = String::from("Quests:\n");
        let mut any = false;
        for quest in self.engine.quests().catalog().iter() {
            let state = self.state.character.quest_state(&quest.id);
            let line = match state {
                QuestState::NotAccepted => continue,
                QuestState::Active => {
                    let progress = &self.state.character.active_quests[&quest.id];
                    match quest.current_objective(progress) {
                        Some(obj) => format!(
                            "  [{}] {} - {} {} ({}/{})",
                            quest.id, quest.title, obj.kind, obj.target, progress.progress, obj.amount
                        ),
                        None => format!("  [{}] {}", quest.id, quest.title),
                    }
                }
                QuestState::Completed => {
                    format!("  [{}] {} - completed", quest.id, quest.title)
                }
            };
            out.push_str(&line);
            out.push('\n');
            any = true;
        }
        if !any {
            return "No quests accepted.".to_string();
        }
        out.trim_end().to_string()
    }

    fn do_status(&self) -> String {
        let c = &self.state.character;
        let stats = effective_stats(c, &self.state.player_effects, self.engine.items());
        let mut out = format!(
            "{} the {} {} (Level {})\n",
            c.name, c.race, c.role, c.level
        );
        out.push_str(&format!("  HP: {}/{}\n", c.hp.current(), c.hp.max()));
        out.push_str(&format!(
            "  Energy: {}/{}\n",
            c.energy.current(),
            c.energy.max()
        ));
        out.push_str(&format!(
            "  Attack: {} ({} base)  Defense: {} ({} base)\n",
            stats.attack, c.attack, stats.defense, c.defense
        ));
        out.push_str(&format!("  XP: {}/{}\n", c.xp, c.xp_to_next()));
        out.push_str(&format!(
            "  Special: {} (30 energy)\n",
            c.role.special_name()
        ));

        for slot in [EquipSlot::Weapon, EquipSlot::Armor, EquipSlot::Accessory] {
            if let Some(item) = c.equipment.in_slot(slot) {
                out.push_str(&format!("  {slot}: {item}\n"));
            }
        }
        for (kind, effect) in self.state.player_effects.iter() {
            out.push_str(&format!("  Effect: {kind} ({} turns)\n", effect.duration));
        }

        if let Some(enc) = &self.state.encounter {
            out.push_str(&format!(
                "  Fighting: {} ({}/{} HP)\n",
                enc.enemy.name,
                enc.enemy.display_hp(),
                enc.enemy.max_hp
            ));
        }
        out.trim_end().to_string()
    }

    fn do_inventory(&self) -> String {
        if self.state.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut out = format!("Inventory ({} items):\n", self.state.inventory.len());
        for (name, count) in self.state.inventory.counted() {
            out.push_str(&format!("  {count}x {name}\n"));
        }
        out.trim_end().to_string()
    }

    fn do_log(&self) -> String {
        if self.state.log.is_empty() {
            return "The mission log is empty.".to_string();
        }
        let mut out = String::new();
        for entry in self.state.log.tail(10) {
            out.push_str(&entry.text);
            out.push('\n');
        }
        out.trim_end().to_string()
    }

    fn do_help() -> String {
        "\
Combat:
  fight                 Seek out an enemy
  attack (a)            Basic attack
  block (b)             Halve the next hit
  dodge (d)             Try to avoid the next hit
  special (s)           Role special ability (30 energy)
  use <item>            Use a consumable

Character:
  equip <item>          Equip a weapon, armor, or accessory
  unequip <slot>        Empty a slot (weapon, armor, accessory)
  status                Character sheet
  inventory (inv)       List carried items

Quests:
  accept <quest id>     Accept a quest
  quests                Show quest progress

  log                   Recent mission log
  help                  This text
  quit (q)              Exit"
            .to_string()
    }

    /// Join the log lines appended since `mark` into one response.
    fn lines_since(&self, mark: usize) -> String {
        let lines: Vec<&str> = self
            .state
            .log
            .entries_since(mark)
            .iter()
            .map(|e| e.text.as_str())
            .collect();
        lines.join("\n")
    }
}
