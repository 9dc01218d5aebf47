use comfy_table::{ContentArrangement, Table};

use odyssey_core::QuestCatalog;

pub fn run() -> Result<(), String> {
    let catalog = QuestCatalog::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Objective", "Reward XP", "Story"]);

    for quest in catalog.iter() {
        let objective = if quest.is_stepped() {
            format!("{} steps", quest.steps.len())
        } else {
            format!(
                "{} {} x{}",
                quest.objective.kind, quest.objective.target, quest.objective.amount
            )
        };
        table.add_row(vec![
            quest.id.clone(),
            quest.title.clone(),
            objective,
            quest.rewards.xp.to_string(),
            if quest.main_story { "main" } else { "side" }.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} quests", catalog.len());

    Ok(())
}
