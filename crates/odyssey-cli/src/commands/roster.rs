use comfy_table::{ContentArrangement, Table};

use odyssey_engine::EncounterTables;

pub fn run() -> Result<(), String> {
    let tables = EncounterTables::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "HP", "Attack", "Defense", "Locations"]);

    for enemy in &tables.enemies {
        table.add_row(vec![
            enemy.name.clone(),
            enemy.hp.to_string(),
            enemy.attack.to_string(),
            enemy.defense.to_string(),
            enemy.locations.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} enemy species", tables.enemies.len());

    Ok(())
}
