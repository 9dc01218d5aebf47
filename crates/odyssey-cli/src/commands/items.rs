use comfy_table::{ContentArrangement, Table};

use odyssey_core::ItemCatalog;

pub fn run() -> Result<(), String> {
    let catalog = ItemCatalog::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Kind", "Atk", "Def", "Price", "Description"]);

    for (name, def) in catalog.iter() {
        table.add_row(vec![
            name.to_string(),
            def.kind.to_string(),
            def.attack.to_string(),
            def.defense.to_string(),
            def.price.to_string(),
            def.description.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} items", catalog.len());

    Ok(())
}
