use crate::cli::args::TablesArgs;
use rhakimi::{TableConfig, TableRegistry};

const PREVIEW_CHARS: usize = 20;

pub fn handle(args: TablesArgs, config: &TableRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let default = config.settings.default_table.as_deref();

    if args.json {
        let entries: Vec<serde_json::Value> = config
            .names()
            .into_iter()
            .filter_map(|name| config.get_table(name).map(|t| (name, t)))
            .map(|(name, table_config)| {
                serde_json::json!({
                    "name": name,
                    "size": table_config.declared_size(),
                    "preview": preview(table_config),
                    "description": table_config.description,
                    "default": Some(name) == default,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Available tables:\n");
    for name in config.names() {
        let Some(table_config) = config.get_table(name) else {
            continue;
        };
        let size = table_config.declared_size();
        let suffix = if size > PREVIEW_CHARS { "..." } else { "" };
        let marker = if Some(name) == default { "*" } else { " " };
        println!(
            " {}{:<15} base-{:<5} {}{}",
            marker,
            name,
            size,
            preview(table_config),
            suffix
        );
    }
    Ok(())
}

fn preview(table_config: &TableConfig) -> String {
    match table_config.effective_chars() {
        Ok(chars) => chars.chars().take(PREVIEW_CHARS).collect(),
        Err(_) => String::from("(invalid range)"),
    }
}
