use crate::cli::{args::ConfigAction, config::describe_symbols, global::GlobalArgs};
use nb64::AlphabetRegistry;

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, config),
        ConfigAction::Show { alphabet, json } => handle_show(&alphabet, json, config),
    }
}

fn handle_list(json: bool, config: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let names = config.names();

    if json {
        let output = serde_json::json!({
            "alphabets": names,
            "default": config.default_alphabet(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let default = config.default_alphabet();
    for name in &names {
        let marker = if name == default { "*" } else { " " };
        let description = config
            .get_alphabet(name)
            .and_then(|a| a.description.as_deref())
            .unwrap_or("");
        println!("{} {:<12} {}", marker, name, description);
    }

    Ok(())
}

fn handle_show(
    name: &str,
    json: bool,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    // validates the entry and reports unknown names with a suggestion
    let table = config.table(name)?;
    let alphabet = config
        .get_alphabet(name)
        .ok_or_else(|| format!("Alphabet '{}' not found", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(alphabet)?);
        return Ok(());
    }

    println!("Alphabet: {}", name);
    if let Some(description) = &alphabet.description {
        println!("  Description: {}", description);
    }
    println!("  Symbols: {}", describe_symbols(table.symbols()));
    println!("  Delimiter: {}", describe_symbols(&[table.delimiter()]));

    Ok(())
}
