use nb64::{AlphabetRegistry, Table};

/// Resolves the alphabet name to use and builds its table.
///
/// Falls back to the registry's default alphabet when `requested` is `None`.
pub fn resolve_table<'a>(
    config: &'a AlphabetRegistry,
    requested: Option<&'a str>,
) -> Result<(&'a str, Table), Box<dyn std::error::Error>> {
    let name = requested.unwrap_or_else(|| config.default_alphabet());
    let table = config.table(name)?;
    Ok((name, table))
}

/// Renders symbol bytes for display: printable ASCII as-is, anything else as hex.
pub fn describe_symbols(symbols: &[u8]) -> String {
    if symbols.iter().all(|b| b.is_ascii_graphic()) {
        symbols.iter().map(|&b| b as char).collect()
    } else {
        symbols
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
