use crate::cli::{
    args::DecodeArgs,
    commands::{read_input, write_output},
    config::resolve_table,
    global::GlobalArgs,
};
use nb64::{AlphabetRegistry, Table};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let (name, table) = resolve_table(config, args.alphabet.as_deref())?;
    let input = read_input(args.file.as_ref(), global)?;

    let encoded = trim_trailing_whitespace(&input, &table);
    let decoded = nb64::decode(encoded, &table)?;
    log::info!(
        "decoded {} symbols into {} bytes with alphabet '{}'",
        encoded.len(),
        decoded.len(),
        name
    );

    write_output(args.output.as_ref(), &decoded)
}

/// Drops trailing ASCII whitespace (such as the newline `encode` appends)
/// unless the alphabet itself uses those bytes.
fn trim_trailing_whitespace<'a>(input: &'a [u8], table: &Table) -> &'a [u8] {
    let end = input
        .iter()
        .rposition(|&b| {
            !b.is_ascii_whitespace() || b == table.delimiter() || table.value(b).is_some()
        })
        .map_or(0, |i| i + 1);
    &input[..end]
}
