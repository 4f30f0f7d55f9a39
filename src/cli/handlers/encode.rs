use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, write_output},
    config::resolve_table,
    global::GlobalArgs,
};
use nb64::AlphabetRegistry;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let (name, table) = resolve_table(config, args.alphabet.as_deref())?;
    let data = read_input(args.file.as_ref(), global)?;

    let mut encoded = nb64::encode(&data, &table)?;
    log::info!(
        "encoded {} bytes into {} symbols with alphabet '{}'",
        data.len(),
        encoded.len(),
        name
    );

    if !args.no_newline {
        encoded.push(b'\n');
    }
    write_output(args.output.as_ref(), &encoded)
}
