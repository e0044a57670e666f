use crate::cli::{
    args::DecodeArgs,
    config::{read_input, resolve_table, write_output},
    global::GlobalArgs,
};
use rhakimi::TableRegistry;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &TableRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = resolve_table(&args.table, config)?;
    let input_text = read_input(args.file.as_ref(), global)?;

    // Whitespace is only significant when the table itself contains some
    let encoded = if !table.symbols().iter().any(|c| c.is_whitespace()) {
        input_text.trim()
    } else {
        input_text.trim_end_matches(['\n', '\r'])
    };

    let decoded = rhakimi::decode_with(&table, encoded)?;
    write_output(args.output.as_ref(), &decoded)
}
