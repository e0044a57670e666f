use crate::cli::{
    args::EncodeArgs,
    config::{read_input, resolve_table, write_output},
    global::GlobalArgs,
};
use rhakimi::TableRegistry;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &TableRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = resolve_table(&args.table, config)?;
    let text = read_input(args.file.as_ref(), global)?;

    let mut encoded = rhakimi::encode_with(&table, &text)?;
    encoded.push('\n');

    write_output(args.output.as_ref(), &encoded)
}
