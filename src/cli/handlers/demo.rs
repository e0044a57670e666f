use crate::cli::{args::DemoArgs, config::resolve_table};
use rhakimi::{Table, TableRegistry};

const SAMPLE_TABLE: &str = "哈基米南北绿豆啊系噶";

/// Encodes the sample text, decodes it back and prints every stage.
pub fn handle(args: DemoArgs, config: &TableRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let table: Table = if args.table.table.is_none()
        && args.table.chars.is_none()
        && args.table.table_file.is_none()
    {
        SAMPLE_TABLE.parse()?
    } else {
        resolve_table(&args.table, config)?
    };

    let encoded = rhakimi::encode_with(&table, &args.text)?;
    let decoded = rhakimi::decode_with(&table, &encoded)?;

    println!("Table: {}", table);
    println!("Original: {}", args.text);
    println!("Encoded: {}", encoded);
    println!("Decoded: {}", decoded);

    if decoded != args.text {
        return Err("round trip mismatch".into());
    }
    Ok(())
}
