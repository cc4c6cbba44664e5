//! Decode command: show how a raw model value is interpreted.

use anyhow::{Context, Result};
use dispeller_core::ModelDescriptor;

pub fn run(raw: &str) -> Result<()> {
    let value = parse_raw(raw)?;
    let model = ModelDescriptor::decode(value);

    println!("raw:       {:#018X}", value);
    println!("model id:  {}", model.id_string());
    println!("kind:      {}", if model.is_weapon() { "weapon" } else { "gear" });
    println!("primary:   {}", model.primary_key);
    println!("secondary: {}", model.secondary_key);
    println!("variant:   {}", model.variant);
    println!("dye:       {}", model.dye_channel);
    Ok(())
}

pub fn parse_raw(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => raw.replace('_', "").parse(),
    };
    parsed.with_context(|| format!("Invalid model value: {}", raw))
}
