use crate::output::{list_or_dash, or_dash, print_json};
use brandkit_core::MissionParser;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let parser = super::mission_parser(root)?;
    let context = parser.extract_business_context();

    if json {
        return print_json(&context);
    }

    if context.is_empty() {
        println!("No business context found.");
        return Ok(());
    }
    println!("Industry:     {}", or_dash(context.industry.as_deref()));
    println!("Audience:     {}", list_or_dash(&context.target_audience));
    println!("Personality:  {}", list_or_dash(&context.brand_personality));
    println!("Values:       {}", list_or_dash(&context.values));
    Ok(())
}

pub fn app_name(root: &Path, json: bool) -> anyhow::Result<()> {
    let parser = super::mission_parser(root)?;
    let name = parser.extract_app_name();

    if json {
        return print_json(&serde_json::json!({ "app_name": name }));
    }
    match name {
        Some(name) => println!("{name}"),
        None => println!("No app name found."),
    }
    Ok(())
}
