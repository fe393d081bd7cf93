use crate::output::{list_or_dash, print_json};
use brandkit_core::MissionParser;
use std::path::Path;

pub fn run(root: &Path, context_only: bool, json: bool) -> anyhow::Result<()> {
    let parser = super::mission_parser(root)?;
    let colors = parser.extract_theme_colors();

    if context_only {
        let ctx = parser.generate_prompt_context(&parser.extract_business_context(), &colors);
        if json {
            return print_json(&ctx);
        }
        println!("Style:     {}", list_or_dash(&ctx.style_keywords));
        println!("Colors:    {}", list_or_dash(&ctx.color_palette));
        println!("Industry:  {}", list_or_dash(&ctx.industry_context));
        println!("Audience:  {}", list_or_dash(&ctx.audience_context));
        return Ok(());
    }

    let brief = parser.brief();
    let prompt = parser.generate_logo_prompt(&brief, &colors);
    if json {
        print_json(&serde_json::json!({
            "app_name": brief.app_name,
            "prompt": prompt,
        }))
    } else {
        println!("{prompt}");
        Ok(())
    }
}
