use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ConfigArgs {}

pub fn show(ctx: &Context<'_>, _args: ConfigArgs) -> Result<()> {
    let heading = ctx.config.entry_heading();
    if ctx.json {
        print_json(&serde_json::json!({
            "icon_font": ctx.config.icon_font.as_str(),
            "a11y_headings": ctx.config.a11y_headings,
            "entry_heading": heading.as_str(),
        }))?;
    } else {
        println!("icon_font = {}", ctx.config.icon_font.as_str());
        println!("a11y_headings = {}", ctx.config.a11y_headings);
        println!("entry_heading = {}", heading.as_str());
    }
    Ok(())
}
