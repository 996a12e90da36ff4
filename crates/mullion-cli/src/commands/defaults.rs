use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use mullion_core::settings::{
    ContactSettings, CustomHtmlSettings, FeaturedSettings, IconSettings, SocialSettings,
    TitleSettings,
};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct DefaultsArgs {
    pub widget: String,
}

pub fn show(ctx: &Context<'_>, args: DefaultsArgs) -> Result<()> {
    let kind = args.widget.trim().to_ascii_lowercase();
    match kind.as_str() {
        "contact" => emit(ctx, &ContactSettings::default()),
        "social" => emit(ctx, &SocialSettings::default()),
        "icon" => emit(ctx, &IconSettings::default()),
        "title" => emit(ctx, &TitleSettings::default()),
        "custom-html" => emit(ctx, &CustomHtmlSettings::default()),
        "featured" => emit(ctx, &FeaturedSettings::default()),
        _ => Err(invalid_input(format!(
            "unknown widget kind: expected contact|social|icon|title|custom-html|featured, got {}",
            args.widget
        ))),
    }
}

fn emit<T: Serialize>(ctx: &Context<'_>, settings: &T) -> Result<()> {
    if ctx.json {
        return print_json(settings);
    }

    let value = serde_json::to_value(settings)?;
    if let Some(map) = value.as_object() {
        for (key, entry) in map {
            println!("{} = {}", key, entry);
        }
    }
    Ok(())
}
