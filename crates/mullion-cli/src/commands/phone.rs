use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use mullion_core::phone::{normalize_telephone, tel_uri, DEFAULT_EXT_SEPARATOR};

#[derive(Debug, Args)]
pub struct PhoneArgs {
    pub value: String,
    #[arg(long, default_value = DEFAULT_EXT_SEPARATOR)]
    pub separator: String,
    #[arg(long)]
    pub href: bool,
}

pub fn normalize(ctx: &Context<'_>, args: PhoneArgs) -> Result<()> {
    let display = normalize_telephone(&args.value, &args.separator)
        .ok_or_else(|| invalid_input(format!("not a phone number: {}", args.value)))?;
    let href = if args.href { tel_uri(&args.value) } else { None };

    if ctx.json {
        print_json(&serde_json::json!({ "display": display, "href": href }))?;
    } else {
        println!("{}", display);
        if let Some(href) = href {
            println!("{}", href);
        }
    }
    Ok(())
}
