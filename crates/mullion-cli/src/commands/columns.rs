use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use mullion_core::layout::{column_classes, column_count};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ColumnsArgs {
    pub class: String,
    #[arg(default_value_t = 0)]
    pub index: usize,
    #[arg(long, conflicts_with = "index")]
    pub grid: Option<usize>,
    #[arg(long, default_value = "")]
    pub extra: String,
}

#[derive(Debug, Serialize)]
struct ColumnClassDto {
    index: usize,
    classes: String,
}

pub fn preview(ctx: &Context<'_>, args: ColumnsArgs) -> Result<()> {
    if let Some(entries) = args.grid {
        let items: Vec<ColumnClassDto> = (0..entries)
            .map(|index| ColumnClassDto {
                index,
                classes: column_classes(&args.class, index, &args.extra),
            })
            .collect();

        if ctx.json {
            print_json(&items)?;
            return Ok(());
        }

        for item in items {
            println!("{:>3}  {}", item.index, item.classes);
        }
        return Ok(());
    }

    let classes = column_classes(&args.class, args.index, &args.extra);
    if ctx.json {
        print_json(&serde_json::json!({
            "index": args.index,
            "columns": column_count(&args.class),
            "classes": classes,
        }))?;
    } else {
        println!("{}", classes);
    }
    Ok(())
}
