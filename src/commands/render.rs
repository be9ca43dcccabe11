//! The `render` command.

use super::{load_context, load_template};
use crate::cli::RenderArgs;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::template::{self, Context};

pub(super) fn cmd_render(args: RenderArgs) -> Result<()> {
    let template = load_template(&args.template)?;
    let context = match &args.context {
        Some(path) => load_context(path)?,
        None => Context::new(),
    };

    let rendered = template::render(&template, &context);

    match &args.out {
        Some(out) => atomic_write_file(out, &rendered)?,
        None => println!("{}", rendered),
    }

    Ok(())
}
