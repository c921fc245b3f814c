//! Project gallery command.

use anyhow::Result;
use paint_commerce::gallery::Gallery;

use super::GalleryArgs;
use crate::context::Context;
use crate::output::selector;

/// Run the gallery command.
pub fn run(args: GalleryArgs, ctx: &Context) -> Result<()> {
    let gallery = Gallery::portfolio();
    let projects = gallery.filter(&args.tab);

    if ctx.output.is_json() {
        ctx.output.json(&projects);
        return Ok(());
    }

    let tabs: Vec<String> = gallery
        .tabs()
        .into_iter()
        .map(|t| selector(t, t == args.tab))
        .collect();

    ctx.output.header(&format!("{} - Our Projects", ctx.config.shop.name));
    ctx.output.plain(&format!("  {}", tabs.join("  ")));
    ctx.output.plain("");

    if projects.is_empty() {
        ctx.output.info(&format!("No projects under '{}'.", args.tab));
        return Ok(());
    }

    for project in projects {
        ctx.output
            .list_item(&format!("#{} {} ({})", project.id, project.image, project.category));
    }
    Ok(())
}
