use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use prepdeck_engine::ContentRepository;
use prepdeck_engine::render::{HtmlOptions, render_index, render_topic_page};

/// Topic pages live under this directory so no topic id can replace `index.html`.
const PAGES_DIR: &str = "topics";

/// Writes `index.html` plus one page per topic under `topics/`, mirroring the
/// category layout.
///
/// Returns the number of topic pages written.
pub fn export_site(
    repo: &ContentRepository,
    out_dir: &Path,
    options: &HtmlOptions,
) -> Result<usize> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let index_path = out_dir.join("index.html");
    fs::write(&index_path, render_index(repo.tree(), &format!("{PAGES_DIR}/")))
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    let pages_root = out_dir.join(PAGES_DIR);
    let mut written = 0;
    for (id, record) in repo.records() {
        let page_path = id.record_path().with_extension("html").to_path(&pages_root);
        if let Some(parent) = page_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let page_options = HtmlOptions {
            index_href: Some(format!(
                "{}index.html",
                "../".repeat(id.categories().count() + 1)
            )),
            ..options.clone()
        };
        fs::write(&page_path, render_topic_page(record, &page_options))
            .with_context(|| format!("Failed to write {}", page_path.display()))?;
        log::debug!("Exported {id} to {}", page_path.display());
        written += 1;
    }

    log::info!("Exported {written} topics to {}", out_dir.display());
    Ok(written)
}
