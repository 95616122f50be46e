use std::path::PathBuf;

use cpscmz_leptos::render_document;
use leptos::prelude::*;
use tokio::fs;
use tracing::{debug, info};

use crate::config::{BuildConfig, BuildError};

/// Renders the page and writes it into the site root.
pub async fn export(options: LeptosOptions, config: &BuildConfig) -> Result<PathBuf, BuildError> {
    let path = config.index_path(&options);

    let document = render_document(options);
    debug!("rendered {} bytes", document.len());

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .await
            .map_err(|source| BuildError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
    }

    fs::write(&path, document)
        .await
        .map_err(|source| BuildError::Write {
            path: path.clone(),
            source,
        })?;

    info!("wrote {}", path.display());
    Ok(path)
}
