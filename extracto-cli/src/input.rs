//! Statement text sources: plain-text dumps or PDFs run through `pdftotext`.

use anyhow::{Context, Result, bail};
use extracto_ingest::split_pages;
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Read every input in argument order and return their pages, in order.
pub fn read_pages(inputs: &[impl AsRef<Path>]) -> Result<Vec<String>> {
    let mut pages = Vec::new();

    for input in inputs {
        let path = input.as_ref();
        if !path.exists() {
            bail!("input not found: {}", path.display());
        }

        let text = if is_pdf(path) {
            run_pdftotext(path)?
        } else {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        };

        let before = pages.len();
        pages.extend(split_pages(&text).into_iter().map(str::to_string));
        debug!(
            path = %path.display(),
            bytes = text.len(),
            pages = pages.len() - before,
            "read statement text"
        );
    }

    Ok(pages)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn run_pdftotext(path: &Path) -> Result<String> {
    which::which("pdftotext")
        .context("pdftotext not installed (install poppler-utils, or pass a text dump)")?;

    let output = Command::new("pdftotext")
        .arg("-layout")
        .arg(path)
        .arg("-")
        .output()
        .with_context(|| format!("running pdftotext on {}", path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "pdftotext failed (exit {}): {}",
            output.status.code().unwrap_or(-1),
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
