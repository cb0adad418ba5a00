pub mod api;
pub mod args;
pub mod auth;
pub mod constants;
pub mod error;
pub mod export;
pub mod filter;
pub mod gallery;
pub mod group;
pub mod modal;
pub mod render;
pub mod source;
pub mod utils;

use anyhow::{bail, Result};
use api::SiteList;
use args::Args;
use constants::{CSV_FILENAME, PAGE_FILENAME};
use export::write_csv;
use gallery::Gallery;
use indicatif::ProgressBar;
use render::{render_page, Layout};
use source::{load_records, GraphSource};
use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
    time::Duration,
};
use time::OffsetDateTime;
use tracing::{error, info, warn};

pub async fn list_lists(args: &Args) -> Result<()> {
    if args.offline {
        bail!("--list-lists needs the list service, drop --offline");
    }
    let source = GraphSource::new(reqwest::Client::new(), args.graph_settings());
    for list in source.fetch_lists().await? {
        println!("{}", list_line(&list));
    }
    Ok(())
}

fn list_line(list: &SiteList) -> String {
    let title = list
        .display_name
        .as_deref()
        .or(list.name.as_deref())
        .unwrap_or_default();
    format!(
        "{}\t{}\t{}",
        list.id,
        title,
        list.web_url.as_deref().unwrap_or_default()
    )
}

pub async fn run(args: &Args) -> Result<()> {
    let client = reqwest::Client::new();
    let remote = (!args.offline).then(|| GraphSource::new(client.clone(), args.graph_settings()));

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Loading catalog");
    spinner.enable_steady_tick(Duration::from_millis(120));
    let loaded = load_records(&client, remote.as_ref(), &args.fallback).await;
    spinner.finish_and_clear();
    let loaded = loaded?;
    info!("Catalog source: {:?}", loaded.origin);

    let mut gallery = Gallery::from_records(&loaded.records);
    if gallery.grouping().is_empty() {
        warn!("Catalog is empty, the page will have no categories");
    }
    let filter = args.filter();
    if filter.is_active() {
        info!("Applying filter {:?}", filter);
    }
    gallery.set_filter(filter);
    if let Some(subject) = &args.open {
        if let Err(e) = gallery.open_first_subject_named(subject) {
            error!("Not opening popup: {}", e);
        }
    }

    let layout = match &args.template {
        Some(path) => Layout::from_file(path)?,
        None => Layout::default(),
    }
    .stamped(OffsetDateTime::now_utc())?;

    let output_dir = Path::new(&args.output_dir);
    let page_path = output_dir.join(PAGE_FILENAME);
    fs::write(&page_path, render_page(&gallery, &layout)?)?;
    info!(
        "Wrote {} ({} entries, {} subjects visible)",
        page_path.display(),
        gallery.grouping().entry_count(),
        gallery.visibility().visible_subjects()
    );

    if args.csv {
        let csv_path = output_dir.join(CSV_FILENAME);
        write_csv(gallery.grouping(), BufWriter::new(File::create(&csv_path)?))?;
        info!("Wrote {}", csv_path.display());
    }
    Ok(())
}
