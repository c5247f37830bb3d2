#![forbid(unsafe_code)]

//! Folio demo binary.
//!
//! Loads a portfolio dataset from JSON and answers filter and slug queries
//! from the command line, printing the same card fields the web views show
//! (title, category, slug, truncated tags, description fallback).

mod cli;

use std::process;

use folio::FacetVocabulary;
use folio::prelude::*;

/// Tags shown per card before the "+N" overflow indicator.
const TAG_LIMIT: usize = 3;

fn main() {
    let opts = cli::Opts::parse();

    if let Ok(filter) = std::env::var("FOLIO_DEMO_LOG") {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(err) = run(&opts) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(opts: &cli::Opts) -> Result<()> {
    let data = load_portfolio(&opts.data)?;
    let section = &data.projects;
    tracing::debug!(items = section.items.len(), "dataset loaded");

    if opts.list_categories {
        print_vocabulary(&section.filters);
        return Ok(());
    }

    if let Some(slug) = &opts.slug {
        let record = find_by_slug(&section.items, slug)?;
        print_detail(record);
        return Ok(());
    }

    let mut state = FilterState::new();
    state.query = opts.query.clone().unwrap_or_default();
    for label in &opts.categories {
        state.categories.toggle(label);
    }

    let visible = state.apply(&section.items);
    println!("{} of {} projects", visible.len(), section.items.len());
    for record in visible {
        print_card(record);
    }
    Ok(())
}

fn print_vocabulary(filters: &FacetVocabulary) {
    println!("categories:");
    for label in filters.selectable_categories() {
        println!("  {label}");
    }
    println!("platforms:");
    for label in &filters.platforms {
        println!("  {label}");
    }
}

fn print_card(record: &ProjectRecord) {
    let (tags, overflow) = record.visible_tags(TAG_LIMIT);
    let mut tag_line = tags.join(", ");
    if overflow > 0 {
        tag_line.push_str(&format!(" +{overflow}"));
    }
    println!();
    println!("{}  [{}]", record.title, record.category);
    println!("  /projects/{}", record.effective_slug());
    if !tag_line.is_empty() {
        println!("  tags: {tag_line}");
    }
    println!("  {}", record.display_description());

    let gallery = GalleryState::new(&record.image);
    if !gallery.is_empty() {
        let dots = DotIndicator::new().format(&gallery);
        println!("  images: {} {}", gallery.len(), dots);
    }
}

fn print_detail(record: &ProjectRecord) {
    println!("{}", record.title);
    println!("category: {}", record.category);
    if let Some(platform) = &record.platform {
        println!("platform: {platform}");
    }
    if record.featured {
        println!("featured: yes");
    }
    if let Some(rating) = &record.rating {
        println!("rating: {rating}");
    }
    if let Some(date) = &record.date {
        println!("date: {date}");
    }
    println!("description: {}", record.display_description());
    if let Some(detailed) = &record.detailed_description {
        println!();
        println!("{detailed}");
    }
    if !record.objectives.is_empty() {
        println!();
        println!("objectives:");
        for objective in &record.objectives {
            println!("  - {objective}");
        }
    }
    if !record.technologies.is_empty() {
        println!();
        println!("technologies: {}", record.technologies.join(", "));
    }
    if let Some(client) = &record.client {
        if let Some(name) = &client.name {
            println!("client: {name}");
        }
        if let Some(feedback) = &client.feedback {
            println!("feedback: \"{feedback}\"");
        }
    }
    if let Some(url) = &record.live_url {
        println!("live: {url}");
    }

    let gallery = GalleryState::new(&record.image);
    if !gallery.is_empty() {
        println!();
        println!("images ({}):", gallery.len());
        for image in gallery.images() {
            println!("  {image}");
        }
    }
}
