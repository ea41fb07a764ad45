//! Shared materials for archive integration tests.

use material_archive::{
    Archive, BookSubtype, JournalSubtype, Material, NewspaperSubtype,
};

/// Install a test subscriber once; `RUST_LOG` controls the output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn dune() -> Material {
    Material::book("Dune", 412, "Frank Herbert", BookSubtype::Novel)
}

pub fn brief_history() -> Material {
    Material::book(
        "A Brief History of Time",
        256,
        "Stephen Hawking",
        BookSubtype::History,
    )
}

pub fn nature() -> Material {
    Material::journal("Nature", 7, "Springer", JournalSubtype::Science)
}

pub fn guardian() -> Material {
    Material::newspaper("The Guardian", "Katharine Viner", NewspaperSubtype::Daily)
}

/// One material of each kind: book, journal, newspaper.
pub fn one_of_each() -> Archive {
    let mut archive = Archive::new();
    archive.add(dune()).unwrap();
    archive.add(nature()).unwrap();
    archive.add(guardian()).unwrap();
    archive
}

pub fn titles(archive: &Archive) -> Vec<String> {
    archive.iter().map(|m| m.title.clone()).collect()
}
