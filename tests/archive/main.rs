//! Integration tests for the archive API.

mod fixtures;

use fixtures::{brief_history, dune, guardian, init_tracing, nature, one_of_each, titles};
use material_archive::{
    filter_by_creator, update_material, Archive, ArchiveError, BookDetails, BookSubtype,
    JournalDetails, JournalSubtype, Material, MaterialDetails, MaterialType,
    NewspaperDetails, NewspaperSubtype, MAX_CAPACITY,
};

#[test]
fn duplicate_title_of_other_kind_is_rejected() {
    init_tracing();
    let mut archive = Archive::new();
    archive.add(dune()).unwrap();

    let result = archive.add(Material::journal(
        "Dune",
        1,
        "Chilton Books",
        JournalSubtype::Literature,
    ));

    assert_eq!(result, Err(ArchiveError::DuplicateTitle("Dune".into())));
    assert_eq!(archive.len(), 1);
}

#[test]
fn full_archive_rejects_unique_titles() {
    init_tracing();
    let mut archive = Archive::new();
    for i in 0..MAX_CAPACITY {
        archive
            .add(Material::book(format!("Volume {i}"), 100, "Anon", BookSubtype::History))
            .unwrap();
    }
    assert_eq!(archive.len(), 100);

    let result = archive.add(dune());
    assert_eq!(
        result,
        Err(ArchiveError::CapacityExceeded { capacity: 100 })
    );
    assert_eq!(archive.len(), 100);
    assert!(archive.find("Dune").is_none());
}

#[test]
fn removing_middle_material_keeps_order() {
    init_tracing();
    let mut archive = one_of_each();

    let removed = archive.remove("Nature").unwrap();

    assert_eq!(removed, nature());
    assert_eq!(archive.len(), 2);
    assert_eq!(titles(&archive), vec!["Dune", "The Guardian"]);
    assert_eq!(archive.get(0), Some(&dune()));
    assert_eq!(archive.get(1), Some(&guardian()));
    assert_eq!(archive.get(2), None);
}

#[test]
fn removing_absent_title_changes_nothing() {
    let mut archive = one_of_each();
    let before = archive.clone();

    assert!(archive.remove("The Catcher in the Rye").is_none());
    assert_eq!(archive, before);
}

#[test]
fn creator_search_returns_only_matches() {
    init_tracing();
    let mut archive = Archive::new();
    archive.add(brief_history()).unwrap();
    archive.add(nature()).unwrap();

    let found = archive.filter_by_creator("Stephen Hawking").unwrap();

    assert_eq!(found, vec![brief_history()]);
}

#[test]
fn creator_search_none_is_distinct_from_empty() {
    let archive = one_of_each();

    assert_eq!(archive.filter_by_creator("Author2"), None);
    assert_eq!(filter_by_creator(None, Some("Frank Herbert")), None);
    assert_eq!(filter_by_creator(Some(&archive), None), None);
    assert_eq!(filter_by_creator(Some(&archive), Some("")), None);
    assert_eq!(
        filter_by_creator(Some(&archive), Some("Frank Herbert")),
        Some(vec![dune()])
    );
}

#[test]
fn filter_by_type_returns_snapshot() {
    let archive = one_of_each();

    let journals = archive.filter_by_type(MaterialType::Journal);
    assert_eq!(titles(&journals), vec!["Nature"]);
    assert_eq!(journals.find("Nature"), Some(&nature()));

    let mut books = Archive::new();
    books.add(dune()).unwrap();
    books.add(brief_history()).unwrap();
    assert!(books.filter_by_type(MaterialType::Newspaper).is_empty());
    assert_eq!(books.filter_by_type(MaterialType::Book), books);
    assert_eq!(archive.len(), 3);
}

#[test]
fn update_replaces_details_only() {
    init_tracing();
    let mut archive = one_of_each();

    let details = MaterialDetails::Journal(JournalDetails {
        issue: 8,
        publisher: "Springer Nature".into(),
        subtype: JournalSubtype::Art,
    });
    update_material(Some(&mut archive), Some("Nature"), details.clone()).unwrap();

    let updated = archive.find("Nature").unwrap();
    assert_eq!(updated.title, "Nature");
    assert_eq!(updated.kind, MaterialType::Journal);
    assert_eq!(updated.details, details);
    assert_eq!(archive.position("Nature"), Some(1));
}

#[test]
fn update_failures_are_distinct() {
    let mut archive = one_of_each();
    let before = archive.clone();
    let newspaper = MaterialDetails::Newspaper(NewspaperDetails {
        editor: "Someone Else".into(),
        subtype: NewspaperSubtype::Monthly,
    });

    assert_eq!(
        update_material(None, Some("Dune"), newspaper.clone()),
        Err(ArchiveError::InvalidArchive)
    );
    assert_eq!(
        update_material(Some(&mut archive), None, newspaper.clone()),
        Err(ArchiveError::InvalidTitle)
    );
    assert_eq!(
        archive.update("Missing", newspaper.clone()),
        Err(ArchiveError::NotFound("Missing".into()))
    );
    assert_eq!(
        archive.update("Dune", newspaper.clone()),
        Err(ArchiveError::InvalidBookSubtype)
    );
    assert_eq!(
        archive.update("Nature", newspaper.clone()),
        Err(ArchiveError::InvalidJournalSubtype)
    );
    assert_eq!(archive, before);

    archive.update("The Guardian", newspaper.clone()).unwrap();
    assert_eq!(archive.find("The Guardian").unwrap().details, newspaper);
}

#[test]
fn update_rejects_overlong_creator() {
    let mut archive = one_of_each();
    let details = MaterialDetails::Book(BookDetails {
        pages: 1,
        author: "a".repeat(50),
        subtype: BookSubtype::Biography,
    });

    assert_eq!(
        archive.update("Dune", details),
        Err(ArchiveError::FieldTooLong {
            field: "author",
            len: 50,
            max: 49
        })
    );
    assert_eq!(archive.find("Dune"), Some(&dune()));
}

#[test]
fn raw_ordinals_decode_with_specific_errors() {
    assert_eq!(MaterialType::try_from(3u8), Err(ArchiveError::InvalidMaterialType));
    assert_eq!(BookSubtype::try_from(2u8), Ok(BookSubtype::History));

    let json = r#"{"title":"Odd","kind":3,"details":{"Book":{"pages":1,"author":"x","subtype":0}}}"#;
    let err = serde_json::from_str::<Material>(json).unwrap_err();
    assert!(err.to_string().contains("invalid material type"));
}
