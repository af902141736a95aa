use mediateca_catalog::{Catalog, ContainerError, KindFilter};
use mediateca_core::{MediaDetails, MediaFactory, MediaKind, Record};

fn book(title: &str, year: i32) -> Record {
    MediaFactory::create_book(title, year, "Author", "978-0", "Publisher", None).unwrap()
}

fn film(title: &str, year: i32) -> Record {
    MediaFactory::create_film(title, year, "Director", 100, "Drama", None).unwrap()
}

fn article(title: &str, year: i32) -> Record {
    MediaFactory::create_magazine_article(title, year, "Author", "Magazine", "10.1/a", None)
        .unwrap()
}

/// Two books, three films, one article, interleaved.
fn mixed_catalog() -> Catalog {
    let mut c = Catalog::new();
    c.add_record(film("Alien", 1979)).unwrap();
    c.add_record(book("Dune", 1965)).unwrap();
    c.add_record(film("Heat", 1995)).unwrap();
    c.add_record(article("Deep Learning", 2015)).unwrap();
    c.add_record(book("Emma", 1815)).unwrap();
    c.add_record(film("Ran", 1985)).unwrap();
    c
}

fn titles(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}

#[test]
fn adding_same_record_twice_fails() {
    let mut c = Catalog::new();
    let r = book("Dune", 1965);
    let id = c.add_record(r.clone()).unwrap();
    assert_eq!(c.add_record(r), Err(ContainerError::Duplicate(id)));
    assert_eq!(c.size(), 1);
}

#[test]
fn duplicate_with_equal_content_is_accepted() {
    let mut c = Catalog::new();
    let r = book("Dune", 1965);
    c.add_record(r.duplicate()).unwrap();
    c.add_record(r).unwrap();
    assert_eq!(c.size(), 2);
}

#[test]
fn blank_record_is_rejected() {
    let mut c = Catalog::new();
    let mut r = book("Dune", 1965);
    r.title.clear();
    assert_eq!(c.add_record(r), Err(ContainerError::InvalidItem));
    assert!(c.is_empty());
}

#[test]
fn removing_absent_record_fails() {
    let mut c = mixed_catalog();
    let stranger = book("Not here", 2000);
    assert_eq!(
        c.remove_record(stranger.id()),
        Err(ContainerError::NotFound(stranger.id()))
    );
    assert_eq!(c.size(), 6);
}

#[test]
fn remove_record_by_identity() {
    let mut c = mixed_catalog();
    let id = c.get_at(2).unwrap().id();
    let removed = c.remove_record(id).unwrap();
    assert_eq!(removed.title, "Heat");
    assert_eq!(c.size(), 5);
    assert!(c.get(id).is_none());
}

#[test]
fn out_of_range_index_fails() {
    let mut c = mixed_catalog();
    assert_eq!(
        c.get_at(6).unwrap_err(),
        ContainerError::IndexOutOfRange { index: 6, len: 6 }
    );
    assert!(matches!(
        c.remove_at(42),
        Err(ContainerError::IndexOutOfRange { index: 42, .. })
    ));
    assert_eq!(c.size(), 6);
}

#[test]
fn collect_films_only() {
    let c = mixed_catalog();
    let films = c.collect_by_kind(KindFilter::FilmsOnly);
    assert_eq!(titles(&films), ["Alien", "Heat", "Ran"]);
    assert!(films.iter().all(|r| r.kind() == MediaKind::Film));
}

#[test]
fn collect_other_kinds() {
    let c = mixed_catalog();
    assert_eq!(titles(&c.collect_by_kind(KindFilter::BooksOnly)), ["Dune", "Emma"]);
    assert_eq!(
        titles(&c.collect_by_kind(KindFilter::ArticlesOnly)),
        ["Deep Learning"]
    );
    assert_eq!(c.collect_by_kind(KindFilter::All).len(), 6);
}

#[test]
fn search_by_title_ignores_case() {
    let mut c = Catalog::new();
    c.add_record(book("The Lord of the Rings", 1954)).unwrap();
    c.add_record(book("1984", 1949)).unwrap();
    let found = c.search_by_title("lord");
    assert_eq!(titles(&found), ["The Lord of the Rings"]);
    assert_eq!(c.search_by_title("LORD").len(), 1);
    assert_eq!(c.search_by_title("").len(), 2);
}

#[test]
fn search_by_year_is_exact() {
    let c = mixed_catalog();
    assert_eq!(titles(&c.search_by_year(1995)), ["Heat"]);
    assert!(c.search_by_year(1996).is_empty());
}

#[test]
fn copy_is_independent() {
    let original = mixed_catalog();
    let mut copy = original.clone();

    for (o, c) in original.iter().zip(copy.iter()) {
        assert!(o.same_content(c));
        assert_ne!(o.id(), c.id());
    }

    copy.remove_at(0).unwrap();
    copy.add_record(book("Extra", 2001)).unwrap();
    assert_eq!(original.size(), 6);
    assert_eq!(original.get_at(0).unwrap().title, "Alien");

    let mut original = original;
    original.clear();
    assert_eq!(copy.size(), 6);
    assert_eq!(copy.get_at(5).unwrap().title, "Extra");
}

#[test]
fn update_keeps_identity_and_position() {
    let mut c = mixed_catalog();
    let id = c.get_at(1).unwrap().id();
    let replacement = book("Dune Messiah", 1969);
    let updated = c.update_at(1, replacement).unwrap();
    assert_eq!(updated, id);
    let r = c.get_at(1).unwrap();
    assert_eq!(r.id(), id);
    assert_eq!(r.title, "Dune Messiah");
    assert_eq!(r.year, 1969);
}

#[test]
fn update_can_change_kind() {
    let mut c = mixed_catalog();
    c.update_at(0, book("Alien: The Novel", 1979)).unwrap();
    assert_eq!(c.get_at(0).unwrap().kind(), MediaKind::Book);
    assert_eq!(c.collect_by_kind(KindFilter::FilmsOnly).len(), 2);
}

#[test]
fn update_rejects_bad_index_and_blank() {
    let mut c = mixed_catalog();
    assert!(matches!(
        c.update_at(9, book("X", 2000)),
        Err(ContainerError::IndexOutOfRange { .. })
    ));
    let mut blank = book("X", 2000);
    blank.year = 0;
    assert_eq!(c.update_at(0, blank), Err(ContainerError::InvalidItem));
    assert_eq!(c.get_at(0).unwrap().title, "Alien");
}

/// A factory-built film edited into values the factory would refuse.
fn tampered_film() -> Record {
    let mut r = film("Alien", 1979);
    r.year = 5000;
    if let MediaDetails::Film(f) = &mut r.details {
        f.director.clear();
        f.duration = 0;
    }
    r
}

#[test]
fn edited_record_with_invalid_fields_is_rejected() {
    let mut c = Catalog::new();
    assert_eq!(c.add_record(tampered_film()), Err(ContainerError::InvalidItem));
    assert!(c.is_empty());

    let mut out_of_range = book("Dune", 1965);
    out_of_range.year = 2101;
    assert_eq!(c.add_record(out_of_range), Err(ContainerError::InvalidItem));
}

#[test]
fn update_rejects_invalid_variant_fields() {
    let mut c = mixed_catalog();
    assert_eq!(c.update_at(0, tampered_film()), Err(ContainerError::InvalidItem));
    let stored = c.get_at(0).unwrap();
    assert_eq!(stored.year, 1979);
    assert_eq!(stored.as_film().unwrap().director, "Director");
}

#[test]
fn replace_with_swaps_content() {
    let mut c = mixed_catalog();
    let mut other = Catalog::new();
    other.add_record(book("Only", 2000)).unwrap();
    c.replace_with(other);
    assert_eq!(c.size(), 1);
    assert_eq!(c.get_at(0).unwrap().title, "Only");
}

#[test]
fn position_tracks_removals() {
    let mut c = mixed_catalog();
    let id = c.get_at(3).unwrap().id();
    assert_eq!(c.position_of(id), Some(3));
    c.remove_at(0).unwrap();
    assert_eq!(c.position_of(id), Some(2));
}
