use art_exhibition::{Artwork, ExhibitionService};

fn ids(artworks: &[&Artwork]) -> Vec<i32> {
    artworks.iter().map(|a| a.id).collect()
}

#[test]
fn test_default_gallery_contents() {
    let service = ExhibitionService::new();

    let modern = service.artworks_in_gallery(1);
    assert_eq!(ids(&modern), vec![101, 102]);
    assert_eq!(modern[0].title, "Sunset Dreams");
    assert_eq!(modern[1].title, "City Lights");

    let classic = service.artworks_in_gallery(2);
    assert_eq!(ids(&classic), vec![103]);
    assert_eq!(classic[0].title, "Nature Bliss");

    assert!(service.artworks_in_gallery(99).is_empty());
}

#[test]
fn test_default_artwork_lookup() {
    let service = ExhibitionService::new();

    let artwork = service.artwork_by_id(102).unwrap();
    assert_eq!(artwork.title, "City Lights");
    assert_eq!(artwork.artist, "R. Verma");
    assert_eq!(artwork.price, 22000.0);

    assert!(service.artwork_by_id(999).is_none());
}

#[test]
fn test_default_galleries() {
    let service = ExhibitionService::new();
    let names: Vec<&str> = service.galleries().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Modern Art Gallery", "Classic Art Gallery"]);
}

#[test]
fn test_added_artwork_is_found() {
    let mut service = ExhibitionService::empty();
    service.add_artwork(7, "Harbour", "M. Das", 5400.0);

    let expected = Artwork::new(7, "Harbour", "M. Das", 5400.0);
    assert_eq!(service.artwork_by_id(7), Some(&expected));
}

#[test]
fn test_first_inserted_artwork_stays_authoritative() {
    let mut service = ExhibitionService::empty();
    service.add_artwork(7, "Harbour", "M. Das", 5400.0);
    service.add_artwork(7, "Imposter", "Someone Else", 1.0);

    assert_eq!(service.artworks().len(), 2);
    assert_eq!(service.artwork_by_id(7).unwrap().title, "Harbour");
}

#[test]
fn test_gallery_without_links_is_empty() {
    let mut service = ExhibitionService::new();
    service.add_gallery(3, "Sculpture Hall");
    assert!(service.artworks_in_gallery(3).is_empty());
}

#[test]
fn test_link_with_missing_ids_changes_nothing() {
    let mut service = ExhibitionService::new();
    let before = service.clone();

    assert!(!service.add_artwork_to_gallery(99, 101));
    assert!(!service.add_artwork_to_gallery(1, 999));
    assert!(!service.add_artwork_to_gallery(99, 999));

    assert_eq!(service, before);
}

#[test]
fn test_insertion_order_is_preserved() {
    let mut service = ExhibitionService::empty();
    for id in [30, 10, 20] {
        service.add_gallery(id, format!("Gallery {}", id));
        service.add_artwork(id * 10, format!("Work {}", id), "Artist", 100.0);
    }

    let gallery_ids: Vec<i32> = service.galleries().iter().map(|g| g.id).collect();
    assert_eq!(gallery_ids, vec![30, 10, 20]);

    let artwork_ids: Vec<i32> = service.artworks().iter().map(|a| a.id).collect();
    assert_eq!(artwork_ids, vec![300, 100, 200]);
}

#[test]
fn test_listing_is_idempotent() {
    let service = ExhibitionService::new();
    assert_eq!(service.galleries(), service.galleries());
    assert_eq!(service.artworks(), service.artworks());
}

#[test]
fn test_link_order_follows_calls() {
    let mut service = ExhibitionService::new();
    service.add_gallery(3, "Mixed");
    service.add_artwork_to_gallery(3, 103);
    service.add_artwork_to_gallery(3, 101);

    assert_eq!(ids(&service.artworks_in_gallery(3)), vec![103, 101]);
    assert_eq!(
        service.gallery_by_id(3).unwrap().to_string(),
        "3 | Mixed (Artworks: 2)"
    );
}

#[test]
fn test_sample_artwork_display() {
    let service = ExhibitionService::new();
    assert_eq!(
        service.artwork_by_id(101).unwrap().to_string(),
        "101 | Sunset Dreams by A. Sharma | ₹15000.0"
    );
}
