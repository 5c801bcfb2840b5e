use super::*;

#[test]
fn citation_line_skips_blank_parts() {
    let entry = LiteratureEntry {
        authors: "A. C. Knapp".to_owned(),
        journal: " ".to_owned(),
        year: "1978".to_owned(),
        ..LiteratureEntry::default()
    };
    assert_eq!(citation_line(&entry), "A. C. Knapp · 1978");
    assert_eq!(citation_line(&LiteratureEntry::default()), "");
}

#[test]
fn doi_href_only_for_registered_prefix() {
    assert_eq!(doi_href(" 10.1000/xyz ").as_deref(), Some("https://doi.org/10.1000/xyz"));
    assert_eq!(doi_href("1"), None);
}

#[test]
fn tag_links_own_labels_and_encode_hrefs() {
    let tags = vec!["heart".to_owned(), "  ".to_owned(), "lymph node".to_owned()];
    let links = tag_links(&tags);
    drop(tags);
    assert_eq!(
        links,
        vec![
            ("heart".to_owned(), "/list?system=heart".to_owned()),
            ("lymph node".to_owned(), "/list?system=lymph+node".to_owned()),
        ]
    );
}
