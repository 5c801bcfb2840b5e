use super::*;

#[test]
fn system_links_point_at_filtered_lists() {
    let links = system_links(&["heart".to_owned(), "lymph node".to_owned()]);
    assert_eq!(
        links[0],
        SystemLink {
            label: "Heart".to_owned(),
            literature_href: "/list?system=heart".to_owned(),
            personel_href: "/personel?system=heart".to_owned(),
        }
    );
    assert_eq!(links[1].literature_href, "/list?system=lymph+node");
}

#[test]
fn system_links_skip_blank_tags() {
    assert!(system_links(&[" ".to_owned(), String::new()]).is_empty());
}

#[test]
fn system_link_round_trips_through_route_table() {
    let table = crate::routes::RouteTable::standard().unwrap();
    for link in system_links(&["kidneys".to_owned()]) {
        let resolved = table.resolve_href(&link.literature_href);
        assert_eq!(resolved.page, crate::routes::Page::LiteratureList);
        assert_eq!(resolved.props.init_search.as_deref(), Some("kidneys"));
    }
}
