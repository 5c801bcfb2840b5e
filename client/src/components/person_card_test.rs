use super::*;

#[test]
fn orcid_href_builds_profile_link() {
    assert_eq!(orcid_href("0000-0002-1825-0097").as_deref(), Some("https://orcid.org/0000-0002-1825-0097"));
    assert_eq!(orcid_href("  "), None);
}
