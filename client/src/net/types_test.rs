use super::*;

#[test]
fn literature_entry_reads_server_payload() {
    let json = serde_json::json!({
        "ident": "0123456789abcdef0123456789abcdef",
        "doi": "10.1000/xyz",
        "tags": ["heart", "lung"],
        "submitter": "ACK",
        "approved": true,
        "title": "A paper",
        "authors": "A. Author,B. Author",
        "abstract": "Summary",
        "comments": "",
        "journal": "Annals",
        "year": "1978"
    });
    let entry: LiteratureEntry = serde_json::from_value(json).unwrap();
    assert_eq!(entry.tags, vec!["heart", "lung"]);
    assert_eq!(entry.summary, "Summary");
    assert!(entry.approved);
}

#[test]
fn literature_entry_tolerates_missing_fields() {
    let entry: LiteratureEntry = serde_json::from_value(serde_json::json!({ "ident": "x", "title": "t" })).unwrap();
    assert_eq!(entry.ident, "x");
    assert!(entry.tags.is_empty());
    assert!(!entry.approved);
}

#[test]
fn new_literature_uses_abstract_key() {
    let payload = NewLiterature { summary: "s".to_owned(), ..NewLiterature::default() };
    let json = serde_json::to_value(payload).unwrap();
    assert_eq!(json["abstract"], "s");
    assert!(json.get("summary").is_none());
}

#[test]
fn personel_response_defaults_to_empty_list() {
    let resp: PersonelListResponse = serde_json::from_value(serde_json::json!({ "status": "success" })).unwrap();
    assert!(resp.personel.is_empty());
}

#[test]
fn search_tags_splits_trims_and_lowercases() {
    assert_eq!(search_tags(" Heart, LUNG ,,"), vec!["heart", "lung"]);
    assert!(search_tags("   ").is_empty());
}
