use super::*;

fn first_and_count(titles: &dyn TextProvider) -> (usize, String) {
    (titles.count(), titles.text_at(0).to_string())
}

#[test]
fn vec_of_strings_provides_titles() {
    let titles = vec!["Inbox".to_string(), "Sent".to_string()];
    assert_eq!(first_and_count(&titles), (2, "Inbox".to_string()));
    assert_eq!(titles.text_at(1), "Sent");
}

#[test]
fn arrays_and_slices_provide_titles() {
    let titles = ["One", "Two", "Three"];
    assert_eq!(TextProvider::count(&titles), 3);
    assert_eq!(titles.text_at(2), "Three");

    let slice: &[&str] = &titles[1..];
    assert_eq!(first_and_count(&slice), (2, "Two".to_string()));
}

#[test]
fn references_forward_to_provider() {
    let titles = vec!["a", "b"];
    let by_ref = &titles;
    assert_eq!(TextProvider::count(&by_ref), 2);
    assert_eq!(by_ref.text_at(1), "b");
}

#[test]
fn empty_provider_has_no_titles() {
    let titles: Vec<String> = vec![];
    assert_eq!(TextProvider::count(&titles), 0);
}
