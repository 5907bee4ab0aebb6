use selkit::typeahead::{find_prefix_match, match_input};

fn genres() -> Vec<String> {
    vec!["Action".into(), "Adventure".into(), "Comedy".into()]
}

#[test]
fn test_typeahead_first_match_wins() {
    assert_eq!(find_prefix_match('a', &genres()), Some(0));
}

#[test]
fn test_typeahead_later_match() {
    assert_eq!(find_prefix_match('c', &genres()), Some(2));
}

#[test]
fn test_typeahead_no_match() {
    assert_eq!(find_prefix_match('z', &genres()), None);
}

#[test]
fn test_typeahead_ignores_case() {
    assert_eq!(find_prefix_match('C', &genres()), Some(2));
    assert_eq!(find_prefix_match('a', &["action", "ADVENTURE"]), Some(0));
}

#[test]
fn test_typeahead_only_letters() {
    let options = ["1 Star", "2 Stars", " Spaced", "-dash"];
    assert_eq!(find_prefix_match('1', &options), None);
    assert_eq!(find_prefix_match(' ', &options), None);
    assert_eq!(find_prefix_match('-', &options), None);
}

#[test]
fn test_typeahead_empty_options() {
    let options: [&str; 0] = [];
    assert_eq!(find_prefix_match('a', &options), None);
}

#[test]
fn test_match_input_single_character_only() {
    assert_eq!(match_input("c", &genres()), Some(2));
    assert_eq!(match_input("co", &genres()), None);
    assert_eq!(match_input("", &genres()), None);
}
