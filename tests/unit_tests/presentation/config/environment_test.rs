use lexaid::presentation::Environment;

#[test]
fn given_aliases_when_parsing_environment_then_they_map_to_known_values() {
    assert_eq!(Environment::try_from("Production".to_string()), Ok(Environment::Prod));
    assert_eq!(Environment::try_from(" development ".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_error_lists_choices() {
    let err = Environment::try_from("staging".to_string()).unwrap_err();

    assert!(err.contains("staging"));
    assert!(err.contains("local, test, or prod"));
}
