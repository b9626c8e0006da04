fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/table/default_latin.toml",
        include_str!("src/table/default_latin.toml"),
    );
    validate_toml(
        "src/table/default_cyrillic.toml",
        include_str!("src/table/default_cyrillic.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    let value = match toml::from_str::<toml::Table>(content) {
        Ok(v) => v,
        Err(_) => panic!("{path} contains invalid TOML"),
    };
    for (key, expected) in [("lead", 19), ("vowel", 21), ("trail", 28)] {
        let len = value.get(key).and_then(|v| v.as_array()).map(|a| a.len());
        if len != Some(expected) {
            panic!("{path}: `{key}` must be an array of {expected} strings");
        }
    }
}
