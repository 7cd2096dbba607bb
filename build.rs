fn main() {
    // Validate the embedded symbol inventory at compile time.
    validate_toml(
        "src/symbols/nst_sampa.toml",
        include_str!("src/symbols/nst_sampa.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
