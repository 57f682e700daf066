use design_patterns::{run_demo, DemoConfig, PatternError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn render(config: &DemoConfig) -> String {
    let mut out = Vec::new();
    run_demo(config, &mut out, |title: &str| format!("# {title}")).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_config_file_drives_demo() {
    let file = write_config(
        r#"
        color = false
        color_keys = ["BLUE", "circle"]

        [[orders]]
        product_id = "MUG-7"
        amount = 350.0

        [[payments]]
        method = "upi"
        amount = 0

        [[payments]]
        method = "card"
        amount = -20.5
        "#,
    );

    let config = DemoConfig::load(file.path()).unwrap();
    assert!(!config.color);

    let expected = "\
# Abstract factory
BLUE -> BLUE
circle -> (none)

# Facade
[MUG-7 @ 350] Order placed successfully 🎉

# Template method
Validating UPI ID
Debiting ₹0 via UPI
Sending payment receipt
------
Validating credit card details
Debiting ₹-20.5 from credit card
Sending payment receipt
";
    assert_eq!(render(&config), expected);
}

#[test]
fn test_malformed_config_file() {
    let file = write_config("orders = \"not a list\"");
    let err = DemoConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, PatternError::ConfigParse(_)));
}

#[test]
fn test_empty_config_file_runs_default_demo() {
    let file = write_config("");
    let config = DemoConfig::load(file.path()).unwrap();
    assert_eq!(render(&config), render(&DemoConfig::default()));
}
