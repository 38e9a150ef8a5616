//! Environment overrides live in their own test binary so the variables
//! never leak into the file-based config tests.

use std::io::Write;

use item_api::config::AppConfig;

#[test]
fn environment_overrides_file_and_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(b"[server]\nport = 9090\n\n[catalog]\nmax_page_size = 5\n")
        .unwrap();

    std::env::set_var("ITEM_API_SERVER__PORT", "7070");
    std::env::set_var("ITEM_API_CATALOG__MAX_PAGE_SIZE", "3");

    let result = AppConfig::load_from(file.path());

    std::env::remove_var("ITEM_API_SERVER__PORT");
    std::env::remove_var("ITEM_API_CATALOG__MAX_PAGE_SIZE");

    let config = result.unwrap();
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.catalog.max_page_size, 3);
    assert_eq!(config.server.host, "0.0.0.0");
}
