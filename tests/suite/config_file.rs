//! Site construction from a config file on disk.

use sitenav_config::SiteConfig;
use sitenav_core::Site;
use sitenav_types::{Locale, ThemeMode, Viewport};

const CONFIG: &str = r#"
[app]
theme = "light"
locale = "de"
brand = "Acme Consulting"

[nav]
breakpoint_px = 1200

[[nav.links]]
href = "/"
label = "Home"
label_de = "Start"

[[nav.links]]
href = "/work"
label = "Work"
label_de = "Projekte"
"#;

fn load() -> SiteConfig {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, CONFIG).expect("write config");
    SiteConfig::load_from(&path).expect("config parses")
}

#[test]
fn config_drives_initial_document() {
    let config = load();
    let site = Site::build(&config, Viewport::new(1100, 800)).expect("site");
    let h = site.handles();

    assert_eq!(site.theme_mode(), ThemeMode::Light);
    assert_eq!(site.locale(), Locale::De);
    assert_eq!(site.brand(), "Acme Consulting");
    assert_eq!(h.panel_links.len(), 2);
    assert_eq!(site.doc().text(h.panel_links[1]), "Projekte");
    assert_eq!(site.doc().attribute(h.toggle, "aria-label"), Some("Menü öffnen"));
    // 1100 px is still narrow with a 1200 px breakpoint.
    assert!(!site.is_wide());
}

#[test]
fn custom_breakpoint_controls_forced_close() {
    let config = load();
    let mut site = Site::build(&config, Viewport::new(1100, 800)).expect("site");
    let toggle = site.handles().toggle;
    site.click(toggle);

    site.resize(Viewport::new(1150, 800));
    assert!(site.nav().is_open());
    site.resize(Viewport::new(1300, 800));
    assert!(!site.nav().is_open());
}

#[test]
fn env_overrides_apply_on_top_of_file() {
    let config = load().with_env_overrides(|key| {
        (key == sitenav_config::ENV_LOCALE).then(|| "en".to_string())
    });
    let site = Site::build(&config, Viewport::new(390, 844)).expect("site");
    assert_eq!(site.locale(), Locale::En);
    assert_eq!(site.doc().text(site.handles().panel_links[1]), "Work");
}
