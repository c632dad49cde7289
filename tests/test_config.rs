use slate::config::Config;
use std::path::Path;
use std::time::Duration;

#[test]
fn test_defaults_from_empty_yaml() {
    let cfg = Config::from_yaml("{}").unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.static_files.doc_root, Path::new("./public"));
    assert_eq!(cfg.static_files.read_timeout_secs, 5);
    assert_eq!(cfg.static_files.read_timeout(), Duration::from_secs(5));
}

#[test]
fn test_full_yaml_config() {
    let yaml = "\
server:
  listen_addr: \"0.0.0.0:3000\"
static_files:
  doc_root: \"/srv/www\"
  read_timeout_secs: 2
";
    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.static_files.doc_root, Path::new("/srv/www"));
    assert_eq!(cfg.static_files.read_timeout_secs, 2);
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let cfg = Config::from_yaml("server:\n  listen_addr: \"127.0.0.1:9000\"\n").unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.static_files.read_timeout_secs, 5);
}

#[test]
fn test_invalid_yaml_is_an_error() {
    assert!(Config::from_yaml("server: [not, a, map]").is_err());
}

#[test]
fn test_env_overrides() {
    // Single test touches the environment; keeps the suite race-free.
    unsafe {
        std::env::set_var("CONFIG", "/nonexistent/slate-config.yaml");
        std::env::set_var("LISTEN", "0.0.0.0:4000");
        std::env::set_var("DOC_ROOT", "/tmp/docs");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:4000");
    assert_eq!(cfg.static_files.doc_root, Path::new("/tmp/docs"));

    unsafe {
        std::env::remove_var("CONFIG");
        std::env::remove_var("LISTEN");
        std::env::remove_var("DOC_ROOT");
    }
}

#[test]
fn test_config_clone() {
    let cfg = Config::from_yaml("{}").unwrap();
    let copy = cfg.clone();
    assert_eq!(cfg.server.listen_addr, copy.server.listen_addr);
}
