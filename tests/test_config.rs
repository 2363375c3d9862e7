use std::io::Write;
use std::path::PathBuf;

use ward::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.root, PathBuf::from("."));
    assert_eq!(cfg.server_name, "ward");
}

#[test]
fn test_config_env_overrides() {
    // Single test so parallel tests never see a half-set environment
    unsafe {
        std::env::remove_var("WARD_CONFIG");
        std::env::set_var("LISTEN", "0.0.0.0:3000");
        std::env::set_var("WARD_ROOT", "/srv/www");
        std::env::set_var("WARD_SERVER_NAME", "test-server");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.server_name, "test-server");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "listen_addr: \"127.0.0.1:9000\"\nserver_name: from-yaml").unwrap();
    unsafe {
        std::env::remove_var("WARD_SERVER_NAME");
        std::env::set_var("WARD_CONFIG", file.path());
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.server_name, "from-yaml");

    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("WARD_ROOT");
        std::env::remove_var("WARD_CONFIG");
    }
}

#[test]
fn test_config_yaml_partial() {
    let cfg = Config::from_yaml_str("root: /var/www\n").unwrap();
    assert_eq!(cfg.root, PathBuf::from("/var/www"));
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server_name, "ward");
}

#[test]
fn test_config_yaml_invalid() {
    assert!(Config::from_yaml_str("root: [unterminated").is_err());
}

#[test]
fn test_config_missing_file() {
    assert!(Config::from_yaml_file("/nonexistent/ward.yaml").is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
    assert_eq!(cfg1.root, cfg2.root);
}
