use super::*;
use crate::core::display_mode::DisplayMode;

mod test_helpers {
    use super::*;

    pub(super) fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv)
            .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
    }
}

use test_helpers::parse_args;

#[test]
fn test_no_subcommand_defaults_to_chat() {
    let args = parse_args(&["charla"]);
    assert_eq!(args.command, None);
    assert_eq!(args.webhook_url, None);
    assert!(!args.light);
    assert_eq!(args.log, None);
    assert_eq!(args.config, None);
}

#[test]
fn test_global_flags_parse_before_and_after_subcommand() {
    let cases: [&[&str]; 2] = [
        &[
            "charla",
            "--webhook-url",
            "http://localhost:8080/hook",
            "--light",
            "--log",
            "chat.log",
            "chat",
        ],
        &[
            "charla",
            "chat",
            "-w",
            "http://localhost:8080/hook",
            "--light",
            "-l",
            "chat.log",
        ],
    ];

    for argv in cases {
        let args = parse_args(argv);
        assert_eq!(args.command, Some(Commands::Chat), "argv={argv:?}");
        assert_eq!(
            args.webhook_url.as_deref(),
            Some("http://localhost:8080/hook"),
            "argv={argv:?}"
        );
        assert!(args.light, "argv={argv:?}");
        assert_eq!(args.log, Some(PathBuf::from("chat.log")), "argv={argv:?}");
    }
}

#[test]
fn test_set_unset_and_config_subcommands() {
    let args = parse_args(&["charla", "set", "webhook-url", "https://example.com/hook"]);
    assert_eq!(
        args.command,
        Some(Commands::Set {
            key: "webhook-url".into(),
            value: "https://example.com/hook".into(),
        })
    );

    let args = parse_args(&["charla", "unset", "dark-mode"]);
    assert_eq!(
        args.command,
        Some(Commands::Unset {
            key: "dark-mode".into()
        })
    );

    let args = parse_args(&["charla", "--config", "/tmp/charla.toml", "config"]);
    assert_eq!(args.command, Some(Commands::Config));
    assert_eq!(args.config, Some(PathBuf::from("/tmp/charla.toml")));
}

#[test]
fn test_set_requires_a_value() {
    assert!(Args::try_parse_from(["charla", "set", "webhook-url"]).is_err());
}

#[test]
fn test_session_config_applies_overrides_without_touching_file_values() {
    let config = Config {
        webhook_url: Some("https://configured.example/hook".into()),
        dark_mode: Some(true),
    };
    let args = parse_args(&["charla", "-w", "http://127.0.0.1:9000/hook", "--light"]);

    let session = session_config(config.clone(), &args).unwrap();
    assert_eq!(session.webhook_url(), "http://127.0.0.1:9000/hook");
    assert_eq!(session.display_mode(), DisplayMode::LIGHT);
    assert_eq!(config.webhook_url(), "https://configured.example/hook");
}

#[test]
fn test_session_config_keeps_configured_values_without_flags() {
    let config = Config {
        webhook_url: Some("https://configured.example/hook".into()),
        dark_mode: Some(false),
    };
    let session = session_config(config.clone(), &parse_args(&["charla"])).unwrap();
    assert_eq!(session, config);
}

#[test]
fn test_session_config_rejects_invalid_webhook_override() {
    let args = parse_args(&["charla", "--webhook-url", "not a url"]);
    assert!(session_config(Config::default(), &args).is_err());

    let args = parse_args(&["charla", "--webhook-url", "ftp://example.com/hook"]);
    assert!(session_config(Config::default(), &args).is_err());
}

#[test]
fn test_config_helpers_use_explicit_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config, Config::default());

    config.set("dark-mode", "off").unwrap();
    save_config(&config, Some(path.as_path())).unwrap();

    let reloaded = load_config(Some(path.as_path())).unwrap();
    assert_eq!(reloaded.display_mode(), DisplayMode::LIGHT);
}
