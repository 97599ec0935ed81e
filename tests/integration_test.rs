use ssdb_config::codec::{self, Codec, ParseMode};
use ssdb_config::settings::{ConnectionSettings, ConnectionType};
use ssdb_config::{ConfigErr, ConnectionConfig};

#[macro_use]
extern crate lazy_static;

lazy_static! {
    static ref FULL: ConnectionConfig = ConnectionConfig::new()
        .with_host("192.168.1.20")
        .with_port(8889)
        .with_user("admin")
        .with_password("secret")
        .with_delimiter("\n");
    static ref CODECS: Vec<Codec> = vec![
        Codec::new(),
        Codec::new().escape(true),
        Codec::new().mode(ParseMode::Strict),
        Codec::new().mode(ParseMode::Strict).escape(true),
    ];
    static ref ESCAPED_CODECS: Vec<Codec> = vec![
        Codec::new().escape(true),
        Codec::new().mode(ParseMode::Strict).escape(true),
    ];
}

mod test {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(
            codec::serialize(&FULL),
            "-h 192.168.1.20 -p 8889 -u admin -a secret -d \n"
        );
        assert_eq!(FULL.to_string(), codec::serialize(&FULL));
    }

    #[test]
    fn test_round_trip_every_codec() {
        let partial = ConnectionConfig::new().with_host("10.1.1.1").with_port(1);
        for codec in CODECS.iter() {
            let parsed = codec.parse(&codec.serialize(&FULL)).unwrap();
            assert_eq!(parsed.config, *FULL);

            let parsed = codec.parse(&codec.serialize(&partial)).unwrap();
            assert_eq!(parsed.config.user, None);
            assert_eq!(parsed.config.password, None);
            assert_eq!(parsed.config, partial);
        }
    }

    #[test]
    fn test_empty_credentials_round_trip_escaped() {
        let configs = [
            FULL.clone().with_user("").with_password("pw"),
            FULL.clone().with_user("admin").with_password(""),
            FULL.clone().with_user("").with_password(""),
        ];
        for codec in ESCAPED_CODECS.iter() {
            for config in configs.iter() {
                let parsed = codec.parse(&codec.serialize(config)).unwrap();
                assert_eq!(parsed.config, *config);
                assert!(parsed.rest.is_empty());
                assert!(parsed.diagnostics.is_empty());
            }
        }
    }

    #[test]
    fn test_parse_then_serialize() {
        let line = "-h 10.0.0.1 -p 9999 -u root -a pw -d ;";
        assert_eq!(codec::serialize(&codec::parse(line).config), line);
    }

    #[test]
    fn test_shutdown_is_not_serialized() {
        let mut config = FULL.clone();
        config.shutdown = true;
        let parsed = codec::parse(&codec::serialize(&config));
        assert!(!parsed.config.shutdown);
    }

    #[test]
    fn test_copy_does_not_touch_original() {
        let mut copy = FULL.clone();
        copy.host.clear();
        copy.user = Some("guest".to_string());
        copy.password.take();
        assert_eq!(FULL.host, "192.168.1.20");
        assert_eq!(FULL.user.as_deref(), Some("admin"));
        assert_eq!(FULL.password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_command_after_options() {
        let parsed = codec::parse("-h 1.2.3.4 -a pw get foo");
        assert_eq!(parsed.config.password.as_deref(), Some("pw"));
        assert_eq!(parsed.consumed, 4);
        assert_eq!(parsed.rest, vec!["get", "foo"]);
    }

    #[test]
    fn test_unknown_option_keeps_earlier_ones() {
        let parsed = codec::parse("-h 1.2.3.4 -x oops -p 7777");
        assert_eq!(parsed.config.host, "1.2.3.4");
        assert_eq!(parsed.config.port, 8888);

        let strict = Codec::new().mode(ParseMode::Strict);
        assert_eq!(
            strict.parse("-h 1.2.3.4 -x oops -p 7777"),
            Err(ConfigErr::UnrecognizedFlag("-x".to_string()))
        );
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = ConnectionSettings::new("prod", ConnectionType::from_name("ssdb"));
        let codec = Codec::new();
        settings.set_ssdb_config(&FULL, &codec).unwrap();
        assert_eq!(settings.get_command_line(), FULL.to_string());
        assert_eq!(settings.ssdb_config(&codec).unwrap().config, *FULL);
    }
}
