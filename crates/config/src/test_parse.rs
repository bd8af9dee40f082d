#[cfg(test)]
mod tests {
    use std::{fs, time::Duration};

    use chordmatch::ChordDef;

    use crate::*;

    fn chord(s: &str) -> ChordDef {
        ChordDef::parse(s).unwrap()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = load_from_str("()", None).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.step, 50);
        assert_eq!(cfg.jump, 500);
        assert_eq!(cfg.window, Duration::from_millis(200));
        assert_eq!(cfg.jump_back_debounce, Duration::from_millis(500));
        assert_eq!(cfg.miss_policy, MissPolicy::Reset);
    }

    #[test]
    fn default_table_order() {
        let cfg = Config::default();
        let specs: Vec<String> = cfg.bindings.iter().map(|b| b.chord.to_string()).collect();
        assert_eq!(
            specs,
            ["h", "j", "k", "l", "g g", "shift+g", "ctrl+u", "ctrl+d", "' '"]
        );
        assert_eq!(cfg.bindings[4].chord, chord("g g"));
        assert_eq!(cfg.bindings[4].action, Action::Top);
        assert_eq!(cfg.bindings[5].action, Action::Bottom);
    }

    #[test]
    fn full_config_parses() {
        let ron = r#"(
            step: 40,
            jump: 400,
            window_ms: 300,
            jump_back_debounce_ms: 750,
            miss_policy: keep,
            bindings: [
                ("j", "Down", down),
                ("g g", "Top", top),
                ("ctrl+e", "Nudge", scroll(0, 10)),
                ("space", "Page", half_page_down),
            ],
        )"#;
        let cfg = load_from_str(ron, None).unwrap();
        assert_eq!(cfg.step, 40);
        assert_eq!(cfg.jump, 400);
        assert_eq!(cfg.window, Duration::from_millis(300));
        assert_eq!(cfg.jump_back_debounce, Duration::from_millis(750));
        assert_eq!(cfg.miss_policy, MissPolicy::Keep);
        assert_eq!(cfg.bindings.len(), 4);
        assert_eq!(cfg.bindings[2].action, Action::Scroll(0, 10));
        assert_eq!(cfg.bindings[2].desc, "Nudge");
        assert_eq!(cfg.bindings[3].chord, chord("space"));
    }

    #[test]
    fn unknown_field_fails() {
        let res = load_from_str("(stepp: 10)", None);
        assert!(matches!(res, Err(Error::Parse { .. })));
    }

    #[test]
    fn invalid_chord_is_validation_error() {
        let ron = r#"(bindings: [("hyper+j", "Down", down)])"#;
        match load_from_str(ron, None) {
            Err(Error::Validation { message, .. }) => assert!(message.contains("hyper+j")),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn duplicate_chord_fails() {
        let ron = r#"(bindings: [("j", "Down", down), ("J", "Again", up)])"#;
        match load_from_str(ron, None) {
            Err(Error::Validation { message, .. }) => assert!(message.contains("Duplicate")),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn non_positive_lengths_fail() {
        assert!(load_from_str("(step: 0)", None).is_err());
        assert!(load_from_str("(jump: -5)", None).is_err());
        assert!(load_from_str("(window_ms: 0)", None).is_err());
    }

    #[test]
    fn load_from_path_checks_extension_and_reads() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("config.txt");
        fs::write(&txt, "()").unwrap();
        assert!(matches!(load_from_path(&txt), Err(Error::Read { .. })));

        let good = dir.path().join("config.ron");
        fs::write(&good, "(step: 75)").unwrap();
        let cfg = load_from_path(&good).unwrap();
        assert_eq!(cfg.step, 75);
        assert_eq!(load(Some(&good)).unwrap().step, 75);

        let missing = dir.path().join("missing.ron");
        let err = load_from_path(&missing).unwrap_err();
        assert_eq!(err.path(), Some(missing.as_path()));
        assert!(err.pretty().starts_with("Read error at"));
    }

    #[test]
    fn bad_syntax_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.ron");
        fs::write(&bad, "(step: )").unwrap();
        let err = load_from_path(&bad).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        let shown = format!("Config parse error at {}: ", bad.display());
        assert!(err.pretty().starts_with(&shown), "{}", err.pretty());
    }

    #[test]
    fn parse_error_without_path() {
        let err = load_from_str("(step: )", None).unwrap_err();
        assert!(err.pretty().starts_with("Config parse error: "), "{}", err.pretty());
    }
}
