use cfgpick::core::ConfigPaths;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Set(String),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[a-zA-Z0-9/._-]{0,16}".prop_map(Op::Set),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    // After every clear the current value is empty, and a non-empty prior
    // value always lands in the previous slot.
    #[test]
    fn clear_empties_and_archives(ops in proptest::collection::vec(op(), 0..32)) {
        let mut paths = ConfigPaths::new();
        for op in ops {
            match op {
                Op::Set(p) => paths.set_config_file(p),
                Op::Clear => {
                    let before = paths.config_file().to_string();
                    let prev_before = paths.previous_config_file().map(str::to_string);
                    paths.clear_paths();
                    prop_assert_eq!(paths.config_file(), "");
                    if before.is_empty() {
                        prop_assert_eq!(paths.previous_config_file(), prev_before.as_deref());
                    } else {
                        prop_assert_eq!(paths.previous_config_file(), Some(before.as_str()));
                    }
                }
            }
        }
    }

    // The suggestion is always the pure derivation of the two stored fields.
    #[test]
    fn suggestion_follows_the_two_fields(ops in proptest::collection::vec(op(), 0..32)) {
        let mut paths = ConfigPaths::new();
        for op in ops {
            match op {
                Op::Set(p) => paths.set_config_file(p),
                Op::Clear => paths.clear_paths(),
            }
            let suggestion = paths.suggested_file_picker_path();
            if !paths.config_file().is_empty() {
                prop_assert_eq!(suggestion, Some(paths.config_file()));
            } else {
                match paths.previous_config_file() {
                    Some(prev) if !prev.is_empty() => prop_assert_eq!(suggestion, Some(prev)),
                    _ => prop_assert_eq!(suggestion, None),
                }
            }
        }
    }
}
