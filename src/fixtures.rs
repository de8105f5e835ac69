#[cfg(test)]
pub mod test {
    use toml::Value;

    use crate::types::{OptionSpec, Values};

    /// `apple` (`-a`, default 1) and `banana` (`-B`, default 2).
    pub fn fruit_options() -> Vec<OptionSpec> {
        vec![
            OptionSpec::integer("apple", &["-a", "--apple"])
                .default_value(1)
                .help("How many apples."),
            OptionSpec::integer("banana", &["-B", "--banana"])
                .default_value(2)
                .help("How many bananas."),
        ]
    }

    /// Parsed integer values keyed by option name.
    pub fn parsed(pairs: &[(&str, i64)]) -> Values {
        pairs
            .iter()
            .map(|(name, v)| (name.to_string(), Some(Value::Integer(*v))))
            .collect()
    }

    #[test]
    fn fruit_defaults() {
        let options = fruit_options();
        assert_eq!(options[0].default(), Some(&Value::Integer(1)));
        assert_eq!(options[1].default(), Some(&Value::Integer(2)));
    }
}
