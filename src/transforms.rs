use convert_case::{Case, Casing};

/// Error returned when a user-supplied transform name cannot be resolved
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown transform '{0}'. Run 'recase list' to see available transforms")]
pub struct UnknownTransform(pub String);

/// A case transform from the fixed registry
///
/// Variants are declared in display order. Each transform is a pure, total
/// string mapping: any input (including empty) yields exactly one output,
/// with no error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// "Hello World" -> "HELLO WORLD"
    Upper,
    /// "Hello World" -> "hello world"
    Lower,
    /// "Hello World" -> "Hello world"
    Capital,
    /// "hello-world" -> "Hello World"
    Start,
    /// "Hello World" -> "helloWorld"
    Camel,
    /// "Hello World" -> "hello-world"
    Kebab,
    /// "Hello World" -> "hello_world"
    Snake,
    /// "  Hello World  " -> "Hello World"
    Trim,
}

impl Transform {
    /// The full registry, order-significant for display
    pub const ALL: [Transform; 8] = [
        Transform::Upper,
        Transform::Lower,
        Transform::Capital,
        Transform::Start,
        Transform::Camel,
        Transform::Kebab,
        Transform::Snake,
        Transform::Trim,
    ];

    /// Display name shown in the action list
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Upper => "UpperCase",
            Transform::Lower => "LowerCase",
            Transform::Capital => "CapitalCase",
            Transform::Start => "StartCase",
            Transform::Camel => "CamelCase",
            Transform::Kebab => "KebabCase",
            Transform::Snake => "SnakeCase",
            Transform::Trim => "Trim",
        }
    }

    /// Apply this transform to the input
    ///
    /// Word-boundary splitting and casing rules are delegated to
    /// convert_case; Trim is plain whitespace trimming.
    pub fn apply(&self, input: &str) -> String {
        match self {
            Transform::Upper => input.to_case(Case::Upper),
            Transform::Lower => input.to_case(Case::Lower),
            Transform::Capital => input.to_case(Case::Sentence),
            Transform::Start => input.to_case(Case::Title),
            Transform::Camel => input.to_case(Case::Camel),
            Transform::Kebab => input.to_case(Case::Kebab),
            Transform::Snake => input.to_case(Case::Snake),
            Transform::Trim => input.trim().to_string(),
        }
    }

    /// Resolve a transform from a user-supplied name
    ///
    /// Matching ignores case and '-'/'_' separators, and accepts names with
    /// or without the "Case" suffix (e.g. "camel", "CamelCase", "kebab-case").
    pub fn from_name(name: &str) -> Result<Transform, UnknownTransform> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        let transform = match key.as_str() {
            "uppercase" | "upper" => Transform::Upper,
            "lowercase" | "lower" => Transform::Lower,
            "capitalcase" | "capital" => Transform::Capital,
            "startcase" | "start" => Transform::Start,
            "camelcase" | "camel" => Transform::Camel,
            "kebabcase" | "kebab" => Transform::Kebab,
            "snakecase" | "snake" => Transform::Snake,
            "trim" => Transform::Trim,
            _ => return Err(UnknownTransform(name.to_string())),
        };

        Ok(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_outputs() {
        let input = "Hello World";
        assert_eq!(Transform::Upper.apply(input), "HELLO WORLD");
        assert_eq!(Transform::Lower.apply(input), "hello world");
        assert_eq!(Transform::Capital.apply(input), "Hello world");
        assert_eq!(Transform::Start.apply(input), "Hello World");
        assert_eq!(Transform::Camel.apply(input), "helloWorld");
        assert_eq!(Transform::Kebab.apply(input), "hello-world");
        assert_eq!(Transform::Snake.apply(input), "hello_world");
        assert_eq!(Transform::Trim.apply("  Hello World  "), "Hello World");
    }

    #[test]
    fn test_apply_is_deterministic() {
        for transform in Transform::ALL {
            let first = transform.apply("Some Mixed INPUT-text");
            let second = transform.apply("Some Mixed INPUT-text");
            assert_eq!(first, second, "{} is not deterministic", transform.name());
        }
    }

    #[test]
    fn test_idempotent_transforms() {
        for (transform, input) in [
            (Transform::Upper, "Hello World"),
            (Transform::Lower, "Hello World"),
            (Transform::Trim, "  Hello World  "),
        ] {
            let once = transform.apply(input);
            let twice = transform.apply(&once);
            assert_eq!(once, twice, "{} is not idempotent", transform.name());
        }
    }

    #[test]
    fn test_empty_input_is_total() {
        for transform in Transform::ALL {
            // Must not panic, and empty maps to empty
            assert_eq!(transform.apply(""), "");
        }
    }

    #[test]
    fn test_word_boundary_splitting() {
        assert_eq!(Transform::Snake.apply("helloWorld"), "hello_world");
        assert_eq!(Transform::Camel.apply("hello_world"), "helloWorld");
        assert_eq!(Transform::Kebab.apply("HelloWorld"), "hello-world");
        assert_eq!(Transform::Start.apply("hello-world"), "Hello World");
    }

    #[test]
    fn test_registry_order() {
        let names: Vec<&str> = Transform::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            [
                "UpperCase",
                "LowerCase",
                "CapitalCase",
                "StartCase",
                "CamelCase",
                "KebabCase",
                "SnakeCase",
                "Trim"
            ]
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Transform::from_name("CamelCase"), Ok(Transform::Camel));
        assert_eq!(Transform::from_name("camel"), Ok(Transform::Camel));
        assert_eq!(Transform::from_name("kebab-case"), Ok(Transform::Kebab));
        assert_eq!(Transform::from_name("SNAKE_CASE"), Ok(Transform::Snake));
        assert_eq!(Transform::from_name("trim"), Ok(Transform::Trim));
        assert!(Transform::from_name("dotcase").is_err());
        assert!(Transform::from_name("").is_err());
    }
}
