use regex::Regex;
use std::str::FromStr;

use super::ValidationError;

/// A single validation rule attached to a form field.
///
/// Rules are declared either with typed variants or parsed from the
/// declaration strings used in form definitions, e.g. `"minNumber:1025"` or
/// `"matchRegexp:^.{1,64}$"`. Any other bare name refers to a custom
/// validator registered in the [`ValidatorRegistry`](super::ValidatorRegistry).
#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    IsNumber,
    MinNumber(f64),
    MaxNumber(f64),
    MatchRegexp(Regex),
    Custom(String),
}

impl Rule {
    pub fn match_regexp(pattern: &str) -> Result<Self, ValidationError> {
        Regex::new(pattern)
            .map(Self::MatchRegexp)
            .map_err(|e| ValidationError::InvalidRule(format!("matchRegexp:{pattern} ({e})")))
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Declaration string of the rule
    pub fn name(&self) -> String {
        match self {
            Self::Required => "required".to_string(),
            Self::IsNumber => "isNumber".to_string(),
            Self::MinNumber(min) => format!("minNumber:{min}"),
            Self::MaxNumber(max) => format!("maxNumber:{max}"),
            Self::MatchRegexp(regex) => format!("matchRegexp:{}", regex.as_str()),
            Self::Custom(name) => name.clone(),
        }
    }

    /// Evaluate a built-in rule. Returns `None` for custom rules, which need
    /// the registry to resolve.
    ///
    /// All built-ins except `required` accept the empty string.
    pub fn check_builtin(&self, value: &str) -> Option<bool> {
        let passes = match self {
            Self::Required => !value.is_empty(),
            Self::Custom(_) => return None,
            _ if value.is_empty() => true,
            Self::IsNumber => is_number(value),
            Self::MinNumber(min) => parse_number(value).is_some_and(|n| n >= *min),
            Self::MaxNumber(max) => parse_number(value).is_some_and(|n| n <= *max),
            Self::MatchRegexp(regex) => regex.is_match(value),
        };
        Some(passes)
    }
}

impl FromStr for Rule {
    type Err = ValidationError;

    fn from_str(declaration: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidRule(declaration.to_string());

        match declaration.split_once(':') {
            None => match declaration {
                "" => Err(invalid()),
                "required" => Ok(Self::Required),
                "isNumber" => Ok(Self::IsNumber),
                "minNumber" | "maxNumber" | "matchRegexp" => Err(invalid()),
                name => Ok(Self::custom(name)),
            },
            Some(("minNumber", arg)) => parse_number(arg).map(Self::MinNumber).ok_or_else(invalid),
            Some(("maxNumber", arg)) => parse_number(arg).map(Self::MaxNumber).ok_or_else(invalid),
            Some(("matchRegexp", pattern)) => Self::match_regexp(pattern),
            Some(_) => Err(invalid()),
        }
    }
}

/// Optional minus sign followed by at least one ASCII digit
fn is_number(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Ordered rules of one field, each paired with the message reported when it
/// is the first rule to fail.
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    rules: Vec<(Rule, String)>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.rules.push((rule, message.into()));
        self
    }

    /// Build a rule list from `(declaration, message)` pairs.
    pub fn parse<'a, I>(declarations: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        declarations
            .into_iter()
            .try_fold(
                Self::new(),
                |rules, (declaration, message)| -> Result<Self, ValidationError> {
                    Ok(rules.rule(declaration.parse()?, message))
                },
            )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Rule, &str)> {
        self.rules
            .iter()
            .map(|(rule, message)| (rule, message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parsing {
        use super::*;

        #[test]
        fn parses_builtin_declarations() {
            assert!(matches!("required".parse::<Rule>(), Ok(Rule::Required)));
            assert!(matches!("isNumber".parse::<Rule>(), Ok(Rule::IsNumber)));
            assert!(matches!(
                "minNumber:1025".parse::<Rule>(),
                Ok(Rule::MinNumber(n)) if n == 1025.0
            ));
            assert!(matches!(
                "maxNumber:65535".parse::<Rule>(),
                Ok(Rule::MaxNumber(n)) if n == 65535.0
            ));
        }

        #[test]
        fn regexp_pattern_keeps_colons() {
            let rule: Rule = "matchRegexp:^a:b$".parse().unwrap();
            assert_eq!(rule.name(), "matchRegexp:^a:b$");
            assert_eq!(rule.check_builtin("a:b"), Some(true));
        }

        #[test]
        fn bare_unknown_names_are_custom_rules() {
            assert!(matches!(
                "isIPOrHostname".parse::<Rule>(),
                Ok(Rule::Custom(name)) if name == "isIPOrHostname"
            ));
        }

        #[test]
        fn rejects_malformed_declarations() {
            for declaration in [
                "",
                "minNumber",
                "minNumber:abc",
                "maxNumber:",
                "matchRegexp:(",
                "unknownRule:42",
            ] {
                assert!(
                    matches!(
                        declaration.parse::<Rule>(),
                        Err(ValidationError::InvalidRule(_))
                    ),
                    "{declaration} should be rejected"
                );
            }
        }

        #[test]
        fn names_round_trip_through_declarations() {
            for declaration in ["required", "isNumber", "minNumber:1025", "maxNumber:65535"] {
                let rule: Rule = declaration.parse().unwrap();
                assert_eq!(rule.name(), declaration);
            }
        }

        #[test]
        fn field_rules_keep_declared_order() {
            let rules = FieldRules::parse([
                ("required", "Port is required"),
                ("isNumber", "Must be a number"),
                ("minNumber:1025", "Must be greater than 1024"),
            ])
            .unwrap();

            let messages: Vec<&str> = rules.iter().map(|(_, message)| message).collect();
            assert_eq!(
                messages,
                ["Port is required", "Must be a number", "Must be greater than 1024"]
            );
        }

        #[test]
        fn field_rules_report_first_bad_declaration() {
            let result = FieldRules::parse([("required", "ok"), ("maxNumber:x", "bad")]);
            assert_eq!(
                result.unwrap_err(),
                ValidationError::InvalidRule("maxNumber:x".to_string())
            );
        }
    }

    mod builtins {
        use super::*;

        #[test]
        fn required_rejects_only_empty() {
            assert_eq!(Rule::Required.check_builtin(""), Some(false));
            assert_eq!(Rule::Required.check_builtin(" "), Some(true));
            assert_eq!(Rule::Required.check_builtin("x"), Some(true));
        }

        #[test]
        fn is_number_accepts_signed_integers() {
            assert_eq!(Rule::IsNumber.check_builtin("1025"), Some(true));
            assert_eq!(Rule::IsNumber.check_builtin("-3"), Some(true));
            assert_eq!(Rule::IsNumber.check_builtin("abc"), Some(false));
            assert_eq!(Rule::IsNumber.check_builtin("12.5"), Some(false));
            assert_eq!(Rule::IsNumber.check_builtin("-"), Some(false));
            assert_eq!(Rule::IsNumber.check_builtin("1e3"), Some(false));
        }

        #[test]
        fn number_bounds_are_inclusive() {
            let min = Rule::MinNumber(1025.0);
            let max = Rule::MaxNumber(65535.0);

            assert_eq!(min.check_builtin("1024"), Some(false));
            assert_eq!(min.check_builtin("1025"), Some(true));
            assert_eq!(max.check_builtin("65535"), Some(true));
            assert_eq!(max.check_builtin("65536"), Some(false));
            assert_eq!(min.check_builtin("abc"), Some(false));
        }

        #[test]
        fn non_required_builtins_accept_empty_values() {
            assert_eq!(Rule::IsNumber.check_builtin(""), Some(true));
            assert_eq!(Rule::MinNumber(1025.0).check_builtin(""), Some(true));
            assert_eq!(Rule::MaxNumber(1.0).check_builtin(""), Some(true));
            assert_eq!(
                Rule::match_regexp("^.{1,64}$").unwrap().check_builtin(""),
                Some(true)
            );
        }

        #[test]
        fn match_regexp_limits_length() {
            let rule = Rule::match_regexp("^.{1,64}$").unwrap();

            assert_eq!(rule.check_builtin(&"x".repeat(64)), Some(true));
            assert_eq!(rule.check_builtin(&"x".repeat(65)), Some(false));
        }

        #[test]
        fn custom_rules_need_the_registry() {
            assert_eq!(Rule::custom("isIP").check_builtin("10.0.0.1"), None);
        }
    }
}
