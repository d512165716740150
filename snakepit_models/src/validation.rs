//! Declarative field validation.
//!
//! A [`RuleTable`] maps every field of a form to an ordered list of [`Rule`]s.
//! Validating a form walks the table once and records the message of the
//! first failing rule of each field.

use std::{collections::BTreeMap, fmt::Debug};

use regex::Regex;
use thiserror::Error;

/// A named field of a form.
pub trait Field: Copy + Ord + Debug + Send + Sync + 'static {
    /// The name of the field as exposed to the presentation layer.
    fn name(self) -> &'static str;

    fn kind(self) -> FieldKind;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
}

/// The current value of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

impl FieldValue<'_> {
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Flag(_) => FieldKind::Flag,
        }
    }
}

/// A single validity predicate together with the message reported when it
/// does not hold.
///
/// Text values are trimmed before any rule is checked. Only [`Rule::Required`]
/// rejects an empty text, all other text rules accept it so that optional
/// fields can still carry constraints. On flags only [`Rule::Required`] is
/// meaningful and requires the flag to be set.
#[derive(Debug, Clone)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    MaxLength(usize, &'static str),
    Pattern(Regex, &'static str),
}

impl Rule {
    pub fn message(&self) -> &'static str {
        match *self {
            Self::Required(message)
            | Self::MinLength(_, message)
            | Self::MaxLength(_, message)
            | Self::Pattern(_, message) => message,
        }
    }

    pub fn applies_to(&self, kind: FieldKind) -> bool {
        match self {
            Self::Required(_) => true,
            Self::MinLength(..) | Self::MaxLength(..) | Self::Pattern(..) => kind == FieldKind::Text,
        }
    }

    /// Returns the message of this rule if `value` violates it.
    ///
    /// # Panics
    /// Panics if the rule cannot be applied to this kind of value.
    pub fn check(&self, value: FieldValue<'_>) -> Result<(), &'static str> {
        let ok = match (self, value) {
            (Self::Required(_), FieldValue::Flag(flag)) => flag,
            (Self::Required(_), FieldValue::Text(text)) => !text.trim().is_empty(),
            (Self::MinLength(min, _), FieldValue::Text(text)) => {
                let text = text.trim();
                text.is_empty() || text.chars().count() >= *min
            }
            (Self::MaxLength(max, _), FieldValue::Text(text)) => {
                text.trim().chars().count() <= *max
            }
            (Self::Pattern(regex, _), FieldValue::Text(text)) => {
                let text = text.trim();
                text.is_empty() || regex.is_match(text)
            }
            (rule, value) => panic!("Rule {rule:?} cannot be applied to {value:?}"),
        };

        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

/// The static mapping from field to its validity predicates.
#[derive(Debug, Clone)]
pub struct RuleTable<F> {
    fields: Vec<(F, Vec<Rule>)>,
}

impl<F: Field> RuleTable<F> {
    /// Creates a new rule table. Fields are validated in the given order.
    ///
    /// # Panics
    /// Panics if a field is listed twice or if a rule does not fit the kind of
    /// its field.
    pub fn new(fields: Vec<(F, Vec<Rule>)>) -> Self {
        for (i, (field, rules)) in fields.iter().enumerate() {
            assert!(
                fields[..i].iter().all(|(other, _)| other != field),
                "Field {field:?} is listed more than once"
            );
            for rule in rules {
                assert!(
                    rule.applies_to(field.kind()),
                    "Rule {rule:?} cannot be applied to the {:?} field {field:?}",
                    field.kind()
                );
            }
        }

        Self { fields }
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.iter().map(|(field, _)| *field)
    }

    /// Returns the message of the first rule of `field` violated by `value`.
    pub fn check_field(&self, field: F, value: FieldValue<'_>) -> Result<(), &'static str> {
        self.fields
            .iter()
            .filter(|(f, _)| *f == field)
            .flat_map(|(_, rules)| rules)
            .try_for_each(|rule| rule.check(value))
    }

    /// Validates every field of the table and collects one message per
    /// invalid field.
    pub fn validate<'a>(&self, value_of: impl Fn(F) -> FieldValue<'a>) -> ValidationErrors<F> {
        let errors = self
            .fields
            .iter()
            .filter_map(|(field, rules)| {
                let value = value_of(*field);
                rules
                    .iter()
                    .try_for_each(|rule| rule.check(value))
                    .err()
                    .map(|message| (*field, message))
            })
            .collect();

        ValidationErrors(errors)
    }

    /// Validates the fields in table order and stops at the first invalid one.
    pub fn first_error<'a>(
        &self,
        value_of: impl Fn(F) -> FieldValue<'a>,
    ) -> Result<(), ValidationError<F>> {
        self.fields.iter().try_for_each(|(field, rules)| {
            let value = value_of(*field);
            rules
                .iter()
                .try_for_each(|rule| rule.check(value))
                .map_err(|message| ValidationError {
                    field: *field,
                    message,
                })
        })
    }
}

/// A validation failure on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError<F: Field> {
    pub field: F,
    pub message: &'static str,
}

/// The error messages of all invalid fields of a form. Valid fields have no
/// entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F: Field>(BTreeMap<F, &'static str>);

impl<F: Field> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<F: Field> ValidationErrors<F> {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: F) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn set(&mut self, field: F, result: Result<(), &'static str>) {
        match result {
            Ok(()) => self.0.remove(&field),
            Err(message) => self.0.insert(field, message),
        };
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = ValidationError<F>> + '_ {
        self.0
            .iter()
            .map(|(&field, &message)| ValidationError { field, message })
    }
}

impl<F: Field> FromIterator<ValidationError<F>> for ValidationErrors<F> {
    fn from_iter<T: IntoIterator<Item = ValidationError<F>>>(iter: T) -> Self {
        Self(iter.into_iter().map(|e| (e.field, e.message)).collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum TestField {
        Title,
        Tag,
        Accept,
    }

    impl Field for TestField {
        fn name(self) -> &'static str {
            match self {
                Self::Title => "title",
                Self::Tag => "tag",
                Self::Accept => "accept",
            }
        }

        fn kind(self) -> FieldKind {
            match self {
                Self::Title | Self::Tag => FieldKind::Text,
                Self::Accept => FieldKind::Flag,
            }
        }
    }

    fn table() -> RuleTable<TestField> {
        RuleTable::new(vec![
            (
                TestField::Title,
                vec![
                    Rule::Required("title required"),
                    Rule::MinLength(3, "title too short"),
                    Rule::MaxLength(5, "title too long"),
                ],
            ),
            (
                TestField::Tag,
                vec![Rule::Pattern(Regex::new("^#").unwrap(), "tag needs hash")],
            ),
            (TestField::Accept, vec![Rule::Required("accept required")]),
        ])
    }

    #[test]
    fn rule_check() {
        for (rule, value, expected) in [
            (Rule::Required("r"), FieldValue::Text(""), Err("r")),
            (Rule::Required("r"), FieldValue::Text("   "), Err("r")),
            (Rule::Required("r"), FieldValue::Text(" x "), Ok(())),
            (Rule::Required("r"), FieldValue::Flag(false), Err("r")),
            (Rule::Required("r"), FieldValue::Flag(true), Ok(())),
            (Rule::MinLength(2, "m"), FieldValue::Text("a"), Err("m")),
            (Rule::MinLength(2, "m"), FieldValue::Text(" a "), Err("m")),
            (Rule::MinLength(2, "m"), FieldValue::Text("ab"), Ok(())),
            (Rule::MinLength(2, "m"), FieldValue::Text(""), Ok(())),
            (Rule::MinLength(2, "m"), FieldValue::Text("äö"), Ok(())),
            (Rule::MaxLength(2, "x"), FieldValue::Text("abc"), Err("x")),
            (Rule::MaxLength(2, "x"), FieldValue::Text(" ab "), Ok(())),
        ] {
            assert_eq!(rule.check(value), expected, "{rule:?} on {value:?}");
        }
    }

    #[test]
    fn validate_reports_first_failing_rule_per_field() {
        // Act
        let errors = table().validate(|field| match field {
            TestField::Title => FieldValue::Text("ab"),
            TestField::Tag => FieldValue::Text("rust"),
            TestField::Accept => FieldValue::Flag(true),
        });

        // Assert
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            [
                ValidationError {
                    field: TestField::Title,
                    message: "title too short"
                },
                ValidationError {
                    field: TestField::Tag,
                    message: "tag needs hash"
                },
            ]
        );
        assert!(!errors.is_valid());
        assert_eq!(errors.get(TestField::Accept), None);
    }

    #[test]
    fn validate_ok() {
        let errors = table().validate(|field| match field {
            TestField::Title => FieldValue::Text("abcd"),
            TestField::Tag => FieldValue::Text(""),
            TestField::Accept => FieldValue::Flag(true),
        });

        assert!(errors.is_valid());
    }

    #[test]
    fn first_error_stops_at_first_invalid_field() {
        let result = table().first_error(|field| match field {
            TestField::Title => FieldValue::Text(""),
            TestField::Tag => FieldValue::Text("nope"),
            TestField::Accept => FieldValue::Flag(false),
        });

        assert_eq!(
            result,
            Err(ValidationError {
                field: TestField::Title,
                message: "title required"
            })
        );
    }

    #[test]
    fn set_and_clear_single_field() {
        let mut errors = ValidationErrors::default();

        errors.set(TestField::Tag, Err("tag needs hash"));
        assert_eq!(errors.get(TestField::Tag), Some("tag needs hash"));

        errors.set(TestField::Tag, Ok(()));
        assert!(errors.is_valid());
    }

    #[test]
    #[should_panic = "cannot be applied to the Flag field Accept"]
    fn malformed_table() {
        RuleTable::new(vec![(
            TestField::Accept,
            vec![Rule::MinLength(1, "unreachable")],
        )]);
    }

    #[test]
    #[should_panic = "listed more than once"]
    fn duplicate_field() {
        RuleTable::new(vec![
            (TestField::Tag, vec![]),
            (TestField::Tag, vec![Rule::Required("tag required")]),
        ]);
    }

    #[test]
    #[should_panic = "cannot be applied to"]
    fn text_rule_on_flag_value() {
        let _ = Rule::Pattern(Regex::new(".").unwrap(), "p").check(FieldValue::Flag(true));
    }
}
