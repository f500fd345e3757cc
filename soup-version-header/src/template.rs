//! Strict named-field substitution for header templates.
//!
//! A template is plain text with `{field}` placeholders. Only the fields in
//! [`TemplateField`] are recognised; anything else between braces is an
//! error rather than being passed through. `{{` and `}}` produce literal
//! braces.

use std::fmt;

use crate::error::TemplateError;

/// The placeholders a header template may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateField {
    VersionMacros,
    VersionAttributes,
    MajorVersion,
    MinorVersion,
    MicroVersion,
}

impl TemplateField {
    pub const ALL: [TemplateField; 5] = [
        Self::VersionMacros,
        Self::VersionAttributes,
        Self::MajorVersion,
        Self::MinorVersion,
        Self::MicroVersion,
    ];

    /// The name as written between braces in a template.
    pub fn name(self) -> &'static str {
        match self {
            Self::VersionMacros => "version_macros",
            Self::VersionAttributes => "version_attributes",
            Self::MajorVersion => "major_version",
            Self::MinorVersion => "minor_version",
            Self::MicroVersion => "micro_version",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for TemplateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values for every [`TemplateField`].
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    pub version_macros: String,
    pub version_attributes: String,
    pub major_version: String,
    pub minor_version: String,
    pub micro_version: String,
}

impl FieldValues {
    pub fn get(&self, field: TemplateField) -> &str {
        match field {
            TemplateField::VersionMacros => &self.version_macros,
            TemplateField::VersionAttributes => &self.version_attributes,
            TemplateField::MajorVersion => &self.major_version,
            TemplateField::MinorVersion => &self.minor_version,
            TemplateField::MicroVersion => &self.micro_version,
        }
    }
}

/// Tracks 1-based line/column while walking the template.
#[derive(Clone, Copy)]
struct Position {
    line: usize,
    column: usize,
}

impl Position {
    fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

/// Substitute `values` into `template`.
pub fn render(template: &str, values: &FieldValues) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(
        template.len() + values.version_macros.len() + values.version_attributes.len(),
    );
    let mut pos = Position { line: 1, column: 1 };
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        let start = pos;
        pos.advance(c);
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                pos.advance('{');
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => {
                            pos.advance('}');
                            break;
                        }
                        Some('{') => {
                            return Err(TemplateError::UnbalancedBrace {
                                brace: '{',
                                line: start.line,
                                column: start.column,
                            });
                        }
                        Some(n) => {
                            pos.advance(n);
                            name.push(n);
                        }
                        None => {
                            return Err(TemplateError::Unterminated {
                                line: start.line,
                                column: start.column,
                            });
                        }
                    }
                }
                let field = TemplateField::from_name(&name).ok_or_else(|| {
                    TemplateError::UnknownPlaceholder {
                        name,
                        line: start.line,
                        column: start.column,
                    }
                })?;
                out.push_str(values.get(field));
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                pos.advance('}');
                out.push('}');
            }
            '}' => {
                return Err(TemplateError::UnbalancedBrace {
                    brace: '}',
                    line: start.line,
                    column: start.column,
                });
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> FieldValues {
        FieldValues {
            version_macros: "MACROS\n".to_owned(),
            version_attributes: "ATTRS\n".to_owned(),
            major_version: "3".to_owned(),
            minor_version: "4".to_owned(),
            micro_version: "1".to_owned(),
        }
    }

    #[test]
    fn substitutes_every_field() {
        let out = render(
            "#define V {major_version}.{minor_version}.{micro_version}\n{version_macros}{version_attributes}",
            &values(),
        )
        .unwrap();
        assert_eq!(out, "#define V 3.4.1\nMACROS\nATTRS\n");
    }

    #[test]
    fn repeated_and_missing_fields() {
        let out = render("{major_version}{major_version}", &values()).unwrap();
        assert_eq!(out, "33");
        assert_eq!(render("no fields here", &values()).unwrap(), "no fields here");
    }

    #[test]
    fn doubled_braces_are_literal() {
        let out = render("struct s {{ int x; }};", &values()).unwrap();
        assert_eq!(out, "struct s { int x; };");
    }

    #[test]
    fn field_names_round_trip() {
        for field in TemplateField::ALL {
            assert_eq!(TemplateField::from_name(field.name()), Some(field));
        }
        assert_eq!(TemplateField::from_name("major"), None);
    }

    #[test]
    fn unknown_placeholder_is_rejected() {
        let err = render("line one\n  {major_verison}\n", &values()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnknownPlaceholder {
                name: "major_verison".to_owned(),
                line: 2,
                column: 3,
            }
        );
        assert!(err.to_string().contains("{major_verison}"));
    }

    #[test]
    fn format_specs_are_not_fields() {
        assert!(matches!(
            render("{major_version:>4}", &values()),
            Err(TemplateError::UnknownPlaceholder { .. })
        ));
        assert!(matches!(
            render("{}", &values()),
            Err(TemplateError::UnknownPlaceholder { .. })
        ));
    }

    #[test]
    fn stray_braces_are_rejected() {
        assert_eq!(
            render("int main() }", &values()),
            Err(TemplateError::UnbalancedBrace {
                brace: '}',
                line: 1,
                column: 12,
            })
        );
        assert!(matches!(
            render("{major_{version}", &values()),
            Err(TemplateError::UnbalancedBrace { brace: '{', .. })
        ));
        assert_eq!(
            render("ok\n{micro_version", &values()),
            Err(TemplateError::Unterminated { line: 2, column: 1 })
        );
    }
}
