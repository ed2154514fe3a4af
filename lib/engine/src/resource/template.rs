//! Validation and normalization of message templates.
//!
//! The rendering side only loads named definitions, so a template posted as a bare
//! fragment gets wrapped into a `define` block named after the template. A template
//! that already declares a definition is stored as is, once trimmed.

use super::Provisionable;
use crate::Error;
use provisioning_prelude::MessageTemplate;
use regex::Regex;
use std::sync::LazyLock;

pub const RESOURCE_TYPE: &str = "template";

// spacing is limited to tab, line feed, form feed, carriage return and space
static DEFINE_MARKER: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"\{\{[\t\n\f\r ]*define"));
const INDENT: &str = "  ";

fn has_define_marker(content: &str) -> Result<bool, Error> {
    let pattern = DEFINE_MARKER.as_ref().map_err(|err| {
        tracing::error!("unable to build define marker pattern: {:?}", err);
        Error::Internal(format!("failed to match regex: {err}"))
    })?;
    Ok(pattern.is_match(content))
}

fn wrap(name: &str, content: &str) -> String {
    let body = content
        .split('\n')
        .map(|line| format!("{INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{{{{ define \"{name}\" }}}}\n{body}\n{{{{ end }}}}")
}

fn normalize(name: &str, template: &str) -> Result<String, Error> {
    let content = template.trim();
    if has_define_marker(content)? {
        Ok(content.to_owned())
    } else {
        Ok(wrap(name, content))
    }
}

impl Provisionable for MessageTemplate {
    fn resource_type(&self) -> &'static str {
        RESOURCE_TYPE
    }

    fn resource_id(&self) -> &str {
        &self.name
    }

    fn validate(self) -> Result<Self, Error> {
        // only the empty string is rejected, whitespace goes through
        if self.name.is_empty() {
            return Err(Error::invalid("template must have a name"));
        }
        if self.template.is_empty() {
            return Err(Error::invalid("template must have content"));
        }
        let template = normalize(&self.name, &self.template)?;
        Ok(Self {
            name: self.name,
            template,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Provisionable, RESOURCE_TYPE};
    use crate::Error;
    use provisioning_prelude::MessageTemplate;

    fn validate(name: &str, template: &str) -> Result<String, Error> {
        MessageTemplate::new(name, template)
            .validate()
            .map(|found| found.template)
    }

    #[test]
    fn should_wrap_bare_content() {
        assert_eq!(
            validate("welcome", "Hello {{ .Alert }}").unwrap(),
            "{{ define \"welcome\" }}\n  Hello {{ .Alert }}\n{{ end }}"
        );
    }

    #[test]
    fn should_indent_every_line_including_blank_ones() {
        assert_eq!(
            validate("multi", "\n\nfirst\n\n  second\nthird\n\n").unwrap(),
            "{{ define \"multi\" }}\n  first\n  \n    second\n  third\n{{ end }}"
        );
    }

    #[test]
    fn should_only_split_on_line_feed() {
        assert_eq!(
            validate("crlf", "first\r\nsecond").unwrap(),
            "{{ define \"crlf\" }}\n  first\r\n  second\n{{ end }}"
        );
    }

    #[test]
    fn should_keep_defined_template_trimmed() {
        assert_eq!(
            validate("x", "{{ define \"x\" }}body{{ end }}").unwrap(),
            "{{ define \"x\" }}body{{ end }}"
        );
        assert_eq!(
            validate("x", "\n\t {{ define \"x\" }}body{{ end }} \n").unwrap(),
            "{{ define \"x\" }}body{{ end }}"
        );
    }

    #[test]
    fn should_detect_marker_with_any_spacing_and_position() {
        for input in [
            "{{define \"a\"}}a{{end}}",
            "{{   define \"a\" }}a{{ end }}",
            "{{\n\tdefine \"a\" }}a{{ end }}",
            "prefix {{ define \"a\" }}a{{ end }}",
        ] {
            assert_eq!(validate("other", input).unwrap(), input.trim());
        }
    }

    #[test]
    fn should_wrap_when_marker_spacing_is_not_ascii_blank() {
        for spacing in ["\u{a0}", "\u{0b}", "\u{2003}", "\u{85}"] {
            let input = format!("{{{{{spacing}define \"a\" }}}}a{{{{ end }}}}");
            assert_eq!(
                validate("n", &input).unwrap(),
                format!("{{{{ define \"n\" }}}}\n  {input}\n{{{{ end }}}}"),
                "spacing {spacing:?} should not count as a define marker"
            );
        }
    }

    #[test]
    fn should_cache_define_marker_pattern() {
        assert!(super::DEFINE_MARKER.is_ok());
        assert!(super::has_define_marker("{{\x0cdefine \"a\" }}").unwrap());
        assert!(super::has_define_marker("{{\r\n define \"a\" }}").unwrap());
        assert!(!super::has_define_marker("{{ end }}").unwrap());
    }

    #[test]
    fn should_not_check_defined_names_or_balance() {
        let input = "{{ define \"one\" }}1{{ end }}{{ define \"two\" }}2";
        assert_eq!(validate("three", input).unwrap(), input);
    }

    #[test]
    fn should_not_take_trim_marker_as_define() {
        assert_eq!(
            validate("trimmed", "{{- define \"a\" }}a{{ end }}").unwrap(),
            "{{ define \"trimmed\" }}\n  {{- define \"a\" }}a{{ end }}\n{{ end }}"
        );
    }

    #[test]
    fn should_be_idempotent_on_wrapped_content() {
        let first = validate("welcome", "Hello {{ .Alert }}\nBye").unwrap();
        let second = validate("welcome", &first).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn should_be_idempotent_on_defined_content() {
        let first = validate("x", "  {{ define \"x\" }}body{{ end }}  ").unwrap();
        let second = validate("x", &first).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn should_insert_name_verbatim() {
        assert_eq!(
            validate("with \"quotes\"", "a").unwrap(),
            "{{ define \"with \"quotes\"\" }}\n  a\n{{ end }}"
        );
    }

    #[test]
    fn should_fail_without_name() {
        for template in ["", "Hello", "{{ define \"x\" }}{{ end }}"] {
            let err = validate("", template).unwrap_err();
            assert!(matches!(err, Error::InvalidResource(_)));
            assert!(err.to_string().contains("name"));
        }
    }

    #[test]
    fn should_fail_without_content() {
        let err = validate("welcome", "").unwrap_err();
        assert!(matches!(err, Error::InvalidResource(_)));
        assert_eq!(err.to_string(), "template must have content");
    }

    #[test]
    fn should_accept_whitespace_only_values() {
        assert_eq!(
            validate("welcome", " \n\t ").unwrap(),
            "{{ define \"welcome\" }}\n  \n{{ end }}"
        );
        assert_eq!(
            validate(" ", "a").unwrap(),
            "{{ define \" \" }}\n  a\n{{ end }}"
        );
    }

    #[test]
    fn should_expose_identity() {
        let template = MessageTemplate::new("welcome", "");
        assert_eq!(template.resource_type(), RESOURCE_TYPE);
        assert_eq!(template.resource_type(), "template");
        assert_eq!(template.resource_id(), "welcome");
        assert_eq!(MessageTemplate::new("", "").resource_type(), "template");
        assert_eq!(MessageTemplate::new("", "").resource_id(), "");
    }

    #[test]
    fn should_keep_name_after_validation() {
        let found = MessageTemplate::new("welcome", "Hello").validate().unwrap();
        assert_eq!(found.name, "welcome");
        assert_eq!(found.resource_id(), "welcome");
    }
}
