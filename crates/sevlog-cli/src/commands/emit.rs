//! Emit commands
//!
//! Usage:
//!   sevlog emit <TAG> [VALUES]...
//!   sevlog emitf <TAG> <TEMPLATE> [ARGS]...
//!
//! A TAG spelled like a severity name (`debug`, `info`, `warning`, `error`,
//! `panic`, `fatal`, any case) goes through that severity's wrapper, so
//! `fatal` exits with status 1. Anything else, including `"FATAL ERROR"`,
//! is logged under the literal tag and never exits.

use clap::Args;
use sevlog_core::format::Joined;
use sevlog_core::{global, Severity};
use std::fmt::{self, Display};

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Severity name or custom tag
    pub tag: String,

    /// Values to concatenate
    pub values: Vec<String>,
}

#[derive(Debug, Args)]
pub struct EmitfArgs {
    /// Severity name or custom tag
    pub tag: String,

    /// Template with `{}` placeholders (`{{` and `}}` for literal braces)
    pub template: String,

    /// Values for the placeholders, in order
    pub args: Vec<String>,
}

/// Execute emit command
pub fn execute(args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let values: Vec<&dyn Display> = args.values.iter().map(|v| v as &dyn Display).collect();
    dispatch(&args.tag, format_args!("{}", Joined(&values)));
    Ok(())
}

/// Execute emitf command
pub fn execute_format(args: EmitfArgs) -> Result<(), Box<dyn std::error::Error>> {
    let message = render_template(&args.template, &args.args)?;
    dispatch(&args.tag, format_args!("{}", message));
    Ok(())
}

fn wrapper_severity(tag: &str) -> Option<Severity> {
    Severity::ALL
        .into_iter()
        .find(|s| tag.eq_ignore_ascii_case(&format!("{:?}", s)))
}

fn dispatch(tag: &str, args: fmt::Arguments<'_>) {
    let logger = global();
    match wrapper_severity(tag) {
        Some(Severity::Debug) => logger.debug(args),
        Some(Severity::Info) => logger.info(args),
        Some(Severity::Warning) => logger.warning(args),
        Some(Severity::Error) => logger.error(args),
        Some(Severity::Panic) => logger.panic(args),
        Some(Severity::Fatal) => logger.fatal(args),
        None => logger.tag(tag, args),
    }
}

/// Fill `{}` placeholders in order
fn render_template(template: &str, args: &[String]) -> Result<String, String> {
    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        match (c, next) {
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                out.push(c);
            }
            ('{', Some('}')) => {
                chars.next();
                let value = remaining
                    .next()
                    .ok_or_else(|| format!("template {:?} needs more arguments", template))?;
                out.push_str(value);
            }
            _ => out.push(c),
        }
    }

    if remaining.next().is_some() {
        return Err(format!(
            "template {:?} has fewer placeholders than arguments",
            template
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render_fills_in_order() {
        assert_eq!(
            render_template("{}={}", &strings(&["a", "1"])).unwrap(),
            "a=1"
        );
    }

    #[test]
    fn test_render_escaped_braces() {
        assert_eq!(
            render_template("{{{}}}", &strings(&["x"])).unwrap(),
            "{x}"
        );
    }

    #[test]
    fn test_render_argument_count_mismatch() {
        assert!(render_template("{} {}", &strings(&["a"])).is_err());
        assert!(render_template("{}", &strings(&["a", "b"])).is_err());
    }

    #[test]
    fn test_wrapper_severity_matches_names_only() {
        assert_eq!(wrapper_severity("FATAL"), Some(Severity::Fatal));
        assert_eq!(wrapper_severity("panic"), Some(Severity::Panic));
        assert_eq!(wrapper_severity("FATAL ERROR"), None);
        assert_eq!(wrapper_severity("CUSTOM"), None);
    }
}
