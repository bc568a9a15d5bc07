//! Result printing in the configured format

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// Print `value` as pretty JSON, or fall back to the `text` rendering
pub fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    println!("{}", render(format, value, text)?);
    Ok(())
}

/// Render without printing
pub fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Point {
        p: String,
    }

    #[test]
    fn test_render_text() {
        let point = Point { p: "0.5".into() };
        let out = render(OutputFormat::Text, &point, || format!("p = {}", point.p)).unwrap();
        assert_eq!(out, "p = 0.5");
    }

    #[test]
    fn test_render_json() {
        let point = Point { p: "0.5".into() };
        let out = render(OutputFormat::Json, &point, || unreachable!()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["p"], "0.5");
    }
}
