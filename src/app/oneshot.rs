use crate::core::resolver::Resolver;
use crate::core::response::DetailedResponse;
use crate::domain::ports::PackageTool;
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// Resolve once and render the detailed document.
pub fn resolve_report<T: PackageTool>(
    resolver: &Resolver<T>,
    input: &str,
    release: &str,
) -> Result<DetailedResponse> {
    let result = resolver.resolve(input, release)?;
    Ok(DetailedResponse::new(input, &result))
}

/// Write `report` as compact JSON to `output_file`, or to stdout.
pub fn write_report(report: &DetailedResponse, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            let json = serde_json::to_string(report)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, json)?;
            tracing::info!("Output saved to: {}", path.display());
        }
        None => write_report_to(report, &mut std::io::stdout().lock())?,
    }

    Ok(())
}

/// Write `report` as one line of compact JSON.
pub fn write_report_to<W: Write>(report: &DetailedResponse, out: &mut W) -> Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::response::PackageDetail;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_write_report_to_nested_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("foo.json");
        let report = DetailedResponse {
            input: "foo".to_string(),
            status: false,
            packages: None,
            error: Some("E: Unable to locate package foo".to_string()),
        };

        write_report(&report, Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            r#"{"input":"foo","status":false,"error":"E: Unable to locate package foo"}"#
        );
    }

    #[test]
    fn test_write_report_to_stdout_sink() {
        let mut packages = BTreeMap::new();
        packages.insert(
            "debianutils".to_string(),
            PackageDetail {
                package: "debianutils".to_string(),
                version: "4.8.6.1".to_string(),
                arch: "amd64".to_string(),
                release: "buster".to_string(),
                source: String::new(),
                source_version: String::new(),
                date: String::new(),
            },
        );
        let report = DetailedResponse {
            input: "debianutils".to_string(),
            status: true,
            packages: Some(packages),
            error: None,
        };

        let mut out = Vec::new();
        write_report_to(&report, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            concat!(
                r#"{"input":"debianutils","status":true,"packages":{"debianutils":"#,
                r#"{"package":"debianutils","version":"4.8.6.1","arch":"amd64","release":"buster","#,
                r#""source":"","source_version":"","date":""}}}"#,
                "\n"
            )
        );
    }
}
