use crate::core::{PackageTool, SourcePackage};

const SOURCE_MARKER: &str = "Package:";

/// Read the source package from `apt-cache showsrc` output. Only the first
/// line is considered; `version` is the binary package's own target
/// version, which is reported as the source version.
pub fn parse_source_output(output: &str, version: &str) -> SourcePackage {
    let first_line = output.split('\n').next().unwrap_or_default();

    match first_line.strip_prefix(SOURCE_MARKER).map(str::trim) {
        Some(name) if !name.is_empty() => SourcePackage {
            name: name.to_string(),
            version: version.to_string(),
        },
        _ => SourcePackage::none(),
    }
}

/// Query the source package of `package` under `release`. A failing query
/// means there is no source on record; it never aborts the resolution.
pub fn lookup_source<T: PackageTool + ?Sized>(
    tool: &T,
    release: &str,
    package: &str,
    version: &str,
) -> SourcePackage {
    match tool.show_source(release, package) {
        Ok(output) => {
            let source = parse_source_output(&output, version);
            if source.is_empty() {
                tracing::debug!("No source package on record for {}", package);
            }
            source
        }
        Err(e) => {
            tracing::warn!("Source lookup for {} failed: {}", package, e);
            SourcePackage::none()
        }
    }
}
