#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Files that only wire modules together
    fn is_wiring(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        walk(root, root, &mut found)?;
        Ok(found)
    }

    fn walk(root: &Path, dir: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                walk(root, &path, found)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let relative = path
                    .strip_prefix(root)
                    .map_err(|_strip| io::Error::other("entry outside walked root"))?;
                found.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(())
    }

    fn source_and_unit_files() -> (BTreeSet<String>, BTreeSet<String>) {
        let sources = rust_files(Path::new(SRC_DIR)).expect("Failed to walk source directory");
        let units = rust_files(Path::new(UNIT_DIR)).expect("Failed to walk unit test directory");
        assert!(!sources.is_empty(), "no sources found under {SRC_DIR}");
        (sources, units)
    }

    fn report(title: &str, lines: &[String]) -> String {
        format!("{title}:\n{}", lines.join("\n"))
    }

    // Tests every source module has a unit test file at the mirrored path
    // Verified by deleting a unit test file
    #[test]
    fn test_sources_have_unit_tests() {
        let (sources, units) = source_and_unit_files();

        let missing: Vec<String> = sources
            .iter()
            .filter(|path| !is_wiring(path) && !units.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit tests", &missing)
        );
    }

    // Tests unit test files do not outlive the module they cover
    // Verified by renaming a source module
    #[test]
    fn test_unit_tests_have_sources() {
        let (sources, units) = source_and_unit_files();

        let orphaned: Vec<String> = units
            .iter()
            .filter(|path| !is_wiring(path) && !sources.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit test files without a source module", &orphaned)
        );
    }

    // Tests each top-level source module is compiled into the unit test crate
    // Verified by removing a module declaration from the unit test root
    #[test]
    fn test_unit_root_declares_modules() {
        let (sources, _) = source_and_unit_files();
        let root = fs::read_to_string(Path::new(UNIT_DIR).join("main.rs"))
            .expect("Failed to read unit test root");

        let undeclared: Vec<String> = sources
            .iter()
            .filter_map(|path| path.split_once('/').map(|(module, _)| module.to_string()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter(|module| !root.contains(&format!("mod {module};")))
            .map(|module| format!("  - mod {module};"))
            .collect();

        assert!(
            undeclared.is_empty(),
            "{}",
            report("Modules missing from the unit test root", &undeclared)
        );
    }

    // Tests every test file outside module wiring declares at least one test
    // Verified by stripping the test attribute from a file
    #[test]
    fn test_test_files_contain_tests() {
        let files = rust_files(Path::new("tests")).expect("Failed to walk test directory");

        let empty: Vec<String> = files
            .iter()
            .filter(|path| !path.ends_with("main.rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without any #[test] function", &empty)
        );
    }
}
