#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use commodore::parsing;
    use commodore::Reader;

    fn commodore_files(dir: &Path) -> Vec<PathBuf> {
        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("commodore")
            {
                files.push(path);
            }
        }

        files.sort();
        files
    }

    #[test]
    fn ensure_samples_parse() {
        let dir = Path::new("tests/samples/");

        assert!(dir.exists(), "samples directory missing");

        let files = commodore_files(dir);
        assert!(
            !files.is_empty(),
            "No .commodore files found in samples directory"
        );

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            match Reader::standard().parse_str(&content) {
                Ok(_) => {}
                Err(e) => {
                    println!("File {:?} failed to parse: {}", file, e);
                    failures.push(file.clone());
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse successfully, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let dir = Path::new("tests/broken/");

        assert!(dir.exists(), "broken directory missing");

        let files = commodore_files(dir);
        assert!(
            !files.is_empty(),
            "No .commodore files found in broken directory"
        );

        let mut unexpected_successes = Vec::new();

        for file in &files {
            match Reader::standard().parse_path(&file) {
                Ok(_) => {
                    println!("File {:?} unexpectedly parsed successfully", file);
                    unexpected_successes.push(file.clone());
                }
                Err(error) => {
                    assert!(
                        error.is_format(),
                        "File {:?} failed for the wrong reason: {}",
                        file,
                        error
                    );
                }
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should not to parse successfully, but {} files passed",
                unexpected_successes.len()
            );
        }
    }
}
