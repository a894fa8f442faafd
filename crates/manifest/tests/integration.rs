//! Integration tests for manifest crate

#[cfg(test)]
mod tests {
    use std::fs;
    use sumcheck_hash::Hash;
    use sumcheck_manifest::*;
    use tempfile::tempdir;

    #[test]
    fn test_discovers_nested_manifests_in_name_order() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("b/deeper")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("b/deeper/md5sum.txt"), "").unwrap();
        fs::write(root.join("a/md5sum-photos.txt"), "").unwrap();
        fs::write(root.join("md5sum.txt"), "").unwrap();
        fs::write(root.join("md5sum.log"), "").unwrap();
        fs::write(root.join("MD5SUM.TXT"), "").unwrap();

        let found = discover_manifests(root, "md5sum*.txt").unwrap();
        let relative: Vec<String> = found
            .iter()
            .map(|m| {
                m.path()
                    .strip_prefix(std::path::absolute(root).unwrap())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();

        assert_eq!(
            relative,
            ["a/md5sum-photos.txt", "b/deeper/md5sum.txt", "md5sum.txt"]
        );
    }

    #[test]
    fn test_custom_pattern() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("release.md5"), "").unwrap();
        fs::write(temp.path().join("md5sum.txt"), "").unwrap();

        let found = discover_manifests(temp.path(), "*.md5").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].display_name(), "release.md5");
    }

    #[test]
    fn test_read_entries_from_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("md5sum.txt");
        fs::write(
            &path,
            "# generated\n\nd41d8cd98f00b204e9800998ecf8427e  empty.txt\nnot a valid line\n",
        )
        .unwrap();

        let manifest = ManifestFile::new(path);
        let entries = manifest
            .read_entries(&ManifestParser::new().unwrap())
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].expected, Hash::from_data(b""));
        assert_eq!(
            entries[0].resolve(manifest.base_dir()),
            temp.path().join("empty.txt")
        );
    }

    #[test]
    fn test_read_entries_tolerates_invalid_utf8() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("md5sum.txt");
        let mut raw = b"d41d8cd98f00b204e9800998ecf8427e  caf".to_vec();
        raw.push(0xE9);
        raw.extend_from_slice(b".txt\n");
        fs::write(&path, raw).unwrap();

        let entries = ManifestFile::new(path)
            .read_entries(&ManifestParser::new().unwrap())
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].file_name.starts_with("caf"));
    }

    #[test]
    fn test_unreadable_manifest_is_an_error() {
        let temp = tempdir().unwrap();
        let manifest = ManifestFile::new(temp.path().join("md5sum.txt"));
        assert!(manifest
            .read_entries(&ManifestParser::new().unwrap())
            .is_err());
    }
}
