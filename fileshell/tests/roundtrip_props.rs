use std::fs;

use fileshell::crypto::Algorithm;
use proptest::prelude::*;
use tempfile::tempdir;

mod common;
use common::setup_shell;

fn digit_free_text() -> impl Strategy<Value = String> {
    "[a-zA-Z ,.!?\n]{0,200}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn compress_file_roundtrip(content in digit_free_text()) {
        let dir = tempdir().unwrap();
        let (work_dir, mut shell) = setup_shell(&dir);
        fs::write(work_dir.join("p.txt"), &content).unwrap();

        let compressed = shell.compress_file("p.txt").unwrap();
        let decompressed = shell.decompress_file(&compressed).unwrap();
        prop_assert_eq!(fs::read_to_string(work_dir.join(decompressed)).unwrap(), content);
    }

    #[test]
    fn encrypt_file_roundtrip(
        content in "[ -~\n]{1,200}",
        algorithm in prop::sample::select(Algorithm::ALL.to_vec()),
        shift in any::<i64>(),
        text_key in "[a-zA-Z]{1,12}",
        rails in 2usize..12,
    ) {
        let key = match algorithm {
            Algorithm::Caesar => shift.to_string(),
            Algorithm::Xor | Algorithm::Vigenere => text_key,
            Algorithm::RailFence => rails.to_string(),
        };
        let dir = tempdir().unwrap();
        let (work_dir, mut shell) = setup_shell(&dir);
        fs::write(work_dir.join("p.txt"), &content).unwrap();

        let encrypted = shell.encrypt_file(algorithm, "p.txt", &key).unwrap();
        let decrypted = shell.decrypt_file(algorithm, &encrypted, &key).unwrap();
        prop_assert_eq!(fs::read_to_string(work_dir.join(decrypted)).unwrap(), content);
    }
}
