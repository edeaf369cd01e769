/// Default capacity of the allocation ledger, in KB.
pub const DEFAULT_TOTAL_MEMORY_KB: u64 = 1024;

/// Configuration file looked up in the working directory when no explicit
/// path is given.
pub const CONFIG_FILE_NAME: &str = "fileshell.json";

// --- 输出文件命名标记 ---
/// Suffix appended to the base name of a compressed file.
pub const COMPRESSED_SUFFIX: &str = "_compressed.txt";

/// Suffix appended to the base name of a decompressed file.
pub const DECOMPRESSED_SUFFIX: &str = "_decompressed.txt";

/// Extension of an encrypted file. The full suffix is `_<algorithm>.enc`.
pub const ENCRYPTED_EXTENSION: &str = ".enc";

/// Suffix appended to the base name of a decrypted file.
pub const DECRYPTED_SUFFIX: &str = ".dec.txt";

/// Line that terminates interactive `write` input.
pub const WRITE_TERMINATOR: &str = "EOF";
