use std::fs;
use std::io;
use std::path::Path;

use fileshell::ErrorKind;
use fileshell::process::ProcessStatus;
use fileshell::shell::FileError;
use fileshell::storage::EntryKind;
use tempfile::tempdir;

mod common;
use common::{create_dummy_file, setup_shell};

/// 测试：touch -> write -> read 的完整生命周期。
#[test]
fn test_touch_write_read_cycle() {
    let dir = tempdir().unwrap();
    let (work_dir, mut shell) = setup_shell(&dir);

    shell.create_file("notes.txt").unwrap();
    assert!(work_dir.join("notes.txt").is_file());
    assert_eq!(shell.read_file("notes.txt").unwrap(), b"");

    shell.write_file("notes.txt", b"line one\nline two\n").unwrap();
    assert_eq!(
        fs::read_to_string(work_dir.join("notes.txt")).unwrap(),
        "line one\nline two\n"
    );
    assert_eq!(shell.read_file("notes.txt").unwrap(), b"line one\nline two\n");
}

/// 测试：重复创建与对不存在文件的读写都会失败，并留下 Failed 记录。
#[test]
fn test_create_and_write_errors() {
    let dir = tempdir().unwrap();
    let (_work_dir, mut shell) = setup_shell(&dir);

    shell.create_file("a.txt").unwrap();
    let err = shell.create_file("a.txt").unwrap_err();
    assert!(matches!(err, FileError::AlreadyExists(ref n) if n == "a.txt"));
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);

    let err = shell.write_file("missing.txt", b"x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = shell.read_file("missing.txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let statuses: Vec<_> = shell.processes().iter().map(|p| p.status).collect();
    assert_eq!(
        statuses,
        vec![
            ProcessStatus::Completed,
            ProcessStatus::Failed,
            ProcessStatus::Failed,
            ProcessStatus::Failed
        ]
    );
    assert_eq!(shell.processes()[0].description, "Create File: a.txt");
}

/// 测试：mkdir 之后列表中带有目录标记，且按名称排序。
#[test]
fn test_mkdir_and_list() {
    let dir = tempdir().unwrap();
    let (work_dir, mut shell) = setup_shell(&dir);

    shell.make_directory("docs").unwrap();
    create_dummy_file(&work_dir, "b.txt", "bb");
    create_dummy_file(&work_dir, "a.txt", "a");

    let entries = shell.list().unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "docs"]);
    assert_eq!(entries[2].kind, EntryKind::Directory);
    assert_eq!(entries[1].size, 2);

    let err = shell.make_directory("docs").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
}

/// 测试：list_recursive 只列出文件，名称使用 `/` 分隔。
#[test]
fn test_list_recursive() {
    let dir = tempdir().unwrap();
    let (work_dir, shell) = setup_shell(&dir);
    create_dummy_file(&work_dir, "top.txt", "t");
    create_dummy_file(&work_dir, "docs/deep/inner.txt", "i");

    let names: Vec<_> = shell
        .list_recursive()
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["docs/deep/inner.txt", "top.txt"]);
}

/// 测试：add 把外部文件复制进工作目录，重名时覆盖。
#[test]
fn test_add_file_copies_and_overwrites() {
    let dir = tempdir().unwrap();
    let (work_dir, mut shell) = setup_shell(&dir);
    let source = create_dummy_file(dir.path(), "report.txt", "version 1");

    assert_eq!(shell.add_file(&source).unwrap(), "report.txt");
    assert_eq!(
        fs::read_to_string(work_dir.join("report.txt")).unwrap(),
        "version 1"
    );

    fs::write(&source, "version 2").unwrap();
    shell.add_file(&source).unwrap();
    assert_eq!(
        fs::read_to_string(work_dir.join("report.txt")).unwrap(),
        "version 2"
    );
    assert_eq!(shell.processes()[0].description, format!("Add File: {}", source.display()));
}

/// 测试：add 的来源不存在或不是文件。
#[test]
fn test_add_file_errors() {
    let dir = tempdir().unwrap();
    let (_work_dir, mut shell) = setup_shell(&dir);

    let err = shell.add_file(&dir.path().join("nope.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = shell.add_file(dir.path()).unwrap_err();
    assert!(matches!(err, FileError::NotAFile(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

/// 测试：把工作目录里的文件再 add 一次不会清空它。
#[test]
fn test_add_file_from_inside_working_dir() {
    let dir = tempdir().unwrap();
    let (work_dir, mut shell) = setup_shell(&dir);
    let inside = create_dummy_file(&work_dir, "self.txt", "keep me");

    shell.add_file(&inside).unwrap();
    assert_eq!(fs::read_to_string(&inside).unwrap(), "keep me");
}

/// 测试：rm 删除文件与整个目录树。
#[test]
fn test_remove_file_and_directory() {
    let dir = tempdir().unwrap();
    let (work_dir, mut shell) = setup_shell(&dir);
    create_dummy_file(&work_dir, "a.txt", "a");
    create_dummy_file(&work_dir, "docs/b.txt", "b");

    let report = shell.remove("a.txt").unwrap();
    assert_eq!(report.kind, EntryKind::File);
    assert!(!work_dir.join("a.txt").exists());

    let report = shell.remove("docs").unwrap();
    assert_eq!(report.kind, EntryKind::Directory);
    assert!(!work_dir.join("docs").exists());

    let err = shell.remove("a.txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

/// 测试：rm 会释放被删除文件及目录内文件的内存分配。
#[test]
fn test_remove_releases_allocations() {
    let dir = tempdir().unwrap();
    let (work_dir, mut shell) = setup_shell(&dir);
    create_dummy_file(&work_dir, "a.txt", "a");
    create_dummy_file(&work_dir, "docs/b.txt", "b");
    create_dummy_file(&work_dir, "docs/deep/c.txt", "c");
    create_dummy_file(&work_dir, "docs2.txt", "d");

    shell.allocate("a.txt", 100).unwrap();
    shell.allocate("docs/b.txt", 200).unwrap();
    shell.allocate("./docs/deep/c.txt", 50).unwrap();
    shell.allocate("docs2.txt", 10).unwrap();
    assert_eq!(shell.memory_usage().used_kb, 360);

    let report = shell.remove("./a.txt").unwrap();
    assert_eq!(report.released, vec![("a.txt".to_string(), 100)]);

    let report = shell.remove("docs").unwrap();
    assert_eq!(
        report.released,
        vec![("docs/b.txt".to_string(), 200), ("docs/deep/c.txt".to_string(), 50)]
    );

    let usage = shell.memory_usage();
    assert_eq!(usage.used_kb, 10);
    assert!(shell.has_allocation("docs2.txt"));
}

/// 测试：文件已被外部删除时，rm 仍释放其分配，但报告 NotFound。
#[test]
fn test_remove_missing_file_still_releases_allocation() {
    let dir = tempdir().unwrap();
    let (work_dir, mut shell) = setup_shell(&dir);
    create_dummy_file(&work_dir, "gone.txt", "x");
    shell.allocate("gone.txt", 64).unwrap();

    fs::remove_file(work_dir.join("gone.txt")).unwrap();
    let err = shell.remove("gone.txt").unwrap_err();
    assert!(matches!(
        err,
        FileError::NotFoundReleased { ref name, released_kb: 64 } if name == "gone.txt"
    ));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!shell.has_allocation("gone.txt"));

    // 没有分配时仍是普通的 NotFound
    let err = shell.remove("gone.txt").unwrap_err();
    assert!(matches!(err, FileError::NotFound(_)));
    assert_eq!(shell.memory_usage().used_kb, 0);
}

/// 测试：名称不能逃出工作目录。
#[test]
fn test_names_outside_working_dir_are_rejected() {
    let dir = tempdir().unwrap();
    let (_work_dir, mut shell) = setup_shell(&dir);
    create_dummy_file(dir.path(), "outside.txt", "secret");

    let err = shell.read_file("../outside.txt").unwrap_err();
    assert!(matches!(err, FileError::Io(ref e) if e.kind() == io::ErrorKind::InvalidInput));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = shell.create_file("../new.txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!dir.path().join("new.txt").exists());
}

/// 测试：open 把绝对路径交给启动器；启动器失败时记录为 Failed。
#[test]
fn test_open_file_uses_launcher() {
    let dir = tempdir().unwrap();
    let (work_dir, mut shell) = setup_shell(&dir);
    create_dummy_file(&work_dir, "doc.txt", "d");

    let mut seen = None;
    let path = shell
        .open_file("doc.txt", |p: &Path| {
            seen = Some(p.to_path_buf());
            Ok(())
        })
        .unwrap();
    assert_eq!(path, work_dir.join("doc.txt"));
    assert_eq!(seen, Some(work_dir.join("doc.txt")));

    let err = shell
        .open_file("doc.txt", |_| Err(io::Error::other("no viewer")))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);

    let err = shell.open_file("missing.txt", |_| Ok(())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let statuses: Vec<_> = shell.processes().iter().map(|p| p.status).collect();
    assert_eq!(
        statuses,
        vec![ProcessStatus::Completed, ProcessStatus::Failed, ProcessStatus::Failed]
    );
}

/// 测试：write_file_with 只在目标存在时才调用内容生成器。
#[test]
fn test_write_file_with_is_lazy() {
    let dir = tempdir().unwrap();
    let (work_dir, mut shell) = setup_shell(&dir);

    let mut called = false;
    let err = shell
        .write_file_with("missing.txt", || {
            called = true;
            Ok(b"never".to_vec())
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!called);

    create_dummy_file(&work_dir, "present.txt", "old");
    shell
        .write_file_with("present.txt", || Ok(b"new".to_vec()))
        .unwrap();
    assert_eq!(fs::read_to_string(work_dir.join("present.txt")).unwrap(), "new");

    // 生成器失败时文件保持不变
    let err = shell
        .write_file_with("present.txt", || Err(io::Error::other("stdin closed")))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(fs::read_to_string(work_dir.join("present.txt")).unwrap(), "new");
}
