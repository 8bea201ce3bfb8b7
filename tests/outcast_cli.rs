use std::fs;
use std::process::Command;

fn outcast_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_outcast"))
}

#[test]
fn prints_one_line_per_noun_file() {
    let dir = tempfile::tempdir().unwrap();
    let synsets = dir.path().join("synsets.txt");
    let hypernyms = dir.path().join("hypernyms.txt");
    let list1 = dir.path().join("outcast1.txt");
    let list2 = dir.path().join("outcast2.txt");
    fs::write(&synsets, "0,a,x\n1,b,x\n2,c,x\n3,d,x\n").unwrap();
    fs::write(&hypernyms, "0,1\n0,3\n1,2\n3,2\n").unwrap();
    fs::write(&list1, "a b\nc\n").unwrap();
    fs::write(&list2, "  b c d ").unwrap();

    let out = outcast_bin().arg(&synsets).arg(&hypernyms).arg(&list1).arg(&list2).output().unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let expected = format!("{}: a\n{}: b\n", list1.display(), list2.display());
    assert_eq!(stdout, expected);
}

#[test]
fn invalid_input_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let synsets = dir.path().join("synsets.txt");
    let hypernyms = dir.path().join("hypernyms.txt");
    let list = dir.path().join("list.txt");
    fs::write(&synsets, "0,a,x\n1,b,x\n").unwrap();
    fs::write(&hypernyms, "0,1\n1,0\n").unwrap();
    fs::write(&list, "a b").unwrap();

    let out = outcast_bin().arg(&synsets).arg(&hypernyms).arg(&list).output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cycle"), "stderr: {stderr}");
}

#[test]
fn unknown_noun_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let synsets = dir.path().join("synsets.txt");
    let hypernyms = dir.path().join("hypernyms.txt");
    let list = dir.path().join("list.txt");
    fs::write(&synsets, "0,a,x\n1,b,x\n").unwrap();
    fs::write(&hypernyms, "0,1\n").unwrap();
    fs::write(&list, "a zebra").unwrap();

    let out = outcast_bin().arg(&synsets).arg(&hypernyms).arg(&list).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("zebra"));
}
