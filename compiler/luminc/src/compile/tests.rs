use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_program_is_luac() {
    assert_eq!(Luac::default().program(), "luac");
}

#[test]
fn missing_program_is_a_spawn_error() {
    let luac = Luac::new("lumin-test-no-such-compiler");
    let err = luac.compile("return 1").unwrap_err();
    assert!(matches!(err, CompileError::Spawn { .. }));
    assert!(err.to_string().starts_with("cannot run 'lumin-test-no-such-compiler'"));
}

#[cfg(unix)]
#[test]
fn fake_compilers_follow_the_luac_contract() {
    use std::os::unix::fs::PermissionsExt;

    fn script(dir: &std::path::Path, name: &str, body: &str) -> String {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }

    let dir = tempfile::tempdir().unwrap();

    // $1 = -s, $2 = -o, $3 = output, $4 = input
    let copy = script(dir.path(), "copy", r#"[ "$1" = "-s" ] && [ "$2" = "-o" ] && cat "$4" > "$3""#);
    let bytes = Luac::new(copy).compile("return 1").unwrap();
    assert_eq!(bytes, b"return 1");

    let failing = script(dir.path(), "failing", "echo 'luac: syntax error' >&2\nexit 1");
    let err = Luac::new(failing).compile("return").unwrap_err();
    match err {
        CompileError::Failed { message, .. } => assert_eq!(message, "luac: syntax error"),
        other => panic!("expected Failed, got {other:?}"),
    }

    let silent = script(dir.path(), "silent", "exit 0");
    let err = Luac::new(silent).compile("return 1").unwrap_err();
    assert!(matches!(err, CompileError::NoOutput { .. }));
}
