use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::tempdir;

#[test]
fn missing_source_is_reported_with_logging_off() {
    let dir = tempdir().expect("temp dir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_bake_brdf_lut"))
        .env("RUST_LOG", "off")
        .env("ANISO_LUT_TEXTURES_DIR", dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn bake_brdf_lut");
    child.stdin.take().expect("stdin").write_all(b"1.5 100\n").expect("write exponents");
    let out = child.wait_with_output().expect("wait");

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("there is no texture called"), "{stdout}");
    assert!(stdout.contains("halfVectorSampling [1.5,100].png"), "{stdout}");
}
