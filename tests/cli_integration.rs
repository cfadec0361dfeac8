use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let dir =
        std::env::temp_dir().join(format!("coworked-{prefix}-{}-{nanos}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

fn coworked_bin() -> String {
    std::env::var("CARGO_BIN_EXE_coworked").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("coworked.exe");
        } else {
            path.push("coworked");
        }
        path.to_string_lossy().into_owned()
    })
}

fn run_coworked(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(coworked_bin())
        .args(args)
        .output()
        .expect("run coworked");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn reports_longest_working_pair() {
    let root = unique_temp_dir("basic");
    let input = root.join("assignments.csv");
    write_file(
        &input,
        "EmpID,ProjectID,DateFrom,DateTo\n\
         101,1,2021-1-1,2021-1-3\n\
         102,1,2021-1-1,2021-1-3\n",
    );

    let (ok, stdout, stderr) = run_coworked(&[input.to_str().unwrap()]);
    assert!(ok, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "EmployeeID#1,EmployeeID#2,ProjectID,DaysWorked\n101,102,1,3\n"
    );

    let _ = fs::remove_dir_all(root);
}

#[test]
fn null_end_dates_resolve_against_as_of() {
    let root = unique_temp_dir("null-dates");
    let input = root.join("assignments.txt");
    write_file(
        &input,
        "EmpID,ProjectID,DateFrom,DateTo\n\
         201,5,2024-1-8,NULL\n\
         202,5,2024-1-8,null\n",
    );

    let (ok, stdout, stderr) =
        run_coworked(&[input.to_str().unwrap(), "--as-of", "2024-1-10"]);
    assert!(ok, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "EmployeeID#1,EmployeeID#2,ProjectID,DaysWorked\n201,202,5,3\n"
    );

    let _ = fs::remove_dir_all(root);
}

#[test]
fn mixed_date_layouts_parse_in_one_file() {
    let root = unique_temp_dir("layouts");
    let input = root.join("assignments.csv");
    write_file(
        &input,
        "1,7,2021-1-1,5/1/2021\n\
         2,7,1.1.2021,20210105\n",
    );

    let (ok, stdout, stderr) = run_coworked(&[input.to_str().unwrap()]);
    assert!(ok, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "EmployeeID#1,EmployeeID#2,ProjectID,DaysWorked\n1,2,7,5\n"
    );

    let _ = fs::remove_dir_all(root);
}

#[test]
fn malformed_lines_are_skipped_silently() {
    let root = unique_temp_dir("malformed");
    let input = root.join("assignments.csv");
    write_file(
        &input,
        "EmpID,ProjectID,DateFrom,DateTo\n\
         1,7,2021-1-1\n\
         oops,7,2021-1-1,2021-1-2\n\
         1,7,2021-1-5,2021-1-1\n\
         1,7,2021-1-1,2021-1-2\n\
         2,7,2021-1-1,2021-1-2\n",
    );

    let (ok, stdout, stderr) = run_coworked(&[input.to_str().unwrap()]);
    assert!(ok, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "EmployeeID#1,EmployeeID#2,ProjectID,DaysWorked\n1,2,7,2\n"
    );

    let _ = fs::remove_dir_all(root);
}

#[test]
fn no_overlap_prints_fixed_message() {
    let root = unique_temp_dir("no-overlap");
    let input = root.join("assignments.csv");
    write_file(&input, "EmpID,ProjectID,DateFrom,DateTo\n1,7,2021-1-1,2021-1-2\n");

    let (ok, stdout, _) = run_coworked(&[input.to_str().unwrap()]);
    assert!(ok);
    assert_eq!(
        stdout,
        "No employees have worked together on common projects\n"
    );

    let _ = fs::remove_dir_all(root);
}

#[test]
fn json_format_emits_winning_pairs() {
    let root = unique_temp_dir("json");
    let input = root.join("assignments.csv");
    write_file(
        &input,
        "101,1,2021-1-1,2021-1-3\n\
         102,1,2021-1-1,2021-1-3\n\
         101,2,2021-1-2,2021-1-2\n\
         102,2,2021-1-2,2021-1-2\n",
    );

    let (ok, stdout, stderr) = run_coworked(&[input.to_str().unwrap(), "--format", "json"]);
    assert!(ok, "stderr: {stderr}");

    let json: Value = serde_json::from_str(&stdout).expect("json");
    let arr = json.as_array().expect("array output");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["employee_1"].as_i64(), Some(101));
    assert_eq!(arr[0]["employee_2"].as_i64(), Some(102));
    // 3 distinct days even though Jan 2 was shared on two projects
    assert_eq!(arr[0]["total_days_together"].as_i64(), Some(3));
    assert_eq!(arr[0]["projects"].as_array().map(Vec::len), Some(2));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn missing_file_exits_cleanly_with_diagnostic() {
    let (ok, stdout, _) = run_coworked(&["/definitely/not/here.csv"]);
    assert!(ok, "input validation failures must not be process errors");
    assert!(
        stdout.contains("File doesn't exist"),
        "stdout: {stdout}"
    );
}

#[test]
fn wrong_extension_exits_cleanly_with_diagnostic() {
    let root = unique_temp_dir("extension");
    let input = root.join("assignments.json");
    write_file(&input, "101,1,2021-1-1,2021-1-3\n");

    let (ok, stdout, _) = run_coworked(&[input.to_str().unwrap()]);
    assert!(ok);
    assert!(
        stdout.contains("File extension should be .csv, .txt or none"),
        "stdout: {stdout}"
    );

    let _ = fs::remove_dir_all(root);
}

#[test]
fn invalid_as_of_exits_cleanly_with_diagnostic() {
    let root = unique_temp_dir("as-of");
    let input = root.join("assignments.csv");
    write_file(&input, "101,1,2021-1-1,2021-1-3\n");

    let (ok, stdout, _) = run_coworked(&[input.to_str().unwrap(), "--as-of", "yesterday"]);
    assert!(ok);
    assert!(stdout.contains("Invalid date \"yesterday\""), "stdout: {stdout}");

    let _ = fs::remove_dir_all(root);
}

#[test]
fn prompts_for_path_when_argument_is_omitted() {
    let root = unique_temp_dir("prompt");
    let input = root.join("assignments.csv");
    write_file(
        &input,
        "101,1,2021-1-1,2021-1-3\n102,1,2021-1-1,2021-1-3\n",
    );

    let mut child = Command::new(coworked_bin())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn coworked");
    child
        .stdin
        .as_mut()
        .expect("stdin")
        .write_all(format!("{}\n", input.display()).as_bytes())
        .expect("write path to stdin");
    let output = child.wait_with_output().expect("wait for coworked");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Path to file: "));
    assert!(
        stdout.contains("EmployeeID#1,EmployeeID#2,ProjectID,DaysWorked\n101,102,1,3"),
        "stdout: {stdout}"
    );

    let _ = fs::remove_dir_all(root);
}

#[test]
fn tied_pairs_are_both_reported_sorted() {
    let root = unique_temp_dir("ties");
    let input = root.join("assignments.csv");
    write_file(
        &input,
        "EmpID,ProjectID,DateFrom,DateTo\n\
         8,10,2021-1-1,2021-1-2\n\
         9,10,2021-1-1,2021-1-2\n\
         1,20,2021-2-1,2021-2-2\n\
         2,20,2021-2-1,2021-2-2\n",
    );

    let (ok, stdout, stderr) = run_coworked(&[input.to_str().unwrap()]);
    assert!(ok, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "EmployeeID#1,EmployeeID#2,ProjectID,DaysWorked\n1,2,20,2\n8,9,10,2\n"
    );

    let _ = fs::remove_dir_all(root);
}
