use sobel_edges::color::pack_rgb;
use sobel_edges::image::io::{read_rgb_image, write_rgb_image};
use sobel_edges::image::ImageView;
use sobel_edges::Grid;
use std::fs;
use std::process::Command;

fn sobel_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sobel"))
}

#[test]
fn too_many_arguments_prints_usage_and_fails() {
    let output = sobel_bin().args(["a.png", "b.png", "c", "d"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: Too many arguments"), "stderr: {stderr}");
    assert!(stderr.contains("[input_path] [output_path]"), "stderr: {stderr}");
}

#[test]
fn explicit_output_path_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("edges.png");
    let rgb = Grid::from_fn(10, 8, |x, _| if x < 5 { 0 } else { pack_rgb(255, 255, 255) });
    write_rgb_image(&rgb, &input).unwrap();

    let status = sobel_bin()
        .current_dir(dir.path())
        .args([&input, &output])
        .status()
        .unwrap();
    assert!(status.success());

    let edges = read_rgb_image(&output).unwrap();
    assert_eq!(edges.dims(), (10, 8));
    assert_eq!(edges.get(4, 4), pack_rgb(255, 255, 255));
    assert_eq!(edges.get(0, 4), 0);
    assert!(!dir.path().join("test.png").exists());
}

#[test]
fn missing_input_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let output = sobel_bin()
        .current_dir(dir.path())
        .arg("missing.png")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "), "stderr: {stderr}");
    assert!(stderr.contains("missing.png"), "stderr: {stderr}");
    assert!(!dir.path().join("test.png").exists());
}

#[test]
fn stage_runner_writes_each_stage_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let rgb = Grid::from_fn(6, 6, |x, y| pack_rgb((x * 40) as u8, (y * 40) as u8, 0));
    write_rgb_image(&rgb, &input).unwrap();

    let config = dir.path().join("config.json");
    let body = serde_json::json!({
        "input": input,
        "stages": [
            { "stage": "gray", "output": dir.path().join("gray.png") },
            { "stage": "smooth" },
            { "stage": "gradient_x" }
        ],
        "report": dir.path().join("report.json"),
    });
    fs::write(&config, body.to_string()).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_sobel_stages"))
        .current_dir(dir.path())
        .arg(&config)
        .status()
        .unwrap();
    assert!(status.success());
    assert!(dir.path().join("gray.png").exists());
    assert!(dir.path().join("test_smoothed.png").exists());
    assert!(dir.path().join("test_gradient_x.png").exists());

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(report.as_array().map(Vec::len), Some(3));
    assert_eq!(report[1]["stage"], "smooth");
    assert_eq!(report[2]["stage"], "gradient_x");
}
