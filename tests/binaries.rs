use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn lesson_binaries_print_fixed_lines() {
    let cases: [(&str, &[&str]); 5] = [
        (
            env!("CARGO_BIN_EXE_p1_single_responsibility"),
            &[
                "Email sent to: example@example.com",
                "Subject: Test Email",
                "Content: This is a test email.",
            ],
        ),
        (
            env!("CARGO_BIN_EXE_p2_open_closed"),
            &["Total area: 48.27433388230814"],
        ),
        (
            env!("CARGO_BIN_EXE_p3_liskov_substitution"),
            &["Total area: 29.0"],
        ),
        (
            env!("CARGO_BIN_EXE_p4_interface_segregation"),
            &[
                "Connected to network",
                "Connected to printer",
                "Printing document: Test document",
                "Disconnected from network",
                "Disconnected from printer",
            ],
        ),
        (
            env!("CARGO_BIN_EXE_p5_dependency_inversion"),
            &["Data retrieved: Data from database"],
        ),
    ];

    for (bin, expected) in cases {
        let output = run(bin, &[]);
        assert!(output.status.success(), "{bin} failed");
        assert_eq!(stdout_lines(&output), expected, "{bin}");
    }
}

#[test]
fn tour_runs_every_lesson() {
    let output = run(env!("CARGO_BIN_EXE_solid_tour"), &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for heading in [
        "Single Responsibility (SRP)",
        "Open/Closed (OCP)",
        "Liskov Substitution (LSP)",
        "Interface Segregation (ISP)",
        "Dependency Inversion (DIP)",
    ] {
        assert!(stdout.contains(heading), "missing {heading}");
    }
    assert!(stdout.contains("Data retrieved: Data from database"));
}

#[test]
fn tour_reads_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[email]\nrecipient = \"team@example.com\"").unwrap();

    let output = run(
        env!("CARGO_BIN_EXE_solid_tour"),
        &[file.path().to_str().unwrap()],
    );
    assert!(output.status.success());
    assert!(stdout_lines(&output).contains(&"Email sent to: team@example.com".to_string()));
}

#[test]
fn tour_rejects_bad_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[liskov]\nsquare_side = -1.0").unwrap();

    let output = run(
        env!("CARGO_BIN_EXE_solid_tour"),
        &[file.path().to_str().unwrap()],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("liskov.square_side"));
}
